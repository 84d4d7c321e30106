//! # Phong Material
//!
//! Typed access to imported material attributes.
//!
//! Importers describe each material as a generic attribute store
//! ([`MaterialData`]). This crate provides the store and a Phong view over it
//! ([`PhongMaterialData`]) that returns colors, texture IDs, coordinate sets,
//! the texture transform and shininess with the Phong/Blinn-Phong defaults.
//!
//! ## Quick Start
//!
//! ```rust
//! use phong_material::prelude::*;
//!
//! fn main() -> Result<(), MaterialError> {
//!     let data = MaterialData::new(
//!         MaterialTypes::PHONG,
//!         [
//!             (MaterialAttribute::DiffuseTexture, 5u32.into()),
//!             (MaterialAttribute::CoordinateSet, 2u32.into()),
//!         ],
//!     )?;
//!
//!     let phong = data.as_phong();
//!     assert_eq!(phong.diffuse_texture()?, 5);
//!     assert_eq!(phong.diffuse_coordinate_set()?, 2);
//!     assert_eq!(phong.shininess(), 80.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod io;
pub mod material;

mod error;

pub use error::{MaterialError, Result};
pub use material::{MaterialData, PhongMaterialData};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        MaterialError,
        foundation::math::{Color4, Mat3, rgbaf},
        io::{FileError, MaterialFile},
        material::{
            AlphaMode, AttributeValue, MaterialAttribute, MaterialData, MaterialTypes,
            PhongFlags, PhongMaterialData, PhongTextureSlot,
        },
    };
}
