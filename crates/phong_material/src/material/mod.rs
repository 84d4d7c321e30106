//! Material data and typed views
//!
//! # Architecture
//!
//! - [`MaterialData`] stores attributes as a sorted key/value list
//! - [`PhongMaterialData`] borrows a store and answers Phong-specific queries
//!   with the model's defaults
//! - [`translate_legacy_phong`] converts the old flags-based parameter list
//!   into a store

pub mod alpha;
pub mod attribute;
pub mod data;
pub mod legacy;
pub mod phong;

pub use alpha::AlphaMode;
pub use attribute::{AttributeData, AttributeType, AttributeValue, MaterialAttribute};
pub use data::{MaterialData, MaterialTypes};
pub use legacy::{translate_legacy_phong, LegacyPhongParameters, PhongFlags};
pub use phong::{PhongMaterialData, PhongTextureSlot};
