//! Phong view over a material attribute store
//!
//! [`PhongMaterialData`] borrows a [`MaterialData`] and interprets its
//! attributes with the Phong/Blinn-Phong defaults:
//!
//! - ambient color is opaque black, or opaque white if an ambient texture is
//!   present
//! - diffuse and specular colors are opaque white
//! - shininess is `80.0`
//! - the texture matrix is identity
//!
//! Texture coordinate sets resolve per slot first, then fall back to the
//! material-wide `CoordinateSet`, then to `0`.

use super::attribute::MaterialAttribute;
use super::data::MaterialData;
use super::legacy::PhongFlags;
use crate::error::{MaterialError, Result};
use crate::foundation::math::{opaque_black, opaque_white, Color4, Mat3};

const DEFAULT_SHININESS: f32 = 80.0;

/// Texture slots of the Phong model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhongTextureSlot {
    /// Ambient texture
    Ambient,
    /// Diffuse texture
    Diffuse,
    /// Specular texture
    Specular,
    /// Tangent-space normal map
    Normal,
}

impl PhongTextureSlot {
    /// All slots
    pub const ALL: [Self; 4] = [Self::Ambient, Self::Diffuse, Self::Specular, Self::Normal];

    /// Attribute holding the texture ID
    pub fn texture_attribute(self) -> MaterialAttribute {
        match self {
            Self::Ambient => MaterialAttribute::AmbientTexture,
            Self::Diffuse => MaterialAttribute::DiffuseTexture,
            Self::Specular => MaterialAttribute::SpecularTexture,
            Self::Normal => MaterialAttribute::NormalTexture,
        }
    }

    /// Attribute holding the slot-specific coordinate set
    pub fn coordinate_set_attribute(self) -> MaterialAttribute {
        match self {
            Self::Ambient => MaterialAttribute::AmbientCoordinateSet,
            Self::Diffuse => MaterialAttribute::DiffuseCoordinateSet,
            Self::Specular => MaterialAttribute::SpecularCoordinateSet,
            Self::Normal => MaterialAttribute::NormalCoordinateSet,
        }
    }

    /// Attribute holding the slot-specific texture transform
    pub fn texture_matrix_attribute(self) -> MaterialAttribute {
        match self {
            Self::Ambient => MaterialAttribute::AmbientTextureMatrix,
            Self::Diffuse => MaterialAttribute::DiffuseTextureMatrix,
            Self::Specular => MaterialAttribute::SpecularTextureMatrix,
            Self::Normal => MaterialAttribute::NormalTextureMatrix,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ambient => "ambient",
            Self::Diffuse => "diffuse",
            Self::Specular => "specular",
            Self::Normal => "normal",
        }
    }
}

/// Read-only Phong interpretation of a [`MaterialData`]
#[derive(Debug, Clone, Copy)]
pub struct PhongMaterialData<'a> {
    data: &'a MaterialData,
}

impl<'a> PhongMaterialData<'a> {
    /// Wrap an attribute store
    pub fn new(data: &'a MaterialData) -> Self {
        Self { data }
    }

    /// Underlying attribute store
    pub fn data(&self) -> &'a MaterialData {
        self.data
    }

    /// Whether any texture transform is present
    ///
    /// True if the shared `TextureMatrix` or any slot-specific matrix exists,
    /// whatever its value.
    pub fn has_texture_transformation(&self) -> bool {
        self.data.has_attribute(MaterialAttribute::TextureMatrix)
            || PhongTextureSlot::ALL
                .iter()
                .any(|slot| self.data.has_attribute(slot.texture_matrix_attribute()))
    }

    /// Whether any texture uses a non-zero coordinate set
    ///
    /// Coordinate set attributes equal to `0` don't count.
    pub fn has_texture_coordinate_sets(&self) -> bool {
        self.data.attribute_or(MaterialAttribute::CoordinateSet, 0u32) != 0
            || PhongTextureSlot::ALL
                .iter()
                .any(|slot| self.data.attribute_or(slot.coordinate_set_attribute(), 0u32) != 0)
    }

    /// Legacy flags derived from the stored attributes
    pub fn flags(&self) -> PhongFlags {
        let mut flags = PhongFlags::empty();
        flags.set(PhongFlags::DOUBLE_SIDED, self.data.is_double_sided());
        flags.set(PhongFlags::AMBIENT_TEXTURE, self.has_texture(PhongTextureSlot::Ambient));
        flags.set(PhongFlags::DIFFUSE_TEXTURE, self.has_texture(PhongTextureSlot::Diffuse));
        flags.set(PhongFlags::SPECULAR_TEXTURE, self.has_texture(PhongTextureSlot::Specular));
        flags.set(PhongFlags::NORMAL_TEXTURE, self.has_texture(PhongTextureSlot::Normal));
        flags.set(PhongFlags::TEXTURE_TRANSFORMATION, self.has_texture_transformation());
        flags.set(PhongFlags::TEXTURE_COORDINATE_SETS, self.has_texture_coordinate_sets());
        flags
    }

    /// Whether the slot has a texture
    pub fn has_texture(&self, slot: PhongTextureSlot) -> bool {
        self.data.has_attribute(slot.texture_attribute())
    }

    /// Texture ID of a slot
    pub fn texture(&self, slot: PhongTextureSlot) -> Result<u32> {
        self.data.attribute(slot.texture_attribute())
    }

    /// Coordinate set of a slot
    ///
    /// Fails with [`MaterialError::PreconditionViolated`] if the slot has no
    /// texture.
    pub fn coordinate_set(&self, slot: PhongTextureSlot) -> Result<u32> {
        if !self.has_texture(slot) {
            return Err(MaterialError::PreconditionViolated(format!(
                "{}_coordinate_set(): the material doesn't have {} {} texture",
                slot.name(),
                if slot == PhongTextureSlot::Ambient { "an" } else { "a" },
                slot.name()
            )));
        }

        Ok(self
            .data
            .try_attribute(slot.coordinate_set_attribute())
            .unwrap_or_else(|| self.data.attribute_or(MaterialAttribute::CoordinateSet, 0u32)))
    }

    /// Ambient color
    pub fn ambient_color(&self) -> Color4 {
        let default = if self.has_texture(PhongTextureSlot::Ambient) {
            opaque_white()
        } else {
            opaque_black()
        };
        self.data.attribute_or(MaterialAttribute::AmbientColor, default)
    }

    /// Ambient texture ID
    pub fn ambient_texture(&self) -> Result<u32> {
        self.texture(PhongTextureSlot::Ambient)
    }

    /// Ambient texture coordinate set
    pub fn ambient_coordinate_set(&self) -> Result<u32> {
        self.coordinate_set(PhongTextureSlot::Ambient)
    }

    /// Diffuse color
    pub fn diffuse_color(&self) -> Color4 {
        self.data.attribute_or(MaterialAttribute::DiffuseColor, opaque_white())
    }

    /// Diffuse texture ID
    pub fn diffuse_texture(&self) -> Result<u32> {
        self.texture(PhongTextureSlot::Diffuse)
    }

    /// Diffuse texture coordinate set
    pub fn diffuse_coordinate_set(&self) -> Result<u32> {
        self.coordinate_set(PhongTextureSlot::Diffuse)
    }

    /// Specular color
    pub fn specular_color(&self) -> Color4 {
        self.data.attribute_or(MaterialAttribute::SpecularColor, opaque_white())
    }

    /// Specular texture ID
    pub fn specular_texture(&self) -> Result<u32> {
        self.texture(PhongTextureSlot::Specular)
    }

    /// Specular texture coordinate set
    pub fn specular_coordinate_set(&self) -> Result<u32> {
        self.coordinate_set(PhongTextureSlot::Specular)
    }

    /// Normal texture ID
    pub fn normal_texture(&self) -> Result<u32> {
        self.texture(PhongTextureSlot::Normal)
    }

    /// Normal texture coordinate set
    pub fn normal_coordinate_set(&self) -> Result<u32> {
        self.coordinate_set(PhongTextureSlot::Normal)
    }

    /// Texture coordinate transform shared by all slots
    pub fn texture_transform_matrix(&self) -> Mat3 {
        self.data.attribute_or(MaterialAttribute::TextureMatrix, Mat3::identity())
    }

    /// Specular exponent
    pub fn shininess(&self) -> f32 {
        self.data.attribute_or(MaterialAttribute::Shininess, DEFAULT_SHININESS)
    }
}
