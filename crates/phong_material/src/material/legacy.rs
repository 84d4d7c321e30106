//! Legacy Phong flags and parameter translation
//!
//! Older importers described a Phong material with a flag bitmask and a fixed
//! list of colors, texture IDs and coordinate sets. [`translate_legacy_phong`]
//! turns such a parameter list into a [`MaterialData`] once; nothing of the
//! old layout is kept afterwards. [`PhongMaterialData::flags()`] recovers the
//! flags from an attribute store.
//!
//! [`PhongMaterialData::flags()`]: super::PhongMaterialData::flags

use bitflags::bitflags;
use log::{debug, warn};

use super::alpha::AlphaMode;
use super::attribute::{AttributeValue, MaterialAttribute};
use super::data::{MaterialData, MaterialTypes};
use super::phong::PhongTextureSlot;
use crate::error::{MaterialError, Result};
use crate::foundation::math::{opaque_black, opaque_white, Color4, Mat3};

bitflags! {
    /// Legacy Phong material flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PhongFlags: u32 {
        /// Back faces are rendered
        const DOUBLE_SIDED = 1 << 0;
        /// Material has an ambient texture
        const AMBIENT_TEXTURE = 1 << 1;
        /// Material has a diffuse texture
        const DIFFUSE_TEXTURE = 1 << 2;
        /// Material has a specular texture
        const SPECULAR_TEXTURE = 1 << 3;
        /// Material has a normal texture
        const NORMAL_TEXTURE = 1 << 4;
        /// Material has a texture coordinate transform
        const TEXTURE_TRANSFORMATION = 1 << 5;
        /// Material uses non-zero texture coordinate sets
        const TEXTURE_COORDINATE_SETS = 1 << 6;
    }
}

impl PhongFlags {
    /// Any of the texture flags
    pub const ANY_TEXTURE: Self = Self::AMBIENT_TEXTURE
        .union(Self::DIFFUSE_TEXTURE)
        .union(Self::SPECULAR_TEXTURE)
        .union(Self::NORMAL_TEXTURE);
}

/// Positional Phong parameters of the legacy construction path
///
/// Texture IDs and coordinate sets are only read when the matching texture
/// flag is set.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyPhongParameters {
    /// Flags selecting which fields are meaningful
    pub flags: PhongFlags,
    /// Ambient color
    pub ambient_color: Color4,
    /// Ambient texture ID
    pub ambient_texture: u32,
    /// Ambient texture coordinate set
    pub ambient_coordinate_set: u32,
    /// Diffuse color
    pub diffuse_color: Color4,
    /// Diffuse texture ID
    pub diffuse_texture: u32,
    /// Diffuse texture coordinate set
    pub diffuse_coordinate_set: u32,
    /// Specular color
    pub specular_color: Color4,
    /// Specular texture ID
    pub specular_texture: u32,
    /// Specular texture coordinate set
    pub specular_coordinate_set: u32,
    /// Normal texture ID
    pub normal_texture: u32,
    /// Normal texture coordinate set
    pub normal_coordinate_set: u32,
    /// Texture coordinate transform
    pub texture_matrix: Mat3,
    /// Alpha mode
    pub alpha_mode: AlphaMode,
    /// Alpha cutoff
    pub alpha_mask: f32,
    /// Specular exponent
    pub shininess: f32,
}

impl Default for LegacyPhongParameters {
    fn default() -> Self {
        Self {
            flags: PhongFlags::empty(),
            ambient_color: opaque_black(),
            ambient_texture: 0,
            ambient_coordinate_set: 0,
            diffuse_color: opaque_white(),
            diffuse_texture: 0,
            diffuse_coordinate_set: 0,
            specular_color: opaque_white(),
            specular_texture: 0,
            specular_coordinate_set: 0,
            normal_texture: 0,
            normal_coordinate_set: 0,
            texture_matrix: Mat3::identity(),
            alpha_mode: AlphaMode::Opaque,
            alpha_mask: 0.0,
            shininess: 80.0,
        }
    }
}

impl LegacyPhongParameters {
    /// Default parameters with the given flags, alpha setup and shininess
    pub fn new(flags: PhongFlags, alpha_mode: AlphaMode, alpha_mask: f32, shininess: f32) -> Self {
        Self {
            flags,
            alpha_mode,
            alpha_mask,
            shininess,
            ..Default::default()
        }
    }

    /// Translate into an attribute store
    pub fn translate(&self) -> Result<MaterialData> {
        translate_legacy_phong(self)
    }

    /// Flag, texture ID and coordinate set of a slot
    fn slot(&self, slot: PhongTextureSlot) -> (PhongFlags, u32, u32) {
        match slot {
            PhongTextureSlot::Ambient => (PhongFlags::AMBIENT_TEXTURE, self.ambient_texture, self.ambient_coordinate_set),
            PhongTextureSlot::Diffuse => (PhongFlags::DIFFUSE_TEXTURE, self.diffuse_texture, self.diffuse_coordinate_set),
            PhongTextureSlot::Specular => (PhongFlags::SPECULAR_TEXTURE, self.specular_texture, self.specular_coordinate_set),
            PhongTextureSlot::Normal => (PhongFlags::NORMAL_TEXTURE, self.normal_texture, self.normal_coordinate_set),
        }
    }

    fn validate(&self) -> Result<()> {
        let flags = self.flags;

        if flags.contains(PhongFlags::TEXTURE_TRANSFORMATION) && !flags.intersects(PhongFlags::ANY_TEXTURE) {
            return Err(MaterialError::InvalidLegacyParameters(
                "texture transformation enabled but the material has no textures".to_string(),
            ));
        }
        if !flags.contains(PhongFlags::TEXTURE_TRANSFORMATION) && self.texture_matrix != Mat3::identity() {
            return Err(MaterialError::InvalidLegacyParameters(
                "non-default texture matrix requires TEXTURE_TRANSFORMATION to be enabled".to_string(),
            ));
        }
        let any_coordinate_set = PhongTextureSlot::ALL
            .iter()
            .any(|&slot| self.slot(slot).2 != 0);
        if !flags.contains(PhongFlags::TEXTURE_COORDINATE_SETS) && any_coordinate_set {
            return Err(MaterialError::InvalidLegacyParameters(
                "non-zero texture coordinate sets require TEXTURE_COORDINATE_SETS to be enabled"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Convert legacy Phong parameters into a Phong [`MaterialData`]
///
/// Colors and shininess are always written. Texture IDs are written for
/// flagged textures, together with their coordinate set when non-zero. The
/// alpha mask is written for [`AlphaMode::Mask`] and for any non-zero cutoff.
pub fn translate_legacy_phong(params: &LegacyPhongParameters) -> Result<MaterialData> {
    if let Err(err) = params.validate() {
        warn!("Rejecting legacy Phong parameters: {}", err);
        return Err(err);
    }

    let flags = params.flags;
    let mut attributes: Vec<(MaterialAttribute, AttributeValue)> = Vec::new();

    if flags.contains(PhongFlags::DOUBLE_SIDED) {
        attributes.push((MaterialAttribute::DoubleSided, true.into()));
    }
    if params.alpha_mode == AlphaMode::Blend {
        attributes.push((MaterialAttribute::AlphaBlend, true.into()));
    }
    if params.alpha_mode == AlphaMode::Mask || params.alpha_mask != 0.0 {
        attributes.push((MaterialAttribute::AlphaMask, params.alpha_mask.into()));
    }

    for slot in PhongTextureSlot::ALL {
        let (flag, texture, coordinate_set) = params.slot(slot);
        if flags.contains(flag) {
            attributes.push((slot.texture_attribute(), texture.into()));
            if coordinate_set != 0 {
                attributes.push((slot.coordinate_set_attribute(), coordinate_set.into()));
            }
        }
    }

    attributes.push((MaterialAttribute::AmbientColor, params.ambient_color.into()));
    attributes.push((MaterialAttribute::DiffuseColor, params.diffuse_color.into()));
    attributes.push((MaterialAttribute::SpecularColor, params.specular_color.into()));

    if flags.contains(PhongFlags::TEXTURE_TRANSFORMATION) {
        attributes.push((MaterialAttribute::TextureMatrix, params.texture_matrix.into()));
    }

    attributes.push((MaterialAttribute::Shininess, params.shininess.into()));

    debug!("Translated legacy Phong flags {:?} into {} attributes", flags, attributes.len());

    MaterialData::new(MaterialTypes::PHONG, attributes)
}
