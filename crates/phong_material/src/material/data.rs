//! Generic material attribute store
//!
//! [`MaterialData`] owns the attributes an importer produced for one material.
//! Entries are kept sorted by attribute name, so lookups are binary searches
//! and iteration order is stable regardless of insertion order.

use bitflags::bitflags;
use log::debug;
use serde::{Deserialize, Serialize};

use super::alpha::AlphaMode;
use super::attribute::{AttributeData, AttributeValue, MaterialAttribute};
use super::phong::PhongMaterialData;
use crate::error::{MaterialError, Result};

bitflags! {
    /// Shading models a material provides attributes for
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MaterialTypes: u32 {
        /// Unlit color and texture
        const FLAT = 1 << 0;
        /// Phong/Blinn-Phong ambient, diffuse and specular terms
        const PHONG = 1 << 1;
        /// PBR metallic/roughness workflow
        const PBR_METALLIC_ROUGHNESS = 1 << 2;
        /// PBR specular/glossiness workflow
        const PBR_SPECULAR_GLOSSINESS = 1 << 3;
    }
}

/// Attribute store for a single material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MaterialDataRepr", into = "MaterialDataRepr")]
pub struct MaterialData {
    types: MaterialTypes,
    attributes: Vec<(MaterialAttribute, AttributeValue)>,
}

impl Default for MaterialData {
    fn default() -> Self {
        Self {
            types: MaterialTypes::empty(),
            attributes: Vec::new(),
        }
    }
}

impl MaterialData {
    /// Create a material from a list of attributes
    ///
    /// Fails if a value does not have the type its attribute requires or if
    /// an attribute appears more than once.
    pub fn new<I>(types: MaterialTypes, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (MaterialAttribute, AttributeValue)>,
    {
        let mut attributes: Vec<_> = attributes.into_iter().collect();

        for (attribute, value) in &attributes {
            let expected = attribute.attribute_type();
            let actual = value.attribute_type();
            if expected != actual {
                return Err(MaterialError::TypeMismatch {
                    attribute: *attribute,
                    expected,
                    actual,
                });
            }
        }

        attributes.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()));
        if let Some(pair) = attributes.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(MaterialError::DuplicateAttribute(pair[0].0));
        }

        debug!("Created material {:?} with {} attributes", types, attributes.len());

        Ok(Self { types, attributes })
    }

    /// Shading models this material provides attributes for
    pub fn types(&self) -> MaterialTypes {
        self.types
    }

    /// Number of stored attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Iterate attributes in name order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialAttribute, &AttributeValue)> + '_ {
        self.attributes.iter().map(|(attribute, value)| (*attribute, value))
    }

    /// Raw value of an attribute
    pub fn value(&self, attribute: MaterialAttribute) -> Option<&AttributeValue> {
        self.attributes
            .binary_search_by(|(stored, _)| stored.name().cmp(attribute.name()))
            .ok()
            .map(|index| &self.attributes[index].1)
    }

    /// Whether the attribute is present
    pub fn has_attribute(&self, attribute: MaterialAttribute) -> bool {
        self.value(attribute).is_some()
    }

    /// Value of a required attribute
    pub fn attribute<T: AttributeData>(&self, attribute: MaterialAttribute) -> Result<T> {
        let value = self
            .value(attribute)
            .ok_or(MaterialError::AttributeMissing(attribute))?;
        T::from_value(value).ok_or(MaterialError::TypeMismatch {
            attribute,
            expected: T::TYPE,
            actual: value.attribute_type(),
        })
    }

    /// Value of an optional attribute, `None` if absent
    pub fn try_attribute<T: AttributeData>(&self, attribute: MaterialAttribute) -> Option<T> {
        self.value(attribute).and_then(T::from_value)
    }

    /// Value of an attribute or `default` if absent
    pub fn attribute_or<T: AttributeData>(&self, attribute: MaterialAttribute, default: T) -> T {
        self.try_attribute(attribute).unwrap_or(default)
    }

    /// Whether back faces should be rendered
    pub fn is_double_sided(&self) -> bool {
        self.attribute_or(MaterialAttribute::DoubleSided, false)
    }

    /// Alpha mode
    ///
    /// [`AlphaMode::Blend`] if `AlphaBlend` is set, otherwise
    /// [`AlphaMode::Mask`] if `AlphaMask` is present, otherwise opaque.
    pub fn alpha_mode(&self) -> AlphaMode {
        if self.attribute_or(MaterialAttribute::AlphaBlend, false) {
            AlphaMode::Blend
        } else if self.has_attribute(MaterialAttribute::AlphaMask) {
            AlphaMode::Mask
        } else {
            AlphaMode::Opaque
        }
    }

    /// Alpha cutoff, `0.5` if not specified
    pub fn alpha_mask(&self) -> f32 {
        self.attribute_or(MaterialAttribute::AlphaMask, 0.5)
    }

    /// View this material through its Phong attributes
    pub fn as_phong(&self) -> PhongMaterialData<'_> {
        PhongMaterialData::new(self)
    }
}

/// Serialized layout of a material
#[derive(Serialize, Deserialize)]
struct MaterialDataRepr {
    #[serde(default = "MaterialTypes::empty")]
    types: MaterialTypes,
    #[serde(default)]
    attributes: Vec<AttributeEntry>,
}

#[derive(Serialize, Deserialize)]
struct AttributeEntry {
    name: MaterialAttribute,
    value: AttributeValue,
}

impl TryFrom<MaterialDataRepr> for MaterialData {
    type Error = MaterialError;

    fn try_from(repr: MaterialDataRepr) -> Result<Self> {
        Self::new(
            repr.types,
            repr.attributes.into_iter().map(|entry| (entry.name, entry.value)),
        )
    }
}

impl From<MaterialData> for MaterialDataRepr {
    fn from(data: MaterialData) -> Self {
        Self {
            types: data.types,
            attributes: data
                .attributes
                .into_iter()
                .map(|(name, value)| AttributeEntry { name, value })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{opaque_white, Color4, Mat3};
    use crate::material::AttributeType;

    fn sample() -> MaterialData {
        MaterialData::new(
            MaterialTypes::PHONG,
            [
                (MaterialAttribute::Shininess, 32.0f32.into()),
                (MaterialAttribute::DiffuseTexture, 5u32.into()),
                (MaterialAttribute::AmbientColor, opaque_white().into()),
                (MaterialAttribute::DoubleSided, true.into()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_attributes_sorted_by_name() {
        let data = sample();
        let order: Vec<_> = data.iter().map(|(attribute, _)| attribute).collect();
        assert_eq!(
            order,
            vec![
                MaterialAttribute::AmbientColor,
                MaterialAttribute::DiffuseTexture,
                MaterialAttribute::DoubleSided,
                MaterialAttribute::Shininess,
            ]
        );
        assert_eq!(data.attribute_count(), 4);
        assert_eq!(data.types(), MaterialTypes::PHONG);
    }

    #[test]
    fn test_lookup() {
        let data = sample();
        assert!(data.has_attribute(MaterialAttribute::DiffuseTexture));
        assert!(!data.has_attribute(MaterialAttribute::NormalTexture));

        assert_eq!(data.attribute::<u32>(MaterialAttribute::DiffuseTexture), Ok(5));
        assert_eq!(data.try_attribute::<f32>(MaterialAttribute::Shininess), Some(32.0));
        assert_eq!(data.try_attribute::<u32>(MaterialAttribute::NormalTexture), None);
        assert_eq!(data.attribute_or(MaterialAttribute::CoordinateSet, 7u32), 7);
        assert_eq!(
            data.attribute_or(MaterialAttribute::AmbientColor, Color4::zeros()),
            opaque_white()
        );
    }

    #[test]
    fn test_attribute_missing() {
        let data = sample();
        assert_eq!(
            data.attribute::<u32>(MaterialAttribute::NormalTexture),
            Err(MaterialError::AttributeMissing(MaterialAttribute::NormalTexture))
        );
    }

    #[test]
    fn test_attribute_wrong_type_requested() {
        let data = sample();
        assert_eq!(
            data.attribute::<f32>(MaterialAttribute::DiffuseTexture),
            Err(MaterialError::TypeMismatch {
                attribute: MaterialAttribute::DiffuseTexture,
                expected: AttributeType::Float,
                actual: AttributeType::UnsignedInt,
            })
        );
    }

    #[test]
    fn test_new_rejects_mismatched_value() {
        let result = MaterialData::new(
            MaterialTypes::PHONG,
            [(MaterialAttribute::TextureMatrix, 1.0f32.into())],
        );
        assert_eq!(
            result,
            Err(MaterialError::TypeMismatch {
                attribute: MaterialAttribute::TextureMatrix,
                expected: AttributeType::Matrix3x3,
                actual: AttributeType::Float,
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = MaterialData::new(
            MaterialTypes::PHONG,
            [
                (MaterialAttribute::DiffuseTexture, 1u32.into()),
                (MaterialAttribute::Shininess, 2.0f32.into()),
                (MaterialAttribute::DiffuseTexture, 3u32.into()),
            ],
        );
        assert_eq!(
            result,
            Err(MaterialError::DuplicateAttribute(MaterialAttribute::DiffuseTexture))
        );
    }

    #[test]
    fn test_alpha_mode() {
        let opaque = MaterialData::default();
        assert_eq!(opaque.alpha_mode(), AlphaMode::Opaque);
        assert_eq!(opaque.alpha_mask(), 0.5);
        assert!(!opaque.is_double_sided());

        let masked = MaterialData::new(
            MaterialTypes::empty(),
            [(MaterialAttribute::AlphaMask, 0.25f32.into())],
        )
        .unwrap();
        assert_eq!(masked.alpha_mode(), AlphaMode::Mask);
        assert_eq!(masked.alpha_mask(), 0.25);

        let blended = MaterialData::new(
            MaterialTypes::empty(),
            [
                (MaterialAttribute::AlphaMask, 0.25f32.into()),
                (MaterialAttribute::AlphaBlend, true.into()),
            ],
        )
        .unwrap();
        assert_eq!(blended.alpha_mode(), AlphaMode::Blend);

        let not_blended = MaterialData::new(
            MaterialTypes::empty(),
            [(MaterialAttribute::AlphaBlend, false.into())],
        )
        .unwrap();
        assert_eq!(not_blended.alpha_mode(), AlphaMode::Opaque);
    }

    #[test]
    fn test_matrix_attribute() {
        let matrix = Mat3::new_scaling(2.0);
        let data = MaterialData::new(
            MaterialTypes::PHONG,
            [(MaterialAttribute::DiffuseTextureMatrix, matrix.into())],
        )
        .unwrap();
        assert_eq!(
            data.attribute::<Mat3>(MaterialAttribute::DiffuseTextureMatrix),
            Ok(matrix)
        );
    }
}
