//! Material attribute keys and dynamically-typed values

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Color4, Mat3};

/// Predefined material attribute keys
///
/// Each key has a fixed name, used for ordering and serialization, and a
/// fixed value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialAttribute {
    /// Whether back faces should be rendered, `bool`
    DoubleSided,
    /// Alpha cutoff for masked rendering, `f32`
    AlphaMask,
    /// Whether alpha blending is enabled, `bool`
    AlphaBlend,
    /// Ambient color, [`Color4`]
    AmbientColor,
    /// Ambient texture ID, `u32`
    AmbientTexture,
    /// Ambient texture transform, [`Mat3`]
    AmbientTextureMatrix,
    /// Ambient texture coordinate set, `u32`
    AmbientCoordinateSet,
    /// Diffuse color, [`Color4`]
    DiffuseColor,
    /// Diffuse texture ID, `u32`
    DiffuseTexture,
    /// Diffuse texture transform, [`Mat3`]
    DiffuseTextureMatrix,
    /// Diffuse texture coordinate set, `u32`
    DiffuseCoordinateSet,
    /// Specular color, [`Color4`]
    SpecularColor,
    /// Specular texture ID, `u32`
    SpecularTexture,
    /// Specular texture transform, [`Mat3`]
    SpecularTextureMatrix,
    /// Specular texture coordinate set, `u32`
    SpecularCoordinateSet,
    /// Specular exponent, `f32`
    Shininess,
    /// Tangent-space normal map texture ID, `u32`
    NormalTexture,
    /// Normal texture transform, [`Mat3`]
    NormalTextureMatrix,
    /// Normal texture coordinate set, `u32`
    NormalCoordinateSet,
    /// Transform shared by all textures, [`Mat3`]
    TextureMatrix,
    /// Coordinate set shared by all textures, `u32`
    CoordinateSet,
}

impl MaterialAttribute {
    /// Every predefined attribute
    pub const ALL: [Self; 21] = [
        Self::DoubleSided,
        Self::AlphaMask,
        Self::AlphaBlend,
        Self::AmbientColor,
        Self::AmbientTexture,
        Self::AmbientTextureMatrix,
        Self::AmbientCoordinateSet,
        Self::DiffuseColor,
        Self::DiffuseTexture,
        Self::DiffuseTextureMatrix,
        Self::DiffuseCoordinateSet,
        Self::SpecularColor,
        Self::SpecularTexture,
        Self::SpecularTextureMatrix,
        Self::SpecularCoordinateSet,
        Self::Shininess,
        Self::NormalTexture,
        Self::NormalTextureMatrix,
        Self::NormalCoordinateSet,
        Self::TextureMatrix,
        Self::CoordinateSet,
    ];

    /// Attribute name as stored in material files
    pub fn name(self) -> &'static str {
        match self {
            Self::DoubleSided => "DoubleSided",
            Self::AlphaMask => "AlphaMask",
            Self::AlphaBlend => "AlphaBlend",
            Self::AmbientColor => "AmbientColor",
            Self::AmbientTexture => "AmbientTexture",
            Self::AmbientTextureMatrix => "AmbientTextureMatrix",
            Self::AmbientCoordinateSet => "AmbientCoordinateSet",
            Self::DiffuseColor => "DiffuseColor",
            Self::DiffuseTexture => "DiffuseTexture",
            Self::DiffuseTextureMatrix => "DiffuseTextureMatrix",
            Self::DiffuseCoordinateSet => "DiffuseCoordinateSet",
            Self::SpecularColor => "SpecularColor",
            Self::SpecularTexture => "SpecularTexture",
            Self::SpecularTextureMatrix => "SpecularTextureMatrix",
            Self::SpecularCoordinateSet => "SpecularCoordinateSet",
            Self::Shininess => "Shininess",
            Self::NormalTexture => "NormalTexture",
            Self::NormalTextureMatrix => "NormalTextureMatrix",
            Self::NormalCoordinateSet => "NormalCoordinateSet",
            Self::TextureMatrix => "TextureMatrix",
            Self::CoordinateSet => "CoordinateSet",
        }
    }

    /// Value type every occurrence of this attribute must have
    pub fn attribute_type(self) -> AttributeType {
        match self {
            Self::DoubleSided | Self::AlphaBlend => AttributeType::Bool,
            Self::AlphaMask | Self::Shininess => AttributeType::Float,
            Self::AmbientColor | Self::DiffuseColor | Self::SpecularColor => AttributeType::Vector4,
            Self::AmbientTexture
            | Self::AmbientCoordinateSet
            | Self::DiffuseTexture
            | Self::DiffuseCoordinateSet
            | Self::SpecularTexture
            | Self::SpecularCoordinateSet
            | Self::NormalTexture
            | Self::NormalCoordinateSet
            | Self::CoordinateSet => AttributeType::UnsignedInt,
            Self::AmbientTextureMatrix
            | Self::DiffuseTextureMatrix
            | Self::SpecularTextureMatrix
            | Self::NormalTextureMatrix
            | Self::TextureMatrix => AttributeType::Matrix3x3,
        }
    }
}

impl fmt::Display for MaterialAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type tag of an [`AttributeValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    /// `bool`
    Bool,
    /// `f32`
    Float,
    /// `u32`
    UnsignedInt,
    /// Four-component float vector, used for colors
    Vector4,
    /// 3x3 float matrix
    Matrix3x3,
}

/// Dynamically-typed attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Boolean value
    Bool(bool),
    /// Scalar value
    Float(f32),
    /// Unsigned integer value, used for texture IDs and coordinate sets
    UnsignedInt(u32),
    /// Color value
    Vector4(Color4),
    /// Matrix value
    Matrix3x3(Mat3),
}

impl AttributeValue {
    /// Type tag of the stored value
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            Self::Bool(_) => AttributeType::Bool,
            Self::Float(_) => AttributeType::Float,
            Self::UnsignedInt(_) => AttributeType::UnsignedInt,
            Self::Vector4(_) => AttributeType::Vector4,
            Self::Matrix3x3(_) => AttributeType::Matrix3x3,
        }
    }
}

/// Rust types that can be read out of an [`AttributeValue`]
pub trait AttributeData: Sized {
    /// Type tag matching `Self`
    const TYPE: AttributeType;

    /// Extract the value if it has the matching type
    fn from_value(value: &AttributeValue) -> Option<Self>;
}

macro_rules! impl_attribute_data {
    ($ty:ty, $variant:ident) => {
        impl AttributeData for $ty {
            const TYPE: AttributeType = AttributeType::$variant;

            fn from_value(value: &AttributeValue) -> Option<Self> {
                match value {
                    AttributeValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for AttributeValue {
            fn from(value: $ty) -> Self {
                AttributeValue::$variant(value)
            }
        }
    };
}

impl_attribute_data!(bool, Bool);
impl_attribute_data!(f32, Float);
impl_attribute_data!(u32, UnsignedInt);
impl_attribute_data!(Color4, Vector4);
impl_attribute_data!(Mat3, Matrix3x3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_attribute_has_a_unique_name() {
        let mut names: Vec<_> = MaterialAttribute::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MaterialAttribute::ALL.len());
    }

    #[test]
    fn test_value_conversion_checks_type() {
        let value = AttributeValue::from(5u32);
        assert_eq!(value.attribute_type(), AttributeType::UnsignedInt);
        assert_eq!(u32::from_value(&value), Some(5));
        assert_eq!(f32::from_value(&value), None);
        assert_eq!(bool::from_value(&value), None);
    }

    #[test]
    fn test_attribute_types() {
        assert_eq!(MaterialAttribute::AmbientColor.attribute_type(), AttributeType::Vector4);
        assert_eq!(MaterialAttribute::TextureMatrix.attribute_type(), AttributeType::Matrix3x3);
        assert_eq!(MaterialAttribute::CoordinateSet.attribute_type(), AttributeType::UnsignedInt);
        assert_eq!(MaterialAttribute::Shininess.attribute_type(), AttributeType::Float);
        assert_eq!(MaterialAttribute::DoubleSided.attribute_type(), AttributeType::Bool);
    }
}
