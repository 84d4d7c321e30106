//! Alpha handling modes

/// How the alpha channel of a material is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaMode {
    /// No transparency
    #[default]
    Opaque,
    /// Alpha testing against [`MaterialData::alpha_mask()`](super::MaterialData::alpha_mask)
    Mask,
    /// Alpha blending
    Blend,
}
