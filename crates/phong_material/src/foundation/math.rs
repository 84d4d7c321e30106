//! Math utilities and types
//!
//! Provides the color and matrix types stored in material attributes.

pub use nalgebra::{Matrix3, Vector4};

/// RGBA color with linear float channels
pub type Color4 = Vector4<f32>;

/// 3x3 matrix type, used for 2D texture coordinate transforms
pub type Mat3 = Matrix3<f32>;

/// Build a color from a packed `0xRRGGBBAA` value
pub fn rgbaf(packed: u32) -> Color4 {
    let channel = |shift: u32| ((packed >> shift) & 0xff) as f32 / 255.0;
    Color4::new(channel(24), channel(16), channel(8), channel(0))
}

/// Opaque white, `0xffffffff`
pub fn opaque_white() -> Color4 {
    rgbaf(0xffff_ffff)
}

/// Opaque black, `0x000000ff`
pub fn opaque_black() -> Color4 {
    rgbaf(0x0000_00ff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rgbaf_unpacks_channels_in_order() {
        let color = rgbaf(0xff33_6600);
        assert_relative_eq!(color, Color4::new(1.0, 0.2, 0.4, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_opaque_constants() {
        assert_eq!(opaque_white(), Color4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(opaque_black(), Color4::new(0.0, 0.0, 0.0, 1.0));
    }
}
