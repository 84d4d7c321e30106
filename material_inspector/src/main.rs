//! Material inspector
//!
//! Loads a `.toml` or `.ron` material file and logs how the Phong view
//! interprets it.
//!
//! ```text
//! material_inspector material_inspector/materials/textured.toml
//! ```

use phong_material::foundation::logging;
use phong_material::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: material_inspector <material.toml|material.ron>")?;

    let data = MaterialData::load_from_file(&path)?;
    log::info!("{}: types {:?}, {} attributes", path, data.types(), data.attribute_count());
    for (attribute, value) in data.iter() {
        log::debug!("  {} = {:?}", attribute, value);
    }

    if !data.types().contains(MaterialTypes::PHONG) {
        log::warn!("{} is not marked as a Phong material, showing Phong defaults", path);
    }

    report(data.as_phong())?;
    Ok(())
}

fn report(phong: PhongMaterialData<'_>) -> Result<(), MaterialError> {
    let data = phong.data();
    log::info!("Alpha mode {:?} (mask {}), double sided: {}", data.alpha_mode(), data.alpha_mask(), data.is_double_sided());
    log::info!("Ambient color  {}", format_color(&phong.ambient_color()));
    log::info!("Diffuse color  {}", format_color(&phong.diffuse_color()));
    log::info!("Specular color {}", format_color(&phong.specular_color()));
    log::info!("Shininess      {}", phong.shininess());

    for slot in PhongTextureSlot::ALL {
        if phong.has_texture(slot) {
            log::info!(
                "{:?} texture {} (coordinate set {})",
                slot,
                phong.texture(slot)?,
                phong.coordinate_set(slot)?
            );
        }
    }

    if phong.has_texture_transformation() {
        log::info!("Texture matrix {}", phong.texture_transform_matrix());
    }
    log::info!("Legacy flags {:?}", phong.flags());
    Ok(())
}

fn format_color(color: &Color4) -> String {
    format!("({:.3}, {:.3}, {:.3}, {:.3})", color.x, color.y, color.z, color.w)
}
