use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::opts::MAX_CANVAS_SIDE;
use crate::render::raster::Raster;

/// Copy a raster into an [`image::RgbaImage`].
pub fn to_rgba_image(raster: &Raster) -> AvatarResult<RgbaImage> {
    let img = RgbaImage::from_raw(raster.width, raster.height, raster.data.clone())
        .ok_or_else(|| anyhow::anyhow!("invalid rgba buffer size"))?;
    Ok(img)
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> AvatarResult<Vec<u8>> {
    let img = to_rgba_image(raster)?;
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Write a raster as a PNG file, creating missing parent directories.
///
/// A raster whose buffer does not match its dimensions is rejected before anything is written.
#[tracing::instrument(skip(raster), fields(width = raster.width, height = raster.height))]
pub fn save_png(raster: &Raster, path: &Path) -> AvatarResult<()> {
    let img = to_rgba_image(raster)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

/// Resize a raster to `size x size` with nearest-neighbour sampling, keeping pixel edges hard.
pub fn scale_nearest(raster: &Raster, size: u32) -> AvatarResult<Raster> {
    if size == 0 || size > MAX_CANVAS_SIDE {
        return Err(AvatarError::validation(format!(
            "display size {size} must be in 1..={MAX_CANVAS_SIDE}"
        )));
    }
    if raster.width == size && raster.height == size {
        return Ok(raster.clone());
    }

    let img = to_rgba_image(raster)?;
    let scaled = imageops::resize(&img, size, size, FilterType::Nearest);
    Ok(Raster {
        width: size,
        height: size,
        data: scaled.into_raw(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
