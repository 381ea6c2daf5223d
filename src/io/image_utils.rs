// Copyright @yucwang 2026

use std::path::Path;

use exr::prelude::*;
use image::io::Reader as ImageReader;

use crate::math::bitmap::Bitmap;
use crate::math::constants::{ Float, Vector3f };

fn srgb_to_linear(v: Float) -> Float {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Decodes a texture image into a linear-light bitmap. A file that cannot
/// be opened or decoded is reported with a warning and yields `None`, the
/// same state as a texture that was never declared.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Option<Bitmap> {
    let path = path.as_ref();
    let ext = path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let result = match ext.as_str() {
        "exr" => decode_exr(path),
        "jpg" | "jpeg" | "png" => decode_ldr(path),
        _ => Err(format!("unsupported texture format: {}", ext)),
    };

    match result {
        Ok(bitmap) => Some(bitmap),
        Err(err) => {
            log::warn!("Failed to decode texture {}: {}.", path.display(), err);
            None
        }
    }
}

fn decode_exr(path: &Path) -> std::result::Result<Bitmap, String> {
    log::info!("Starting reading OpenEXR image from: {}.", path.display());

    let image = read()
        .no_deep_data()
        .largest_resolution_level()
        .rgba_channels(
            |resolution, _| {
                Bitmap::new(resolution.width() as usize, resolution.height() as usize)
            },
            |bitmap, position, (r, g, b, _a): (f32, f32, f32, f32)| {
                bitmap[(position.x() as usize, position.y() as usize)] =
                    Vector3f::new(r, g, b);
            },
        )
        .first_valid_layer()
        .all_attributes()
        .from_file(path)
        .map_err(|e| format!("failed to read exr: {}", e))?;

    Ok(image.layer_data.channel_data.pixels)
}

// Low dynamic range formats are assumed to carry sRGB-encoded values.
fn decode_ldr(path: &Path) -> std::result::Result<Bitmap, String> {
    let img = ImageReader::open(path)
        .map_err(|e| format!("failed to open image: {}", e))?
        .decode()
        .map_err(|e| format!("failed to decode image: {}", e))?;

    let rgb = img.to_rgb32f();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;

    let mut bitmap = Bitmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let p = rgb.get_pixel(x as u32, y as u32);
            bitmap[(x, y)] = Vector3f::new(
                srgb_to_linear(p[0]),
                srgb_to_linear(p[1]),
                srgb_to_linear(p[2]),
            );
        }
    }

    Ok(bitmap)
}
