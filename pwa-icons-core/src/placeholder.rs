//! Stand-in icons for projects that don't have a logo yet: an accent-coloured
//! disc on a dark square.

use crate::{layout::Layout, png::save_optimized_png, Error};
use image::{DynamicImage, Rgba, RgbaImage};
use std::{io::Write as _, path::PathBuf};
use termcolor::WriteColor;

pub const ACCENT: Rgba<u8> = Rgba([15, 197, 94, 255]);
pub const BACKGROUND: Rgba<u8> = Rgba([15, 23, 42, 255]);

/// Disc radius as a fraction of the icon edge length.
const RADIUS_RATIO: f64 = 0.35;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PlaceholderIcon {
    pub size: u32,
    pub file_name: &'static str,
}

pub const PLACEHOLDER_ICONS: [PlaceholderIcon; 2] = [
    PlaceholderIcon {
        size: 192,
        file_name: "icon-192.png",
    },
    PlaceholderIcon {
        size: 512,
        file_name: "icon-512.png",
    },
];

pub fn paint_placeholder(size: u32) -> RgbaImage {
    let center = f64::from(size) / 2.0;
    let radius = f64::from(size) * RADIUS_RATIO;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = f64::from(x) - center;
        let dy = f64::from(y) - center;
        if dx.hypot(dy) <= radius {
            ACCENT
        } else {
            BACKGROUND
        }
    })
}

#[tracing::instrument(level = "debug", skip_all, fields(output_dir = %layout.output_dir().display()))]
pub fn generate_placeholders(
    layout: &Layout,
    out: &mut impl WriteColor,
) -> Result<Vec<PathBuf>, Error> {
    let output_dir = layout.output_dir();
    std::fs::create_dir_all(output_dir)
        .map_err(|e| Error::CreateOutputDir(output_dir.to_owned(), e))?;

    let mut created = Vec::with_capacity(PLACEHOLDER_ICONS.len());
    for icon in &PLACEHOLDER_ICONS {
        let path = layout.output_path(icon.file_name);
        tracing::debug!(size = icon.size, path = %path.display(), "painting placeholder");
        let image = DynamicImage::ImageRgba8(paint_placeholder(icon.size));
        save_optimized_png(&image, &path).map_err(|e| Error::Save(path.clone(), e))?;
        writeln!(out, "Created {}", path.display())?;
        created.push(path);
    }
    Ok(created)
}
