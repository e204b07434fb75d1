use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    DynamicImage, ImageResult,
};
use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

/// Saves `image` as a PNG using the slowest, smallest lossless compression,
/// replacing any existing file at `path`.
pub fn save_optimized_png(image: &DynamicImage, path: &Path) -> ImageResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    image.write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}
