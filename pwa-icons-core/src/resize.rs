use crate::{
    console::line_color,
    layout::{Layout, ICON_VARIANTS},
    png::save_optimized_png,
    Error,
};
use image::{imageops::FilterType, DynamicImage, ImageReader};
use std::{io::Write as _, path::PathBuf};
use termcolor::{Color, WriteColor};

/// Resizes the logo into every [`ICON_VARIANTS`] entry, printing a status line
/// per icon to `out`.
///
/// Nothing is written when the logo is missing or can't be decoded. A failure
/// while saving stops the run; icons saved before it are left in place.
#[tracing::instrument(level = "debug", skip_all, fields(source = %layout.source().display()))]
pub fn resize_logo(layout: &Layout, out: &mut impl WriteColor) -> Result<Vec<PathBuf>, Error> {
    let logo = open_logo(layout)?;
    writeln!(out, "Original logo size: {}x{}", logo.width(), logo.height())?;

    let output_dir = layout.output_dir();
    std::fs::create_dir_all(output_dir)
        .map_err(|e| Error::CreateOutputDir(output_dir.to_owned(), e))?;

    let mut created = Vec::with_capacity(ICON_VARIANTS.len());
    for variant in &ICON_VARIANTS {
        let path = layout.output_path(variant.file_name);
        tracing::debug!(
            width = variant.width,
            height = variant.height,
            path = %path.display(),
            "resizing logo"
        );
        let icon = logo.resize_exact(variant.width, variant.height, FilterType::Lanczos3);
        save_optimized_png(&icon, &path).map_err(|e| Error::Save(path.clone(), e))?;
        line_color(
            out,
            &format!(
                "✅ Created {} ({}x{})",
                variant.file_name, variant.width, variant.height
            ),
            Color::Green,
        )?;
        created.push(path);
    }

    writeln!(out)?;
    line_color(out, "🎨 All PWA icons created successfully!", Color::Cyan)?;
    line_color(out, "📱 Ready for mobile installation!", Color::Cyan)?;
    Ok(created)
}

fn open_logo(layout: &Layout) -> Result<DynamicImage, Error> {
    let source = layout.source();
    if !source.exists() {
        return Err(Error::MissingSource(source.to_owned()));
    }
    let decode = || -> image::ImageResult<DynamicImage> {
        ImageReader::open(source)?.with_guessed_format()?.decode()
    };
    decode().map_err(|e| Error::Decode(source.to_owned(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::path::Path;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn write_logo(layout: &Layout, width: u32, height: u32) -> TestResult {
        std::fs::create_dir_all(layout.source().parent().unwrap())?;
        let logo = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        logo.save_with_format(layout.source(), ImageFormat::Png)?;
        Ok(())
    }

    fn assert_png(path: &Path, width: u32, height: u32) -> TestResult {
        let format = image::guess_format(&std::fs::read(path)?)?;
        assert_eq!(format, ImageFormat::Png, "{} is not a PNG", path.display());
        assert_eq!(image::image_dimensions(path)?, (width, height));
        Ok(())
    }

    fn assert_all_icons(layout: &Layout) -> TestResult {
        assert_png(&layout.output_path("icon-192x192.png"), 192, 192)?;
        assert_png(&layout.output_path("icon-512x512.png"), 512, 512)?;
        assert_png(&layout.output_path("apple-touch-icon.png"), 180, 180)?;
        Ok(())
    }

    fn output(buf: &termcolor::Buffer) -> String {
        String::from_utf8_lossy(buf.as_slice()).into_owned()
    }

    #[test]
    fn should_create_icons_from_square_logo() -> TestResult {
        let tmp = tempfile::tempdir()?;
        let layout = Layout::rooted_at(tmp.path());
        write_logo(&layout, 1024, 1024)?;
        let mut buf = termcolor::Buffer::no_color();

        let created = resize_logo(&layout, &mut buf)?;

        assert_eq!(created.len(), 3);
        assert_all_icons(&layout)?;
        assert_eq!(
            output(&buf),
            "Original logo size: 1024x1024\n\
             ✅ Created icon-192x192.png (192x192)\n\
             ✅ Created icon-512x512.png (512x512)\n\
             ✅ Created apple-touch-icon.png (180x180)\n\
             \n\
             🎨 All PWA icons created successfully!\n\
             📱 Ready for mobile installation!\n"
        );
        Ok(())
    }

    #[test]
    fn should_stretch_non_square_logo_to_exact_sizes() -> TestResult {
        let tmp = tempfile::tempdir()?;
        let layout = Layout::rooted_at(tmp.path());
        write_logo(&layout, 300, 100)?;

        resize_logo(&layout, &mut termcolor::Buffer::no_color())?;

        assert_all_icons(&layout)
    }

    #[test]
    fn should_not_touch_output_dir_when_logo_is_missing() -> TestResult {
        let tmp = tempfile::tempdir()?;
        let layout = Layout::rooted_at(tmp.path());
        let mut buf = termcolor::Buffer::no_color();

        let err = resize_logo(&layout, &mut buf).unwrap_err();

        assert!(err.is_missing_source());
        assert!(err
            .to_string()
            .contains(&layout.source().display().to_string()));
        assert!(!layout.output_dir().exists());
        assert!(buf.is_empty());
        Ok(())
    }

    #[test]
    fn should_create_missing_output_dir() -> TestResult {
        let tmp = tempfile::tempdir()?;
        let source_layout = Layout::rooted_at(tmp.path());
        write_logo(&source_layout, 64, 64)?;
        let layout = Layout::new(
            source_layout.source(),
            tmp.path().join("dist").join("nested").join("icons"),
        );

        resize_logo(&layout, &mut termcolor::Buffer::no_color())?;

        assert_all_icons(&layout)
    }

    #[test]
    fn should_overwrite_icons_when_run_twice() -> TestResult {
        let tmp = tempfile::tempdir()?;
        let layout = Layout::rooted_at(tmp.path());
        write_logo(&layout, 256, 256)?;

        resize_logo(&layout, &mut termcolor::Buffer::no_color())?;
        let first = std::fs::read(layout.output_path("icon-512x512.png"))?;
        resize_logo(&layout, &mut termcolor::Buffer::no_color())?;
        let second = std::fs::read(layout.output_path("icon-512x512.png"))?;

        assert_eq!(first, second);
        assert_all_icons(&layout)
    }

    #[test]
    fn should_not_write_icons_for_corrupt_logo() -> TestResult {
        let tmp = tempfile::tempdir()?;
        let layout = Layout::rooted_at(tmp.path());
        std::fs::create_dir_all(layout.output_dir())?;
        std::fs::write(layout.source(), b"definitely not an image")?;

        let err = resize_logo(&layout, &mut termcolor::Buffer::no_color()).unwrap_err();

        assert!(matches!(err, Error::Decode(..)));
        let entries = std::fs::read_dir(layout.output_dir())?.count();
        assert_eq!(entries, 1, "only the logo should be in the output dir");
        Ok(())
    }

    #[test]
    fn should_keep_earlier_icons_when_a_later_save_fails() -> TestResult {
        let tmp = tempfile::tempdir()?;
        let layout = Layout::rooted_at(tmp.path());
        write_logo(&layout, 64, 64)?;
        std::fs::create_dir(layout.output_path("icon-512x512.png"))?;
        let mut buf = termcolor::Buffer::no_color();

        let err = resize_logo(&layout, &mut buf).unwrap_err();

        assert!(matches!(err, Error::Save(ref path, _) if path.ends_with("icon-512x512.png")));
        assert_png(&layout.output_path("icon-192x192.png"), 192, 192)?;
        assert!(!layout.output_path("apple-touch-icon.png").exists());
        assert!(output(&buf).contains("✅ Created icon-192x192.png (192x192)"));
        Ok(())
    }
}
