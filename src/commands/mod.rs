use pwa_icons_core::{console, generate_placeholders, resize_logo, Error, Layout};
use std::io::{IsTerminal as _, Write as _};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

fn stdout() -> StandardStream {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Runs the resize and reports any failure on stdout. Resize failures never
/// make the command itself fail.
pub fn resize(layout: &Layout) -> eyre::Result<()> {
    let mut stdout = stdout();
    resize_and_report(layout, &mut stdout)?;
    Ok(())
}

fn resize_and_report(layout: &Layout, out: &mut impl WriteColor) -> std::io::Result<()> {
    match resize_logo(layout, out) {
        Ok(created) => {
            tracing::debug!(count = created.len(), "icons created");
            Ok(())
        }
        Err(err) => report_failure(layout, &err, out),
    }
}

fn report_failure(layout: &Layout, err: &Error, out: &mut impl WriteColor) -> std::io::Result<()> {
    tracing::debug!(error = ?err, "resize failed");
    if err.is_missing_source() {
        return writeln!(out, "Error: {}", err);
    }
    console::line_color(
        out,
        &format!("❌ Error: {}", console::error_chain(err)),
        Color::Red,
    )?;
    writeln!(
        out,
        "Make sure {} is a PNG, JPEG, GIF, BMP, ICO or WebP image and {} is writable",
        layout.source().display(),
        layout.output_dir().display()
    )
}

pub fn placeholder(layout: &Layout) -> eyre::Result<()> {
    let mut stdout = stdout();
    generate_placeholders(layout, &mut stdout)?;
    Ok(())
}
