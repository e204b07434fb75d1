use std::io::Write as _;
use termcolor::{Color, ColorSpec, WriteColor};

pub fn write_color(out: &mut impl WriteColor, text: &str, fg_color: Color) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(fg_color)))?;
    let result = out.write_all(text.as_bytes());
    out.reset().ok();
    result
}

pub fn line_color(out: &mut impl WriteColor, text: &str, fg_color: Color) -> std::io::Result<()> {
    write_color(out, text, fg_color)?;
    writeln!(out)
}

/// Formats an error followed by each of its sources, separated by `: `.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
