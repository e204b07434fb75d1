pub mod console;
pub mod layout;
pub mod placeholder;
pub mod png;
pub mod resize;

use std::path::PathBuf;

pub use layout::{IconVariant, Layout, ICON_VARIANTS};
pub use placeholder::generate_placeholders;
pub use resize::resize_logo;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} not found", .0.display())]
    MissingSource(PathBuf),
    #[error("cannot decode image {}", .0.display())]
    Decode(PathBuf, #[source] image::ImageError),
    #[error("failed to create output directory {}", .0.display())]
    CreateOutputDir(PathBuf, #[source] std::io::Error),
    #[error("failed to save {}", .0.display())]
    Save(PathBuf, #[source] image::ImageError),
    #[error("failed to write status output")]
    Output(#[source] std::io::Error),
}

impl Error {
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Error::MissingSource(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Output(e)
    }
}
