use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "public/icons/logo.png.png";
pub const DEFAULT_OUTPUT_DIR: &str = "public/icons";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IconVariant {
    pub width: u32,
    pub height: u32,
    pub file_name: &'static str,
}

/// The icons derived from the logo, in the order they are written.
pub const ICON_VARIANTS: [IconVariant; 3] = [
    IconVariant {
        width: 192,
        height: 192,
        file_name: "icon-192x192.png",
    },
    IconVariant {
        width: 512,
        height: 512,
        file_name: "icon-512x512.png",
    },
    IconVariant {
        width: 180,
        height: 180,
        file_name: "apple-touch-icon.png",
    },
];

/// Where the logo is read from and where the icons go.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Layout {
    source: PathBuf,
    output_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Layout {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Layout {
            source: source.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn rooted_at(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Layout::new(
            base_dir.join(DEFAULT_SOURCE),
            base_dir.join(DEFAULT_OUTPUT_DIR),
        )
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
