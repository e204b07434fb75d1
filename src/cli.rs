use pwa_icons_core::Layout;
use std::path::PathBuf;

/// Generates the PWA icon set from the app logo.
#[derive(clap::Parser)]
#[command(name = "pwa-icons", version)]
pub struct Cli {
    /// Resolves the icon paths relative to this directory instead of the
    /// working directory
    #[arg(short = 'C', long, env = "PWA_ICONS_BASE_DIR", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Enables debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub subcommand: Option<Cmd>,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Cmd {
    /// Resizes public/icons/logo.png.png into the PWA icon sizes (default)
    #[default]
    Resize,

    /// Paints placeholder icons for when no logo exists yet
    Placeholder,
}

impl Cli {
    pub fn layout(&self) -> Layout {
        match &self.base_dir {
            Some(base_dir) => Layout::rooted_at(base_dir),
            None => Layout::default(),
        }
    }
}
