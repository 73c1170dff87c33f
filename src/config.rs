use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "public";
pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[derive(Debug, Clone, Parser)]
#[clap(
    name = "placeholder-gen",
    about = "Draw placeholder icon, splash, favicon and screenshot images for the web app"
)]
pub struct Args {
    /// Output root. Screenshots go to its `screenshots/` subdirectory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// TrueType font used for titles and the icon lettering
    #[clap(long, value_name = "PATH", default_value = DEFAULT_BOLD_FONT)]
    pub bold_font: PathBuf,

    /// TrueType font used for the splash subtitle
    #[clap(long, value_name = "PATH", default_value = DEFAULT_REGULAR_FONT)]
    pub regular_font: PathBuf,

    /// Create the output directories when they are missing
    #[clap(long)]
    pub create_dirs: bool,

    /// Also write placeholders.json listing every generated file
    #[clap(long)]
    pub manifest: bool,
}

impl Args {
    pub fn font_paths(&self) -> FontPaths {
        FontPaths {
            bold: self.bold_font.clone(),
            regular: self.regular_font.clone(),
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["placeholder-gen"])
    }
}

/// Font files the drawing routines try before falling back to the bitmap face
#[derive(Debug, Clone)]
pub struct FontPaths {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            bold: PathBuf::from(DEFAULT_BOLD_FONT),
            regular: PathBuf::from(DEFAULT_REGULAR_FONT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_public_layout() {
        let args = Args::default();
        assert_eq!(args.output, PathBuf::from("public"));
        assert_eq!(args.bold_font, PathBuf::from(DEFAULT_BOLD_FONT));
        assert!(!args.create_dirs);
        assert!(!args.manifest);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "placeholder-gen",
            "-o",
            "dist",
            "--bold-font",
            "/tmp/bold.ttf",
            "--create-dirs",
            "--manifest",
        ]);
        assert_eq!(args.output, PathBuf::from("dist"));
        assert!(args.create_dirs);
        assert!(args.manifest);

        let fonts = args.font_paths();
        assert_eq!(fonts.bold, PathBuf::from("/tmp/bold.ttf"));
        assert_eq!(fonts.regular, PathBuf::from(DEFAULT_REGULAR_FONT));
    }
}
