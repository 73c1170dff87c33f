use image::Rgb;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const MISSING_FONT: &str = "/nonexistent/fonts/missing.ttf";

/// Runs `placeholder-gen --create-dirs --manifest` into a temp directory and
/// checks every image, its dimensions and its corner colors.
#[test]
fn test_generates_every_placeholder() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");

    let output = run_generator([
        OsStr::new("-o"),
        output_dir.as_os_str(),
        OsStr::new("--create-dirs"),
        OsStr::new("--manifest"),
    ]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating placeholder images for Base Mini-App"));
    assert!(stdout.contains("convert icon.svg (512x512)"));
    assert!(stdout.contains("Update farcaster.json with your Vercel URL"));

    let icon = open_rgb(&output_dir.join("icon.png"));
    assert_eq!(icon.dimensions(), (512, 512));
    assert_eq!(*icon.get_pixel(0, 0), Rgb([0, 19, 255]));
    assert_eq!(*icon.get_pixel(0, 511), Rgb([0, 82, 255]));

    let splash = open_rgb(&output_dir.join("splash.png"));
    assert_eq!(splash.dimensions(), (1200, 630));
    assert_eq!(*splash.get_pixel(0, 0), Rgb([0, 82, 255]));
    assert_eq!(*splash.get_pixel(1199, 629), Rgb([0, 46, 153]));

    for name in ["home", "explore", "campaign", "create"] {
        let path = output_dir.join("screenshots").join(format!("{name}.png"));
        let screenshot = open_rgb(&path);
        assert_eq!(screenshot.dimensions(), (1280, 720), "{}", path.display());
        assert_eq!(*screenshot.get_pixel(0, 0), Rgb([0xD1, 0xD5, 0xDB]));
        assert_eq!(*screenshot.get_pixel(5, 5), Rgb([0xF3, 0xF4, 0xF6]));
    }

    let favicon_path = output_dir.join("favicon.ico");
    assert_eq!(ico_frame_sizes(&favicon_path), vec![16, 32, 48]);
    let favicon = open_rgb(&favicon_path);
    let (last_x, last_y) = (favicon.width() - 1, favicon.height() - 1);
    assert_eq!(*favicon.get_pixel(last_x, last_y), Rgb([0x00, 0x52, 0xFF]));

    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(output_dir.join("placeholders.json"))
            .expect("Failed to read placeholders.json"),
    )
    .expect("placeholders.json should contain valid JSON");

    let assets = manifest["assets"].as_array().expect("assets array");
    assert_eq!(assets.len(), 7);
    for asset in assets {
        let path = output_dir.join(asset["path"].as_str().expect("asset path"));
        assert!(path.exists(), "{} should exist", path.display());
    }
    assert_eq!(assets[2]["path"], "favicon.ico");
    assert_eq!(assets[2]["sizes"], serde_json::json!([16, 32, 48]));
}

/// Without `--create-dirs` a missing output directory is fatal
#[test]
fn test_missing_output_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("does-not-exist");

    let output = run_generator([OsStr::new("--output"), output_dir.as_os_str()]);

    assert!(!output.status.success(), "generation should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icon.png"), "error should name the file: {stderr}");
    assert!(!output_dir.exists());
}

/// Unavailable font files fall back to the built-in face instead of failing
#[test]
fn test_missing_fonts_fall_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().to_path_buf();
    std::fs::create_dir(output_dir.join("screenshots"))
        .expect("Failed to create screenshots dir");

    let output = run_generator([
        OsStr::new("-o"),
        output_dir.as_os_str(),
        OsStr::new("--bold-font"),
        OsStr::new(MISSING_FONT),
        OsStr::new("--regular-font"),
        OsStr::new(MISSING_FONT),
    ]);
    assert_success(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("built-in bitmap font"), "stderr: {stderr}");

    let icon = open_rgb(&output_dir.join("icon.png"));
    assert_eq!(icon.dimensions(), (512, 512));
    assert!(!output_dir.join("placeholders.json").exists());
}

fn run_generator<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(get_placeholder_gen_binary_path())
        .args(args)
        .output()
        .expect("Failed to run placeholder-gen command")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("placeholder-gen command failed");
    }
}

fn open_rgb(path: &Path) -> image::RgbImage {
    image::open(path)
        .unwrap_or_else(|err| panic!("Failed to load {}: {err}", path.display()))
        .to_rgb8()
}

/// Frame sizes listed in an ICO directory; a stored 0 means 256
fn ico_frame_sizes(path: &Path) -> Vec<u32> {
    let bytes = std::fs::read(path).expect("Failed to read ICO file");
    assert_eq!(&bytes[0..4], &[0, 0, 1, 0], "not an ICO header");

    let count = u16::from_le_bytes([bytes[4], bytes[5]]) as usize;
    let mut sizes: Vec<u32> = (0..count)
        .map(|i| match bytes[6 + i * 16] {
            0 => 256,
            width => width as u32,
        })
        .collect();
    sizes.sort_unstable();
    sizes
}

fn get_placeholder_gen_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_placeholder-gen"))
}
