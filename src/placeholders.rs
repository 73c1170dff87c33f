use crate::canvas::{opaque, parse_color, Canvas};
use crate::config::{Args, FontPaths};
use crate::manifest::{GeneratedAsset, Manifest};
use crate::output::{save_png, write_ico};
use crate::typeface::Typeface;
use anyhow::{Context, Result};
use image::Rgb;
use std::{fs::create_dir_all, path::Path};

pub const ICON_SIZE: u32 = 512;
pub const SPLASH_WIDTH: u32 = 1200;
pub const SPLASH_HEIGHT: u32 = 630;
pub const FAVICON_SIZE: u32 = 32;
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];
pub const SCREENSHOT_WIDTH: u32 = 1280;
pub const SCREENSHOT_HEIGHT: u32 = 720;

/// File name and title of every screenshot mockup, in generation order
pub const SCREENSHOTS: [(&str, &str); 4] = [
    ("home.png", "Home Page"),
    ("explore.png", "Explore Campaigns"),
    ("campaign.png", "Campaign Detail"),
    ("create.png", "Create Campaign"),
];

const BASE_BLUE: &str = "#0052FF";
const DEEP_BLUE: &str = "#002E99";
const WHITE: &str = "#FFFFFF";
const SCREENSHOT_BACKGROUND: &str = "#F3F4F6";
const SCREENSHOT_BORDER: &str = "#D1D5DB";
const TITLE_GREY: &str = "#6B7280";
const CAPTION_GREY: &str = "#9CA3AF";

const SPLASH_TITLE: &str = "Base Crowdfunding";
const SPLASH_SUBTITLE: &str = "Decentralized Fundraising on Base Blockchain";
const SPLASH_BADGES: [&str; 3] = ["🔒 Secure", "⚡ Fast", "🌐 Transparent"];
const SCREENSHOT_CAPTION: &str = "Screenshot will be generated after deployment";

/// Draw every placeholder into `args.output` and return what was written
pub fn generate_placeholders(args: &Args) -> Result<Vec<GeneratedAsset>> {
    println!("🎨 Generating placeholder images for Base Mini-App...");
    println!("⚠️  These are temporary placeholders. Replace with actual images from SVGs.\n");

    let screenshots_dir = args.output.join("screenshots");
    if args.create_dirs {
        create_dir_all(&screenshots_dir).context("Can't create output directory")?;
    }

    let fonts = args.font_paths();
    let mut assets = Vec::new();

    create_icon(&args.output.join("icon.png"), ICON_SIZE, &fonts)?;
    assets.push(GeneratedAsset::png("icon.png", ICON_SIZE, ICON_SIZE));

    create_splash(
        &args.output.join("splash.png"),
        SPLASH_WIDTH,
        SPLASH_HEIGHT,
        &fonts,
    )?;
    assets.push(GeneratedAsset::png(
        "splash.png",
        SPLASH_WIDTH,
        SPLASH_HEIGHT,
    ));

    let sizes = create_favicon(&args.output.join("favicon.ico"), FAVICON_SIZE, &fonts)?;
    assets.push(GeneratedAsset::ico("favicon.ico", sizes));

    for (filename, title) in SCREENSHOTS {
        create_screenshot_placeholder(
            &screenshots_dir.join(filename),
            title,
            SCREENSHOT_WIDTH,
            SCREENSHOT_HEIGHT,
            &fonts,
        )?;
        assets.push(GeneratedAsset::png(
            format!("screenshots/{filename}"),
            SCREENSHOT_WIDTH,
            SCREENSHOT_HEIGHT,
        ));
    }

    if args.manifest {
        let manifest_path = Manifest::new(assets.clone()).write(&args.output)?;
        println!("✓ Generated {}", manifest_path.display());
    }

    println!("\n✨ All placeholder images created!");
    println!("\n📝 Important notes:");
    println!("1. These are temporary placeholder images");
    println!("2. For best results, convert the SVG files to PNG:");
    println!("   - Use https://svgtopng.com/ to convert icon.svg (512x512)");
    println!("   - Use https://svgtopng.com/ to convert splash.svg (1200x630)");
    println!("3. Take actual screenshots after deploying your app");
    println!("4. Update farcaster.json with your Vercel URL");

    Ok(assets)
}

/// App icon: shaded blue background, a stack of coins, an up arrow and a "C"
pub fn create_icon(path: &Path, size: u32, fonts: &FontPaths) -> Result<()> {
    let canvas = draw_icon(size, fonts)?;
    save_png(&canvas, path)?;
    println!("✓ Generated {}", path.display());
    Ok(())
}

pub fn draw_icon(size: u32, fonts: &FontPaths) -> Result<Canvas> {
    let base_blue = parse_color(BASE_BLUE)?;
    let white = opaque(parse_color(WHITE)?);
    let mut canvas = Canvas::new(size, size, base_blue);

    // Darken towards the top: the red and green channels lose up to 63 at row 0
    for row in 0..size {
        let fade = (255.0 * (1.0 - row as f64 / size as f64)) as i32;
        let shade = |channel: u8| (channel as i32 - fade / 4).max(0) as u8;
        let color = Rgb([shade(base_blue[0]), shade(base_blue[1]), base_blue[2]]);
        canvas.horizontal_line(row as i32, opaque(color));
    }

    let center = (size / 2) as i32;
    let coin_radius = (size / 3) as i32;

    // Bottom coin first so the upper ones overlap it
    for offset in [60, 30, 0] {
        let y = center + offset;
        let (x0, y0, x1, y1) = (center - coin_radius, y - 30, center + coin_radius, y + 30);
        canvas.fill_ellipse(x0, y0, x1, y1, white);
        canvas.outline_ellipse(x0, y0, x1, y1, white, 4);
    }

    let arrow_y = center - 80;
    let shaft_half = 8;
    canvas.fill_rect(
        center - shaft_half,
        arrow_y,
        center + shaft_half,
        arrow_y + 100,
        white,
    );
    canvas.fill_polygon(
        &[
            (center, arrow_y - 30),
            (center - 30, arrow_y),
            (center + 30, arrow_y),
        ],
        white,
    );

    let font = Typeface::load(&fonts.bold, 120.0);
    font.draw_text(&mut canvas, size as i32 - 120, size as i32 - 150, "C", white);

    Ok(canvas)
}

/// Splash screen: gradient, decorations, the mini icon, title and badges
pub fn create_splash(path: &Path, width: u32, height: u32, fonts: &FontPaths) -> Result<()> {
    let canvas = draw_splash(width, height, fonts)?;
    save_png(&canvas, path)?;
    println!("✓ Generated {}", path.display());
    Ok(())
}

pub fn draw_splash(width: u32, height: u32, fonts: &FontPaths) -> Result<Canvas> {
    let base_blue = parse_color(BASE_BLUE)?;
    let white = opaque(parse_color(WHITE)?);
    let mut canvas = Canvas::new(width, height, base_blue);

    canvas.vertical_gradient(base_blue, parse_color(DEEP_BLUE)?);

    // Decorations, mini coins and badges are plain white on an RGB canvas
    canvas.fill_ellipse(50, 50, 200, 200, white);
    canvas.fill_ellipse(950, 450, 1150, 650, white);

    let (icon_x, icon_y) = (250, (height / 2) as i32);
    let coin_radius = 50;
    for offset in [40, 20, 0] {
        let y = icon_y + offset;
        canvas.fill_ellipse(
            icon_x - coin_radius,
            y - 20,
            icon_x + coin_radius,
            y + 20,
            white,
        );
    }

    let arrow_y = icon_y - 50;
    canvas.fill_rect(icon_x - 6, arrow_y, icon_x + 6, arrow_y + 60, white);
    canvas.fill_polygon(
        &[
            (icon_x, arrow_y - 20),
            (icon_x - 20, arrow_y),
            (icon_x + 20, arrow_y),
        ],
        white,
    );

    let [title_font, subtitle_font, badge_font] = Typeface::load_set([
        (fonts.bold.as_path(), 60.0),
        (fonts.regular.as_path(), 28.0),
        (fonts.bold.as_path(), 18.0),
    ]);

    title_font.draw_text(&mut canvas, 400, 250, SPLASH_TITLE, white);
    subtitle_font.draw_text(&mut canvas, 400, 320, SPLASH_SUBTITLE, white);

    let badge_width = 180;
    let mut badge_x = 400;
    for badge in SPLASH_BADGES {
        canvas.fill_rounded_rect(badge_x, 400, badge_x + badge_width, 450, 25, white);
        badge_font.draw_text(&mut canvas, badge_x + 20, 415, badge, white);
        badge_x += badge_width + 20;
    }

    Ok(canvas)
}

/// Favicon: a white "C" on Base blue, stored as a multi-size ICO.
///
/// Every frame is drawn at its own size rather than resampled from `size`.
/// Returns the frame sizes written.
pub fn create_favicon(path: &Path, size: u32, fonts: &FontPaths) -> Result<Vec<u32>> {
    let mut sizes = FAVICON_SIZES.to_vec();
    if !sizes.contains(&size) {
        sizes.push(size);
        sizes.sort_unstable();
    }

    let font = Typeface::load(&fonts.bold, size.saturating_sub(4) as f32);
    let frames = sizes
        .iter()
        .map(|&frame_size| draw_favicon(frame_size, &font))
        .collect::<Result<Vec<_>>>()?;

    write_ico(&frames, path)?;
    println!("✓ Generated {}", path.display());
    Ok(sizes)
}

/// One favicon frame; the letter is sized to `size - 4` pixels
pub fn draw_favicon(size: u32, font: &Typeface) -> Result<Canvas> {
    let mut canvas = Canvas::new(size, size, parse_color(BASE_BLUE)?);
    let font = font.resized(size.saturating_sub(4) as f32);
    font.draw_text(&mut canvas, 2, 0, "C", opaque(parse_color(WHITE)?));
    Ok(canvas)
}

/// Screenshot mockup: grey card with a border, a centred title and a caption
pub fn create_screenshot_placeholder(
    path: &Path,
    title: &str,
    width: u32,
    height: u32,
    fonts: &FontPaths,
) -> Result<()> {
    let canvas = draw_screenshot(title, width, height, fonts)?;
    save_png(&canvas, path)?;
    println!("✓ Generated {}", path.display());
    Ok(())
}

pub fn draw_screenshot(title: &str, width: u32, height: u32, fonts: &FontPaths) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height, parse_color(SCREENSHOT_BACKGROUND)?);
    let (right, bottom) = (width as i32 - 1, height as i32 - 1);
    canvas.outline_rect(0, 0, right, bottom, opaque(parse_color(SCREENSHOT_BORDER)?), 3);

    let font = Typeface::load(&fonts.bold, 48.0);
    // Centre the inked pixels, not the pen origin
    let (ink_left, ink_width) = font.ink_extent(title);
    let text_x = (width as i32 - ink_width as i32).div_euclid(2) - ink_left;
    let middle = (height / 2) as i32;

    font.draw_text(
        &mut canvas,
        text_x,
        middle - 50,
        title,
        opaque(parse_color(TITLE_GREY)?),
    );
    // The caption always uses the built-in face
    Typeface::fallback().draw_text(
        &mut canvas,
        text_x - 100,
        middle + 20,
        SCREENSHOT_CAPTION,
        opaque(parse_color(CAPTION_GREY)?),
    );

    Ok(canvas)
}
