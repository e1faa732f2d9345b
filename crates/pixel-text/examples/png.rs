use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

use pixel_text::{Padding, PixelFont, PixelGrid, TailDirection, filename};

const OUTPUT_DIR: &str = "img";

/// Scale each pixel up to a `scale` by `scale` square and write a PNG.
fn save_png(
    grid: &PixelGrid,
    name: &str,
    scale: u32,
    foreground: Rgb<u8>,
    background: Rgb<u8>,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = filename::make_valid(name, '_');

    let image = RgbImage::from_fn(
        grid.width() as u32 * scale,
        grid.height() as u32 * scale,
        |x, y| match grid.get((x / scale) as usize, (y / scale) as usize) {
            Some(true) => foreground,
            _ => background,
        },
    );

    let path = Path::new(OUTPUT_DIR).join(&name);
    image.save(&path)?;
    println!("Wrote {}", path.display());

    Ok(())
}

fn save(grid: Option<&PixelGrid>, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let grid = grid.ok_or("nothing rendered")?;
    save_png(grid, name, 2, Rgb([255, 255, 255]), Rgb([0, 0, 0]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    fs::create_dir_all(OUTPUT_DIR)?;

    // The same session can render many pictures
    let mut font = PixelFont::new();

    // A single line, no border
    font.set_text("Lorem ipsum dolor sit amet.");
    font.to_pixels();
    save(font.pixel_map(), "lorem_1.png")?;

    // Explicit line breaks, each line centered
    font.set_text("Lorem\nipsum dolor sit\namet.");
    font.to_pixels();
    save(font.pixel_map(), "lorem_2.png")?;

    // Wrapping ignores existing line breaks and never splits words
    font.set_text("Lorem\nipsum\ndolor\nsit\namet.");
    font.to_paragraph(70);
    font.to_pixels();
    save(font.pixel_map(), "lorem_3.png")?;

    // Borders nest
    font.border(Padding::default())?;
    font.border(Padding::from_values(&[3])?)?;
    font.border(Padding::from_values(&[10, 20])?)?;
    font.border(Padding::from_values(&[2, 4, 6, 8])?)?;
    font.border(Padding::Uniform(0))?;
    save(font.pixel_map(), "lorem_4.png")?;

    // Accented letters fall back to their base letter
    font.set_text("Lørêm ìpšum đólòr șïț åmëț");
    font.to_paragraph(80);
    font.to_pixels();
    save(font.pixel_map(), "lorem_5.png")?;

    // Long text
    font.set_text(
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
         incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
         exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure \
         dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. \
         Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt \
         mollit anim id est laborum.",
    );
    font.to_paragraph(170);
    font.to_pixels();
    font.border(Padding::Symmetric {
        vertical: 3,
        horizontal: 6,
    })?;
    font.border(Padding::Uniform(1))?;
    save(font.pixel_map(), "lorem_6.png")?;

    // Speech balloons, one for each tail
    for direction in TailDirection::ALL {
        font.set_text("Hello there!");
        font.to_pixels();
        font.border(Padding::default())?;
        font.speech(direction, 4)?;
        save(font.pixel_map(), &format!("speech_{direction}.png"))?;
    }

    // Every glyph in the font
    font.glyph_sheet(79)?;
    save(font.pixel_map(), "all_chars.png")?;

    Ok(())
}
