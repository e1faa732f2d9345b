use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

const GLYPH_HEIGHT: usize = 7;

#[derive(Debug, Clone)]
struct Glyph {
    pub character: char,
    pub width: usize,
    pub rows: [u8; GLYPH_HEIGHT],
}

/// Generate the glyph table Rust code that will be included in the crate.
fn generate_rust(glyphs: &[Glyph]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static SILKSCREEN_FONT: [(char, Glyph); {}] = [\n",
        glyphs.len()
    ));

    for g in glyphs {
        out.push_str(&format!("    ({:?}, Glyph {{\n", g.character));
        out.push_str(&format!("        width: {},\n", g.width));
        out.push_str("        rows: [");
        for row in &g.rows {
            out.push_str(&format!("{:#010b}, ", row));
        }
        out.push_str("],\n    }),\n");
    }

    out.push_str("];\n");

    out
}

/// Pack one framed row such as `| 11 |` into a byte, leftmost pixel first.
///
/// Spaces in the authored data are only a drawing convenience and become
/// unset bits here.
fn parse_row(line: &str, character: char) -> (usize, u8) {
    let inner = line
        .strip_prefix('|')
        .and_then(|l| l.strip_suffix('|'))
        .unwrap_or_else(|| panic!("Row {:?} of {:?} is not framed by pipes", line, character));

    let width = inner.chars().count();
    assert!(width <= 8, "Glyph {:?} is wider than 8 pixels", character);

    let mut packed = 0u8;
    for (x, c) in inner.chars().enumerate() {
        match c {
            '1' => packed |= 0x80 >> x,
            ' ' | '0' => {}
            _ => panic!("Unknown pixel {:?} in glyph {:?}", c, character),
        }
    }

    (width, packed)
}

fn parse_font(input: &str) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    let mut lines = input.lines().map(|l| l.trim_end_matches('\r'));

    while let Some(line) = lines.next() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let header = line
            .strip_prefix("= ")
            .unwrap_or_else(|| panic!("Expected a glyph header, found {:?}", line));
        let mut chars = header.chars();
        let character = chars.next().expect("Glyph header has no character");
        assert!(chars.next().is_none(), "Glyph header {:?} is not one character", header);

        let mut width = 0;
        let mut rows = [0; GLYPH_HEIGHT];

        for (y, row) in rows.iter_mut().enumerate() {
            let line = lines
                .next()
                .unwrap_or_else(|| panic!("Glyph {:?} has fewer than 7 rows", character));
            let (w, packed) = parse_row(line, character);

            if y == 0 {
                width = w;
            }
            assert_eq!(width, w, "Ragged rows in glyph {:?}", character);
            *row = packed;
        }

        glyphs.push(Glyph {
            character,
            width,
            rows,
        });
    }

    // Sorted so the crate can binary search
    glyphs.sort_by_key(|g| g.character);
    for pair in glyphs.windows(2) {
        assert_ne!(
            pair[0].character, pair[1].character,
            "Glyph defined twice"
        );
    }

    glyphs
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_path = out_dir.join("silkscreen_font.rs");

    let glyphs = parse_font(&fs::read_to_string("data/silkscreen.txt").unwrap());
    eprintln!("Loaded {} glyphs", glyphs.len());

    let mut output = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&out_path)
        .unwrap();

    output.write_all(generate_rust(&glyphs).as_bytes()).unwrap();
    println!("cargo:rerun-if-changed=data/silkscreen.txt");
}
