//! Checking and fixing file names for rendered images.
//!
//! Rules follow Windows, the strictest common target: a handful of device
//! names are reserved and some punctuation may not appear at all.

use alloc::string::String;

/// Characters which may not appear in a file name.
pub const RESERVED_CHARS: [char; 10] = ['\\', '/', '?', '<', '>', ':', '*', '|', '"', '^'];

/// Device names which may not be used as a file name, with or without an
/// extension.
pub const RESERVED_NAMES: [&str; 21] = [
    "con", "nul", "prn", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8", "com9",
    "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Is `name` usable as a file name?
pub fn is_valid(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name);

    !name.is_empty()
        && !name.contains(RESERVED_CHARS)
        && !RESERVED_NAMES
            .iter()
            .any(|reserved| stem.eq_ignore_ascii_case(reserved))
}

/// Replace every reserved character in `name` with `replacement`.
///
/// Reserved device names are left alone; check the result with
/// [`is_valid`] if that matters.
pub fn make_valid(name: &str, replacement: char) -> String {
    name.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { replacement } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(is_valid("foo3"));
        assert!(is_valid("lorum_1.png"));
        assert!(is_valid(" "));
        assert!(is_valid("console.png"));
    }

    #[test]
    fn rejects_reserved() {
        assert!(!is_valid(""));
        assert!(!is_valid("lpt5"));
        assert!(!is_valid("CON"));
        assert!(!is_valid("nul.png"));
        assert!(!is_valid("foo:3"));
        assert!(!is_valid("|foo"));
        assert!(!is_valid("?.png"));
    }

    #[test]
    fn replaces_reserved_characters() {
        assert_eq!(
            make_valid("|foo:1\\2/3?4<5>6:7*8|9\"0^", '_'),
            "_foo_1_2_3_4_5_6_7_8_9_0_"
        );
        assert_eq!(make_valid("a.png", '_'), "a.png");
        assert!(is_valid(&make_valid("\"quoted\".png", '-')));
    }
}
