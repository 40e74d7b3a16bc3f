//! Base-14 fonts used by the manual, with the advance widths the layout needs
//! for wrapping and alignment. The PDF itself only references the fonts by
//! name; nothing is embedded.

use printpdf::BuiltinFont;
use unicode_normalization::UnicodeNormalization;

/// Millimetres per PDF point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    TimesRoman,
    TimesBold,
    TimesItalic,
    Courier,
}

impl Font {
    pub const ALL: [Font; 4] = [
        Font::TimesRoman,
        Font::TimesBold,
        Font::TimesItalic,
        Font::Courier,
    ];

    pub fn builtin(self) -> BuiltinFont {
        match self {
            Font::TimesRoman => BuiltinFont::TimesRoman,
            Font::TimesBold => BuiltinFont::TimesBold,
            Font::TimesItalic => BuiltinFont::TimesItalic,
            Font::Courier => BuiltinFont::Courier,
        }
    }

    /// Advance width in thousandths of an em (Adobe AFM metrics).
    pub fn glyph_width(self, c: char) -> u32 {
        if self == Font::Courier {
            return 600;
        }
        let table = match self {
            Font::TimesBold => &TIMES_BOLD,
            Font::TimesItalic => &TIMES_ITALIC,
            _ => &TIMES_ROMAN,
        };
        match ascii_for_width(c) {
            Some(b) => table[(b - 32) as usize],
            None => 500,
        }
    }

    /// Width of `text` set at `size` points, in millimetres.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.glyph_width(c)).sum();
        units as f32 * size / 1000.0 * PT_TO_MM
    }
}

/// Printable ASCII stand-in for measuring `c`: itself, or the base letter of
/// an accented Latin-1 character.
fn ascii_for_width(c: char) -> Option<u8> {
    if (' '..='~').contains(&c) {
        return Some(c as u8);
    }
    c.to_string()
        .nfkd()
        .next()
        .filter(|base| (' '..='~').contains(base))
        .map(|base| base as u8)
}

/// Keep Latin-1 text as-is and replace everything else with `?`, which is
/// all a WinAnsi-encoded base-14 font can show.
pub fn to_latin1(text: &str) -> String {
    text.chars()
        .map(|c| if u32::from(c) <= 0xFF { c } else { '?' })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn gray(level: u8) -> Self {
        Rgb(level, level, level)
    }

    pub fn to_color(self) -> printpdf::Color {
        printpdf::Color::Rgb(printpdf::Rgb::new(
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            None,
        ))
    }
}

// Widths for ' ' through '~'.

const TIMES_ROMAN: [u32; 95] = [
    250, 333, 408, 500, 500, 833, 778, 333, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

const TIMES_BOLD: [u32; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 333, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

const TIMES_ITALIC: [u32; 95] = [
    250, 333, 420, 500, 500, 833, 778, 333, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_replaces_wide_characters() {
        assert_eq!(to_latin1("café ✓ ロゴ"), "café ? ??");
    }

    #[test]
    fn courier_is_monospaced() {
        assert_eq!(Font::Courier.glyph_width('i'), Font::Courier.glyph_width('W'));
        // 10 glyphs at 10pt: 60pt.
        let width = Font::Courier.text_width("abcdefghij", 10.0);
        assert!((width - 60.0 * PT_TO_MM).abs() < 1e-3);
    }

    #[test]
    fn times_faces_have_their_own_metrics() {
        assert_eq!(Font::TimesRoman.glyph_width('m'), 778);
        assert_eq!(Font::TimesBold.glyph_width('m'), 833);
        assert_eq!(Font::TimesItalic.glyph_width('m'), 722);
        assert_eq!(Font::TimesBold.glyph_width('W'), 1000);
    }

    #[test]
    fn accented_letters_measure_as_their_base_letter() {
        assert_eq!(Font::TimesRoman.glyph_width('é'), Font::TimesRoman.glyph_width('e'));
        assert_eq!(Font::TimesBold.glyph_width('Ü'), Font::TimesBold.glyph_width('U'));
        assert_eq!(Font::TimesRoman.glyph_width('©'), 500);
    }
}
