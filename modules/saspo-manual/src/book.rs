use crate::fonts::{to_latin1, Font, Rgb};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

/// Horizontal padding inside a cell.
const CELL_MARGIN: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One drawing instruction. Coordinates are millimetres from the top-left
/// corner of the page; text `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: String,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub marks: Vec<Mark>,
}

impl Page {
    /// Every text run on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Style {
    font: Font,
    size: f32,
    text_color: Rgb,
    fill_color: Rgb,
}

/// Flowing, cursor-based page layout in the style of a printed handbook:
/// running header from page two on, a page number footer on every page,
/// and automatic page breaks at the bottom margin.
pub struct Book {
    pages: Vec<Page>,
    header_text: String,
    x: f32,
    y: f32,
    left_margin: f32,
    top_margin: f32,
    right_margin: f32,
    bottom_margin: f32,
    style: Style,
    draw_color: Rgb,
    line_width: f32,
    in_chrome: bool,
}

impl Book {
    pub fn new(header_text: impl Into<String>) -> Self {
        Self {
            pages: Vec::new(),
            header_text: header_text.into(),
            x: 15.0,
            y: 20.0,
            left_margin: 15.0,
            top_margin: 20.0,
            right_margin: 15.0,
            bottom_margin: 20.0,
            style: Style {
                font: Font::TimesRoman,
                size: 12.0,
                text_color: Rgb::gray(0),
                fill_color: Rgb::gray(255),
            },
            draw_color: Rgb::gray(0),
            line_width: 0.2,
            in_chrome: false,
        }
    }

    pub fn page_no(&self) -> usize {
        self.pages.len()
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn add_page(&mut self) {
        if !self.pages.is_empty() {
            self.footer();
        }
        self.pages.push(Page::default());
        self.x = self.left_margin;
        self.y = self.top_margin;
        if self.pages.len() > 1 {
            self.header();
        }
    }

    /// Close the last page and hand back the laid-out pages.
    pub fn finish(mut self) -> Vec<Page> {
        if !self.pages.is_empty() {
            self.footer();
        }
        self.pages
    }

    fn mark(&mut self, mark: Mark) {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        if let Some(page) = self.pages.last_mut() {
            page.marks.push(mark);
        }
    }

    fn header(&mut self) {
        let saved = self.style;
        self.in_chrome = true;
        self.set_font(Font::TimesItalic, 9.0);
        self.set_text_color(Rgb::gray(150));
        let text = self.header_text.clone();
        self.cell(0.0, 10.0, &text, false, Align::Right, false);
        self.ln(15.0);
        self.in_chrome = false;
        self.style = saved;
    }

    fn footer(&mut self) {
        let saved = self.style;
        let (x, y) = (self.x, self.y);
        self.in_chrome = true;
        self.x = self.left_margin;
        self.y = PAGE_HEIGHT - 15.0;
        self.set_font(Font::TimesItalic, 8.0);
        self.set_text_color(Rgb::gray(128));
        let number = self.pages.len().to_string();
        self.cell(0.0, 10.0, &number, false, Align::Center, false);
        self.in_chrome = false;
        self.style = saved;
        self.x = x;
        self.y = y;
    }

    pub fn set_font(&mut self, font: Font, size: f32) {
        self.style.font = font;
        self.style.size = size;
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.style.text_color = color;
    }

    pub fn set_fill_color(&mut self, color: Rgb) {
        self.style.fill_color = color;
    }

    pub fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Line break: back to the left margin, down by `h`.
    pub fn ln(&mut self, h: f32) {
        self.x = self.left_margin;
        self.y += h;
    }

    pub fn line_across(&mut self, to_x: f32) {
        self.mark(Mark::Line {
            x1: self.x,
            y1: self.y,
            x2: to_x,
            y2: self.y,
            width: self.line_width,
            color: self.draw_color,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        self.style.font.text_width(text, self.style.size)
    }

    /// One line of text in a `w` x `h` box at the cursor. `w == 0` extends to
    /// the right margin. With `newline` the cursor moves to the next line,
    /// otherwise to the right of the box.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, newline: bool, align: Align, fill: bool) {
        if !self.in_chrome && self.y + h > PAGE_HEIGHT - self.bottom_margin {
            let x = self.x;
            self.add_page();
            self.x = x;
        }

        let w = if w == 0.0 {
            PAGE_WIDTH - self.right_margin - self.x
        } else {
            w
        };

        if fill {
            self.mark(Mark::FillRect {
                x: self.x,
                y: self.y,
                w,
                h,
                color: self.style.fill_color,
            });
        }

        if !text.is_empty() {
            let text = to_latin1(text);
            let width = self.text_width(&text);
            let dx = match align {
                Align::Left => CELL_MARGIN,
                Align::Center => (w - width) / 2.0,
                Align::Right => w - CELL_MARGIN - width,
            };
            // Baseline sits a third of the cap height below the cell's middle.
            let baseline = self.y + 0.5 * h + 0.3 * self.style.size * crate::fonts::PT_TO_MM;
            self.mark(Mark::Text {
                x: self.x + dx,
                y: baseline,
                font: self.style.font,
                size: self.style.size,
                color: self.style.text_color,
                text,
            });
        }

        if newline {
            self.x = self.left_margin;
            self.y += h;
        } else {
            self.x += w;
        }
    }

    /// Word-wrapped text, one `h`-high cell per line. Embedded `\n` forces a break.
    pub fn multi_cell(&mut self, w: f32, h: f32, text: &str, align: Align, fill: bool) {
        let start_x = self.x;
        let w = if w == 0.0 {
            PAGE_WIDTH - self.right_margin - start_x
        } else {
            w
        };
        let max_width = w - 2.0 * CELL_MARGIN;

        for line in self.wrap(text, max_width) {
            self.x = start_x;
            self.cell(w, h, &line, true, align, fill);
        }
        self.x = self.left_margin;
    }

    fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut current = String::new();
            for word in paragraph.split(' ') {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if self.text_width(&candidate) <= max_width {
                    current = candidate;
                    continue;
                }
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                // A single word wider than the line gets split by character.
                for c in word.chars() {
                    let mut next = current.clone();
                    next.push(c);
                    if !current.is_empty() && self.text_width(&next) > max_width {
                        lines.push(std::mem::take(&mut current));
                        current.push(c);
                    } else {
                        current = next;
                    }
                }
            }
            lines.push(current);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width_and_newlines() {
        let mut book = Book::new("header");
        book.set_font(Font::Courier, 10.0);
        // Courier 10pt: 6pt per glyph, about 2.117mm.
        let lines = book.wrap("aaaa bbbb cccc\ndd", 20.0);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc", "dd"]);
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let mut book = Book::new("header");
        book.set_font(Font::Courier, 10.0);
        let lines = book.wrap("abcdefghijklmnop", 10.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "abcdefghijklmnop");
    }

    #[test]
    fn cells_break_onto_new_pages() {
        let mut book = Book::new("header");
        book.add_page();
        for _ in 0..60 {
            book.cell(0.0, 10.0, "row", true, Align::Left, false);
        }
        assert!(book.page_no() > 1);
        assert!(book.y() <= PAGE_HEIGHT - 20.0);
    }

    #[test]
    fn header_pushes_content_down_after_first_page() {
        let mut book = Book::new("header");
        book.add_page();
        assert_eq!(book.y(), 20.0);
        book.add_page();
        assert_eq!(book.y(), 35.0);
    }

    #[test]
    fn every_page_gets_a_centered_number() {
        let mut book = Book::new("header");
        book.add_page();
        book.add_page();
        let pages = book.finish();
        for (i, page) in pages.iter().enumerate() {
            let number = (i + 1).to_string();
            assert_eq!(page.texts().last(), Some(number.as_str()));
        }
        assert!(!pages[0].texts().any(|t| t == "header"));
        assert!(pages[1].texts().any(|t| t == "header"));
    }

    #[test]
    fn centered_text_is_balanced_in_the_cell() {
        let mut book = Book::new("header");
        book.add_page();
        book.set_font(Font::Courier, 10.0);
        book.cell(0.0, 10.0, "abcd", true, Align::Center, false);
        let pages = book.finish();
        let Some(Mark::Text { x, .. }) = pages[0].marks.first() else {
            panic!("expected a text mark");
        };
        let width = Font::Courier.text_width("abcd", 10.0);
        let expected = 15.0 + (180.0 - width) / 2.0;
        assert!((x - expected).abs() < 1e-3);
    }

    #[test]
    fn fill_draws_a_box_under_the_text() {
        let mut book = Book::new("header");
        book.add_page();
        book.set_fill_color(Rgb::gray(248));
        book.cell(50.0, 5.0, "code", true, Align::Left, true);
        let pages = book.finish();
        assert!(matches!(
            pages[0].marks[0],
            Mark::FillRect { w, h, color, .. } if w == 50.0 && h == 5.0 && color == Rgb::gray(248)
        ));
    }
}
