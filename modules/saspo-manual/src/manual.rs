use chrono::NaiveDate;
use tracing::debug;

use crate::book::{Align, Book, Page};
use crate::chapters::{Block, CHAPTERS, TABLE_OF_CONTENTS};
use crate::fonts::{Font, Rgb};
use crate::render::render_pdf;
use crate::ManualError;

pub const MANUAL_FILENAME: &str = "Saspo_Operations_Manual.pdf";

const RUNNING_HEADER: &str = "Saspo World Technologies | Administrator Manual";
const ACCENT: Rgb = Rgb(0, 242, 234);
const DOCUMENT_TITLE: &str = "Saspo Operations Manual";

/// Render the operations manual. Only the title-page date varies between calls.
pub fn generate_manual(generated_on: NaiveDate) -> Result<Vec<u8>, ManualError> {
    let pages = layout_manual(generated_on);
    render_pdf(DOCUMENT_TITLE, &pages)
}

/// Lay the manual out into pages without serializing it.
pub fn layout_manual(generated_on: NaiveDate) -> Vec<Page> {
    let mut book = Book::new(RUNNING_HEADER);

    title_page(&mut book, generated_on);

    book.add_page();
    chapter_title(&mut book, "Table of Contents");
    for entry in TABLE_OF_CONTENTS {
        chapter_body(&mut book, entry);
    }

    for chapter in CHAPTERS {
        if chapter.new_page {
            book.add_page();
        }
        chapter_title(&mut book, chapter.title);
        for block in chapter.blocks {
            match block {
                Block::Body(text) => chapter_body(&mut book, text),
                Block::SubHeading(text) => sub_heading(&mut book, text),
                Block::Code(text) => code_block(&mut book, text),
            }
        }
    }

    debug!(pages = book.page_no(), "Rendered operations manual");
    book.finish()
}

fn title_page(book: &mut Book, generated_on: NaiveDate) {
    book.add_page();
    book.ln(60.0);
    book.set_font(Font::TimesBold, 36.0);
    book.cell(0.0, 15.0, "OPERATIONS", true, Align::Center, false);
    book.cell(0.0, 15.0, "MANUAL", true, Align::Center, false);

    book.ln(20.0);
    book.set_font(Font::TimesRoman, 14.0);
    book.cell(0.0, 10.0, "ADMINISTRATIVE CONTROL PANEL V2.0", true, Align::Center, false);

    book.ln(60.0);
    book.set_font(Font::TimesItalic, 10.0);
    book.set_text_color(Rgb::gray(100));
    let generated = format!("Generated: {}", generated_on.format("%B %d, %Y"));
    book.cell(0.0, 10.0, &generated, true, Align::Center, false);
    book.cell(0.0, 5.0, "Saspo World Technologies Pvt. Ltd.", true, Align::Center, false);
}

fn chapter_title(book: &mut Book, label: &str) {
    book.set_font(Font::TimesBold, 16.0);
    book.set_text_color(Rgb::gray(30));
    book.cell(0.0, 10.0, &label.to_uppercase(), true, Align::Left, false);
    book.set_draw_color(ACCENT);
    book.set_line_width(0.5);
    book.line_across(200.0);
    book.ln(8.0);
}

fn chapter_body(book: &mut Book, text: &str) {
    book.set_font(Font::TimesRoman, 11.0);
    book.set_text_color(Rgb::gray(50));
    book.multi_cell(0.0, 6.0, text, Align::Left, false);
    book.ln(4.0);
}

fn sub_heading(book: &mut Book, label: &str) {
    book.ln(2.0);
    book.set_font(Font::TimesBold, 12.0);
    book.set_text_color(Rgb::gray(0));
    book.cell(0.0, 8.0, label, true, Align::Left, false);
}

fn code_block(book: &mut Book, code: &str) {
    book.set_font(Font::Courier, 9.0);
    book.set_text_color(Rgb(0, 100, 0));
    book.set_fill_color(Rgb::gray(248));
    book.set_x(15.0);
    book.multi_cell(180.0, 5.0, code, Align::Left, true);
    book.ln(4.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<Page> {
        layout_manual(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    }

    fn all_texts(pages: &[Page]) -> Vec<&str> {
        pages.iter().flat_map(|p| p.texts()).collect()
    }

    #[test]
    fn manual_is_a_pdf() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let bytes = generate_manual(date).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(16)..]).into_owned();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn title_page_carries_the_generation_date() {
        let pages = pages();
        assert!(pages[0].texts().any(|t| t == "Generated: January 05, 2026"));
    }

    #[test]
    fn every_chapter_title_is_rendered_upper_case() {
        let pages = pages();
        let texts = all_texts(&pages);
        for chapter in CHAPTERS {
            let title = chapter.title.to_uppercase();
            assert!(texts.contains(&title.as_str()), "missing {title}");
        }
    }

    #[test]
    fn manual_spans_title_contents_and_chapter_pages() {
        let fresh_pages = CHAPTERS.iter().filter(|c| c.new_page).count();
        assert!(pages().len() >= 2 + fresh_pages);
    }

    #[test]
    fn running_header_skips_the_title_page() {
        let pages = pages();
        assert!(!pages[0].texts().any(|t| t == RUNNING_HEADER));
        assert!(pages[1..]
            .iter()
            .all(|p| p.texts().any(|t| t == RUNNING_HEADER)));
    }

    #[test]
    fn code_blocks_sit_on_a_light_panel() {
        let pages = pages();
        let panels = pages
            .iter()
            .flat_map(|p| &p.marks)
            .filter(|m| matches!(m, crate::book::Mark::FillRect { color, .. } if *color == Rgb::gray(248)))
            .count();
        let code_blocks = CHAPTERS
            .iter()
            .flat_map(|c| c.blocks)
            .filter(|b| matches!(b, Block::Code(_)))
            .count();
        assert!(panels >= code_blocks);
    }
}
