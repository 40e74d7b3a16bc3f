//! Paints laid-out pages onto a PDF with `printpdf`.

use std::collections::HashMap;

use printpdf::{IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect};

use crate::book::{Mark, Page, PAGE_HEIGHT, PAGE_WIDTH};
use crate::fonts::Font;
use crate::ManualError;

const LAYER: &str = "Layer 1";

/// Serialize `pages` as an A4 PDF document titled `title`.
pub fn render_pdf(title: &str, pages: &[Page]) -> Result<Vec<u8>, ManualError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);

    let mut fonts: HashMap<Font, IndirectFontRef> = HashMap::new();
    for font in Font::ALL {
        fonts.insert(font, doc.add_builtin_font(font.builtin())?);
    }

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            doc.get_page(page_index).get_layer(layer_index)
        };
        for mark in &page.marks {
            paint(&layer, &fonts, mark);
        }
    }

    Ok(doc.save_to_bytes()?)
}

/// PDF space runs bottom-up.
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

fn paint(layer: &PdfLayerReference, fonts: &HashMap<Font, IndirectFontRef>, mark: &Mark) {
    match mark {
        Mark::Text {
            x,
            y,
            font,
            size,
            color,
            text,
        } => {
            if let Some(font_ref) = fonts.get(font) {
                layer.set_fill_color(color.to_color());
                layer.use_text(text.as_str(), *size, Mm(*x), flip(*y), font_ref);
            }
        }
        Mark::FillRect { x, y, w, h, color } => {
            layer.set_fill_color(color.to_color());
            layer.add_rect(Rect::new(Mm(*x), flip(y + h), Mm(x + w), flip(*y)));
        }
        Mark::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        } => {
            layer.set_outline_color(color.to_color());
            layer.set_outline_thickness(width / crate::fonts::PT_TO_MM);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), flip(*y1)), false),
                    (Point::new(Mm(*x2), flip(*y2)), false),
                ],
                is_closed: false,
            });
        }
    }
}
