use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::error::Error;
use std::fmt;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 11.0;
const WRAP_COLUMNS: usize = 90;

#[derive(Debug)]
pub struct PdfError(String);

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF rendering failed: {}", self.0)
    }
}

impl Error for PdfError {}

/// Lays the itinerary out on A4 pages in Helvetica and returns the file bytes.
pub fn render_itinerary_pdf(city: &str, itinerary: &str) -> Result<Vec<u8>, PdfError> {
    let title = sanitize(&format!("Travel itinerary: {}", city));
    let (doc, page, layer) = PdfDocument::new(
        title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PdfError(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PdfError(e.to_string()))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    current.use_text(title.as_str(), TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &bold);
    y -= LINE_HEIGHT_MM * 2.0;

    for line in wrap_lines(itinerary, WRAP_COLUMNS) {
        if y < MARGIN_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        if !line.is_empty() {
            current.use_text(sanitize(&line), BODY_SIZE, Mm(MARGIN_MM), Mm(y), &regular);
        }
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes().map_err(|e| PdfError(e.to_string()))
}

/// `itinerary-<slug>.pdf`, where the slug keeps the city's letters and digits
/// (any script, lower-cased) and collapses every other run to a single dash.
pub fn pdf_filename(city: &str) -> String {
    let mut slug = String::new();
    for c in city.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "itinerary.pdf".to_string()
    } else {
        format!("itinerary-{}.pdf", slug)
    }
}

/// Greedy word wrap. Source lines are kept, blank ones included; a word
/// longer than the width is split across lines.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for source in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in source.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            if line_len > 0 && line_len + 1 + word.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line_len += word.len();
            line.extend(word);
        }

        lines.push(line);
    }

    lines
}

// The built-in fonts only cover Latin-1.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c,
            '\t' => ' ',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2022}' => '*',
            _ => '?',
        })
        .collect()
}
