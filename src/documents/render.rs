//! PDF layout for generated documents.
//!
//! Letter pages, Helvetica 12pt, text placed with a descending vertical
//! cursor that opens a fresh page past the bottom margin. Body lines are
//! word-wrapped at 80 columns; nothing is truncated.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use serde::{Deserialize, Serialize};

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_X: f64 = 100.0;
const TOP_Y: f64 = 750.0;
const BOTTOM_Y: f64 = 50.0;
const LEADING: f64 = 15.0;
const FONT_SIZE: f64 = 12.0;
const TITLE_FONT_SIZE: f64 = 14.0;
const WRAP_COLUMNS: usize = 80;

/// Page layout for generated documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Title line then body lines, one after another.
    Paged,
    /// Heading, fixed-field paragraphs, then the body as spaced paragraphs.
    #[default]
    Flowing,
}

/// Accumulates text operations page by page.
struct PageWriter {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f64,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: TOP_Y,
        }
    }

    fn write_line(&mut self, text: &str, size: f64) {
        if self.y < BOTTOM_Y {
            self.break_page();
        }
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), size.into()]),
            Operation::new("Td", vec![MARGIN_X.into(), self.y.into()]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ]);
        self.y -= LEADING;
    }

    fn blank_line(&mut self) {
        self.y -= LEADING;
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = TOP_Y;
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.pages.push(std::mem::take(&mut self.current));
        build_pdf(self.pages)
    }
}

/// Assemble a document from per-page operation lists.
fn build_pdf(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content.encode().context("Failed to encode page content")?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
    let pages_dict: Dictionary = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).context("Failed to serialize PDF")?;
    Ok(bytes)
}

/// Word-wrap at `width` columns, preserving paragraph breaks. Words longer
/// than the width are hard-split rather than dropped.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            loop {
                let needed = if line.is_empty() {
                    word.chars().count()
                } else {
                    line.chars().count() + 1 + word.chars().count()
                };
                if needed <= width {
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(word);
                    break;
                }
                if line.is_empty() {
                    // Single word wider than a line: split at the boundary.
                    let (head, tail) = split_at_chars(word, width);
                    lines.push(head.to_string());
                    word = tail;
                } else {
                    lines.push(std::mem::take(&mut line));
                }
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Text strings are written with WinAnsiEncoding; accented Spanish letters
/// map one to one onto Latin-1, anything outside it becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF { code as u8 } else { b'?' }
        })
        .collect()
}

fn split_at_chars(word: &str, width: usize) -> (&str, &str) {
    let byte_index = word
        .char_indices()
        .nth(width)
        .map_or(word.len(), |(i, _)| i);
    word.split_at(byte_index)
}

/// Render a generated document. `field_lines` are the fixed-field
/// paragraphs (parties, amounts) shown before the body in flowing layout.
pub fn render_document(
    layout: Layout,
    title: &str,
    field_lines: &[String],
    body: &str,
) -> Result<Vec<u8>> {
    let mut writer = PageWriter::new();

    match layout {
        Layout::Paged => {
            writer.write_line(title, FONT_SIZE);
            writer.blank_line();
            for line in wrap_text(body, WRAP_COLUMNS) {
                writer.write_line(&line, FONT_SIZE);
            }
        }
        Layout::Flowing => {
            writer.write_line(title, TITLE_FONT_SIZE);
            writer.blank_line();
            for field in field_lines {
                writer.write_line(field, FONT_SIZE);
            }
            if !field_lines.is_empty() {
                writer.blank_line();
            }
            let mut previous_blank = false;
            for line in wrap_text(body, WRAP_COLUMNS) {
                if line.is_empty() {
                    if !previous_blank {
                        writer.blank_line();
                    }
                    previous_blank = true;
                } else {
                    writer.write_line(&line, FONT_SIZE);
                    previous_blank = false;
                }
            }
        }
    }

    writer.finish()
}

/// Receipts are laid out from structured fields alone; no generated body.
pub fn render_receipt(client: &str, amount: f64, date: NaiveDate) -> Result<Vec<u8>> {
    let mut writer = PageWriter::new();
    writer.write_line("Recibo de Honorarios", FONT_SIZE);
    writer.blank_line();
    writer.write_line(&format!("Cliente: {client}"), FONT_SIZE);
    writer.write_line(
        &format!("Monto: {}", crate::fees::format_quetzales(amount)),
        FONT_SIZE,
    );
    writer.write_line(&format!("Fecha: {}", date.format("%d/%m/%Y")), FONT_SIZE);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_never_exceeds_width_and_never_drops_text() {
        let text = "palabra ".repeat(40) + "superlargapalabrasuperlargapalabrasuperlargapalabrasuperlargapalabrasuperlargapalabra";
        let lines = wrap_text(&text, 80);
        for line in &lines {
            assert!(line.chars().count() <= 80, "line too long: {line}");
        }
        let rejoined = lines.join(" ");
        let original: String = text.split_whitespace().collect();
        let wrapped: String = rejoined.split_whitespace().collect();
        assert_eq!(wrapped, original);
    }

    #[test]
    fn wrapping_preserves_paragraph_breaks() {
        let lines = wrap_text("primero\n\nsegundo", 80);
        assert_eq!(lines, vec!["primero", "", "segundo"]);
    }

    #[test]
    fn paged_render_produces_a_pdf() {
        let bytes =
            render_document(Layout::Paged, "Contrato Privado", &[], "cuerpo del contrato")
                .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn long_bodies_paginate() {
        let body = "linea de prueba\n".repeat(200);
        let bytes = render_document(Layout::Paged, "Demanda", &[], &body).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn receipt_renders_fixed_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let bytes = render_receipt("Juan Perez", 1500.0, date).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
