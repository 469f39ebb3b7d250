//! Paginated PDF report encoder built directly on lopdf.

use chrono::Local;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::ExportError;
use crate::policy::{ResultTable, RECORD_TIMESTAMP_FORMAT};

// Landscape US Letter, points.
const PAGE_WIDTH: f32 = 792.0;
const PAGE_HEIGHT: f32 = 612.0;
const MARGIN: f32 = 30.0;

const TITLE_FONT_SIZE: f32 = 12.0;
const CELL_FONT_SIZE: f32 = 5.0;
const ROW_HEIGHT: f32 = 12.0;
const CELL_PADDING: f32 = 1.5;
const GRID_LINE_WIDTH: f32 = 0.5;

// Rough average glyph width for Helvetica at small sizes.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;

/// Render the table as a landscape PDF report: a bold title line with
/// the generation timestamp, then a gridlined table with a grey header
/// row and white header text, paginated across as many pages as the
/// rows need. Cell text is truncated to the column width; values are
/// otherwise untouched.
pub fn write_report(table: &ResultTable, title: &str) -> Result<Vec<u8>, ExportError> {
    let header = ResultTable::header();
    let columns = header.len();
    let table_width = PAGE_WIDTH - 2.0 * MARGIN;
    let col_width = table_width / columns as f32;
    let max_chars = ((col_width - 2.0 * CELL_PADDING) / (CELL_FONT_SIZE * GLYPH_WIDTH_FACTOR))
        .max(1.0) as usize;

    let title_line = format!(
        "{} / {}",
        title,
        Local::now().format(RECORD_TIMESTAMP_FORMAT)
    );

    let rows: Vec<Vec<String>> = table.rows().collect();

    let mut page_contents: Vec<Vec<Operation>> = Vec::new();
    let mut cursor = 0usize;
    let mut first_page = true;

    loop {
        // The title pushes the table down on the first page only.
        let table_top = if first_page {
            PAGE_HEIGHT - MARGIN - 2.0 * TITLE_FONT_SIZE
        } else {
            PAGE_HEIGHT - MARGIN
        };
        let capacity = (((table_top - MARGIN) / ROW_HEIGHT) as usize).saturating_sub(1);
        let end = (cursor + capacity.max(1)).min(rows.len());

        let mut ops = Vec::new();
        if first_page {
            set_fill_color(&mut ops, 0.0, 0.0, 0.0);
            show_text(
                &mut ops,
                "F2",
                TITLE_FONT_SIZE,
                MARGIN,
                PAGE_HEIGHT - MARGIN - TITLE_FONT_SIZE,
                &title_line,
            );
        }
        draw_table(
            &mut ops,
            &header,
            &rows[cursor..end],
            table_top,
            col_width,
            max_chars,
        );
        page_contents.push(ops);

        cursor = end;
        first_page = false;
        if cursor >= rows.len() {
            break;
        }
    }

    build_document(page_contents)
}

fn draw_table(
    ops: &mut Vec<Operation>,
    header: &[&str],
    rows: &[Vec<String>],
    top: f32,
    col_width: f32,
    max_chars: usize,
) {
    let columns = header.len();
    let table_width = col_width * columns as f32;
    let bottom = top - ROW_HEIGHT * (rows.len() + 1) as f32;

    // Grey header banner
    set_fill_color(ops, 0.5, 0.5, 0.5);
    ops.push(Operation::new(
        "re",
        vec![
            Object::Real(MARGIN),
            Object::Real(top - ROW_HEIGHT),
            Object::Real(table_width),
            Object::Real(ROW_HEIGHT),
        ],
    ));
    ops.push(Operation::new("f", vec![]));

    // Header labels: white, bold
    set_fill_color(ops, 1.0, 1.0, 1.0);
    let text_y = |row_index: usize| top - ROW_HEIGHT * (row_index + 1) as f32 + 3.5;
    for (col, label) in header.iter().enumerate() {
        show_text(
            ops,
            "F2",
            CELL_FONT_SIZE,
            MARGIN + col as f32 * col_width + CELL_PADDING,
            text_y(0),
            &truncate(label, max_chars),
        );
    }

    // Body cells: black, regular
    set_fill_color(ops, 0.0, 0.0, 0.0);
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            show_text(
                ops,
                "F1",
                CELL_FONT_SIZE,
                MARGIN + col as f32 * col_width + CELL_PADDING,
                text_y(row_idx + 1),
                &truncate(cell, max_chars),
            );
        }
    }

    // Black grid: one stroked path with all segments
    ops.push(Operation::new(
        "RG",
        vec![Object::Real(0.0), Object::Real(0.0), Object::Real(0.0)],
    ));
    ops.push(Operation::new("w", vec![Object::Real(GRID_LINE_WIDTH)]));
    for col in 0..=columns {
        let x = MARGIN + col as f32 * col_width;
        line(ops, x, top, x, bottom);
    }
    for row in 0..=(rows.len() + 1) {
        let y = top - row as f32 * ROW_HEIGHT;
        line(ops, MARGIN, y, MARGIN + table_width, y);
    }
    ops.push(Operation::new("S", vec![]));
}

fn build_document(page_contents: Vec<Vec<Operation>>) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(page_contents.len());
    for operations in page_contents {
        let content = Content { operations };
        let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => stream_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(PAGE_WIDTH),
                Object::Real(PAGE_HEIGHT),
            ],
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

fn set_fill_color(ops: &mut Vec<Operation>, r: f32, g: f32, b: f32) {
    ops.push(Operation::new(
        "rg",
        vec![Object::Real(r), Object::Real(g), Object::Real(b)],
    ));
}

fn show_text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![font.into(), Object::Real(size)],
    ));
    ops.push(Operation::new(
        "Td",
        vec![Object::Real(x), Object::Real(y)],
    ));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(encode_winansi(text), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn line(ops: &mut Vec<Operation>, x1: f32, y1: f32, x2: f32, y2: f32) {
    ops.push(Operation::new(
        "m",
        vec![Object::Real(x1), Object::Real(y1)],
    ));
    ops.push(Operation::new(
        "l",
        vec![Object::Real(x2), Object::Real(y2)],
    ));
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}

/// Encode text for a WinAnsiEncoding Type1 font. Latin-1 maps straight
/// through; the handful of typographic characters the report uses have
/// dedicated WinAnsi code points; anything else degrades to '?'.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2014}' => 0x97, // em dash
            '\u{2013}' => 0x96, // en dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85, // ellipsis
            _ if (c as u32) <= 0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{ExtractionRecord, FieldValues, ResultTable};

    fn table_with_rows(n: usize) -> ResultTable {
        let mut table = ResultTable::new();
        for i in 0..n {
            table.push(ExtractionRecord::new(
                format!("doc_{}.pdf", i),
                1,
                FieldValues::empty(),
            ));
        }
        table
    }

    #[test]
    fn test_report_is_a_pdf() {
        let bytes = write_report(&table_with_rows(2), "Relatório").unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_empty_table_still_renders_title_and_header() {
        let bytes = write_report(&ResultTable::new(), "Relatório").unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_many_rows_paginate() {
        // One page fits well under 100 rows at this row height
        let small = write_report(&table_with_rows(1), "t").unwrap();
        let large = write_report(&table_with_rows(200), "t").unwrap();
        assert!(large.len() > small.len());

        let doc = lopdf::Document::load_mem(&large).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn test_winansi_encoding() {
        assert_eq!(encode_winansi("abc"), b"abc".to_vec());
        assert_eq!(encode_winansi("Apólice")[2], 0xF3); // ó in Latin-1
        assert_eq!(encode_winansi("—"), vec![0x97]);
        assert_eq!(encode_winansi("日"), vec![b'?']);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 4), "abcd");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
