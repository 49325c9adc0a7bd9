//! Vocabulary spreadsheet ingestion.
//!
//! Loads the vocabulary workbook once at startup: one sheet per lesson
//! (`lesson1`..`lesson5`), each with a header row naming `Word` and
//! `Meaning` columns. Rows missing either value are dropped.

use crate::config::VOCAB_SHEET_COUNT;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading the vocabulary workbook.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// Workbook could not be opened or parsed.
    #[error("Failed to open vocabulary workbook {path}: {source}")]
    OpenWorkbook {
        /// Path to the workbook file.
        path: PathBuf,
        /// Underlying xlsx error.
        source: calamine::XlsxError,
    },
    /// A lesson sheet is missing or unreadable.
    #[error("Failed to read sheet {name}: {source}")]
    Sheet {
        /// Sheet name (`lesson1`..`lesson5`).
        name: String,
        /// Underlying xlsx error.
        source: calamine::XlsxError,
    },
    /// A sheet has no header row naming the `Word` and `Meaning` columns.
    #[error("Sheet {sheet} has no Word/Meaning header row")]
    MissingHeader {
        /// Sheet name.
        sheet: String,
    },
}

/// In-memory mapping from lesson id to its formatted word list.
///
/// Built once at startup and shared read-only with the handlers.
#[derive(Debug)]
pub struct Vocabulary {
    lessons: HashMap<String, Vec<String>>,
}

impl Vocabulary {
    /// Load all lesson sheets from the workbook at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the workbook cannot be opened, a lesson sheet is missing,
    /// or a sheet lacks the `Word`/`Meaning` header row. There is nothing
    /// to serve without the word lists, so the caller treats this as fatal.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|source| VocabularyError::OpenWorkbook {
                path: path.to_path_buf(),
                source,
            })?;

        let mut lessons = HashMap::new();
        for lesson in 1..=VOCAB_SHEET_COUNT {
            let name = format!("lesson{lesson}");
            let range = workbook
                .worksheet_range(&name)
                .map_err(|source| VocabularyError::Sheet {
                    name: name.clone(),
                    source,
                })?;
            let words = sheet_words(&name, &range)?;
            lessons.insert(name, words);
        }

        Ok(Self { lessons })
    }

    /// Formatted word lines for a lesson, in sheet order.
    ///
    /// Returns `None` for lesson ids that have no loaded sheet (the main
    /// menu offers one more lesson than the workbook currently contains).
    #[must_use]
    pub fn lesson_words(&self, lesson_id: &str) -> Option<&[String]> {
        self.lessons.get(lesson_id).map(Vec::as_slice)
    }
}

/// Extract the formatted word lines from one lesson sheet.
fn sheet_words(sheet: &str, range: &Range<Data>) -> Result<Vec<String>, VocabularyError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| VocabularyError::MissingHeader {
        sheet: sheet.to_string(),
    })?;
    let (word_col, meaning_col) =
        header_columns(header).ok_or_else(|| VocabularyError::MissingHeader {
            sheet: sheet.to_string(),
        })?;

    Ok(rows
        .filter_map(|row| {
            let word = cell_text(row.get(word_col)?)?;
            let meaning = cell_text(row.get(meaning_col)?)?;
            Some(format_entry(&word, &meaning))
        })
        .collect())
}

/// Locate the `Word` and `Meaning` columns in the header row.
fn header_columns(header: &[Data]) -> Option<(usize, usize)> {
    let find = |name: &str| {
        header
            .iter()
            .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
    };
    Some((find("Word")?, find("Meaning")?))
}

/// Non-empty text content of a cell, if any.
///
/// Numeric and boolean cells are rendered as text; a purely numeric word
/// or meaning is still a present value. Only missing/empty cells drop the
/// row.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(render_float(*f)),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Render a float cell without a spurious `.0` on whole numbers.
fn render_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn format_entry(word: &str, meaning: &str) -> String {
    format!("🔹 {word} - {meaning}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn formats_rows_in_sheet_order() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), text("Word"));
        range.set_value((0, 1), text("Meaning"));
        range.set_value((1, 0), text("apple"));
        range.set_value((1, 1), text("سیب"));
        range.set_value((2, 0), text("book"));
        range.set_value((2, 1), text("کتاب"));

        let words = sheet_words("lesson1", &range).expect("sheet should parse");
        assert_eq!(words, vec!["🔹 apple - سیب", "🔹 book - کتاب"]);
    }

    #[test]
    fn drops_rows_with_missing_cells() {
        let mut range = Range::new((0, 0), (4, 1));
        range.set_value((0, 0), text("Word"));
        range.set_value((0, 1), text("Meaning"));
        range.set_value((1, 0), text("apple"));
        range.set_value((1, 1), text("سیب"));
        // word without meaning
        range.set_value((2, 0), text("pear"));
        // meaning without word
        range.set_value((3, 1), text("گلابی"));
        // whitespace-only word
        range.set_value((4, 0), text("   "));
        range.set_value((4, 1), text("هیچ"));

        let words = sheet_words("lesson1", &range).expect("sheet should parse");
        assert_eq!(words, vec!["🔹 apple - سیب"]);
    }

    #[test]
    fn numeric_cells_are_rendered_not_dropped() {
        let mut range = Range::new((0, 0), (3, 1));
        range.set_value((0, 0), text("Word"));
        range.set_value((0, 1), text("Meaning"));
        range.set_value((1, 0), text("forty"));
        range.set_value((1, 1), Data::Float(40.0));
        range.set_value((2, 0), text("half"));
        range.set_value((2, 1), Data::Float(0.5));
        range.set_value((3, 0), Data::Int(7));
        range.set_value((3, 1), text("هفت"));

        let words = sheet_words("lesson1", &range).expect("sheet should parse");
        assert_eq!(
            words,
            vec!["🔹 forty - 40", "🔹 half - 0.5", "🔹 7 - هفت"]
        );
    }

    #[test]
    fn header_columns_may_be_reordered() {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), text("Meaning"));
        range.set_value((0, 1), text("Notes"));
        range.set_value((0, 2), text("Word"));
        range.set_value((1, 0), text("سلام"));
        range.set_value((1, 2), text("hello"));

        let words = sheet_words("lesson2", &range).expect("sheet should parse");
        assert_eq!(words, vec!["🔹 hello - سلام"]);
    }

    #[test]
    fn missing_header_is_an_error() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), text("Term"));
        range.set_value((0, 1), text("Meaning"));

        let err = sheet_words("lesson3", &range).expect_err("header should be rejected");
        assert!(matches!(err, VocabularyError::MissingHeader { ref sheet } if sheet == "lesson3"));
    }

    #[test]
    fn lesson_lookup_distinguishes_empty_and_unknown() {
        let vocabulary = Vocabulary {
            lessons: HashMap::from([
                ("lesson1".to_string(), vec!["🔹 a - ب".to_string()]),
                ("lesson2".to_string(), Vec::new()),
            ]),
        };

        assert_eq!(
            vocabulary.lesson_words("lesson1"),
            Some(&["🔹 a - ب".to_string()][..])
        );
        assert_eq!(vocabulary.lesson_words("lesson2"), Some(&[][..]));
        assert_eq!(vocabulary.lesson_words("lesson6"), None);
    }
}
