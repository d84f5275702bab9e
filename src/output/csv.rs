//! CSV persistence for the article table
//!
//! Writes the dataframe-style layout the tool has always produced: an
//! unnamed row-index column followed by the `Article` column, one row per
//! accepted link. The target file is created or overwritten each run, in
//! one write at the end, never incrementally.

use crate::output::table::ArticleTable;
use crate::output::{OutputError, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Formats the article table as CSV, header included
pub fn format_csv(table: &ArticleTable) -> String {
    let mut csv = String::from(",Article\n");
    for (index, link) in table.links().iter().enumerate() {
        csv.push_str(&format!("{},{}\n", index, escape_field(link)));
    }
    csv
}

/// Writes the article table to `path`, overwriting any existing file
///
/// An unwritable path is fatal to the run; the error propagates to the
/// process boundary with no recovery attempted.
pub fn write_csv(table: &ArticleTable, path: &Path) -> OutputResult<()> {
    let csv = format_csv(table);

    let mut file = File::create(path).map_err(OutputError::Io)?;
    file.write_all(csv.as_bytes()).map_err(OutputError::Io)?;

    Ok(())
}

/// Quotes a CSV field only when it needs it
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_csv_with_rows() {
        let table = ArticleTable::new(vec![
            "https://example.com/report.pdf".to_string(),
            "https://example.com/news/a".to_string(),
        ]);

        assert_eq!(
            format_csv(&table),
            ",Article\n0,https://example.com/report.pdf\n1,https://example.com/news/a\n"
        );
    }

    #[test]
    fn test_format_csv_empty_table_is_header_only() {
        assert_eq!(format_csv(&ArticleTable::default()), ",Article\n");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let table = ArticleTable::new(vec!["https://example.com/a,b".to_string()]);
        assert_eq!(format_csv(&table), ",Article\n0,\"https://example.com/a,b\"\n");
    }

    #[test]
    fn test_write_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("articles.csv");

        fs::write(&path, "stale contents").expect("seed stale file");

        let table = ArticleTable::new(vec!["https://example.com/a".to_string()]);
        write_csv(&table, &path).expect("write should succeed");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, ",Article\n0,https://example.com/a\n");
    }

    #[test]
    fn test_write_csv_unwritable_path_fails() {
        let table = ArticleTable::default();
        let result = write_csv(&table, Path::new("/nonexistent/dir/articles.csv"));
        assert!(result.is_err());
    }
}
