//! Numeric CSV reader.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::math::Matrix;

/// Configuration for reading numeric delimited files.
#[derive(Debug, Clone)]
pub struct CsvReaderConfig {
    /// Field delimiter, `,` by default.
    pub delimiter: u8,
    /// Whether the first line is a header to discard.
    pub has_header: bool,
}

impl Default for CsvReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
        }
    }
}

/// Read a comma-separated file of numbers into a matrix, one row per line.
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Matrix> {
    let config = CsvReaderConfig {
        has_header,
        ..CsvReaderConfig::default()
    };
    read_csv_with_config(path, &config)
}

/// Read a delimited numeric file using a custom configuration.
///
/// Every field must parse as `f64` and every row must have the same number of
/// fields. Nothing is dropped or coerced: the first offending field fails the
/// whole read. When `has_header` is set the first physical line is discarded,
/// even if it is blank. Quote characters are not special.
pub fn read_csv_with_config<P: AsRef<Path>>(path: P, config: &CsvReaderConfig) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    let mut buf = BufReader::new(file);

    // the csv crate skips blank lines, so the header is consumed here instead
    let mut header_lines = 0u64;
    if config.has_header {
        let mut header = Vec::new();
        let n = buf
            .read_until(b'\n', &mut header)
            .with_context(|| format!("Failed to read header row of {}", path.display()))?;
        if n == 0 {
            return Err(anyhow!("Missing header row in {}", path.display()));
        }
        header_lines = 1;
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(buf);

    let mut data = Vec::new();
    let mut n_cols: Option<usize> = None;
    let mut n_rows = 0usize;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let line = record
            .position()
            .map_or(row_idx as u64 + 1, |pos| pos.line())
            + header_lines;

        let expected = *n_cols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(anyhow!(
                "Row at line {} has {} fields, expected {}",
                line,
                record.len(),
                expected
            ));
        }

        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().with_context(|| {
                format!(
                    "Invalid numeric entry '{}' at line {}, column {}",
                    field,
                    line,
                    col_idx + 1
                )
            })?;
            data.push(value);
        }
        n_rows += 1;
    }

    let n_cols = n_cols.unwrap_or(0);
    log::debug!(
        "Read {} rows x {} columns from {}",
        n_rows,
        n_cols,
        path.display()
    );

    Matrix::from_shape_vec((n_rows, n_cols), data).context("Failed to build matrix from CSV data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_with_header() {
        let file = write_file("a,b,c\n1,2,3\n4.5, -5 ,6e1\n");
        let m = read_csv(file.path(), true).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 2.0, 3.0], [4.5, -5.0, 60.0]]));
    }

    #[test]
    fn test_read_without_header_keeps_first_row() {
        let file = write_file("1,2\n3,4\n");
        let m = read_csv(file.path(), false).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn test_non_numeric_field_fails() {
        let file = write_file("1,2\n3,abc\n");
        let err = read_csv(file.path(), false).unwrap_err();
        assert!(format!("{:#}", err).contains("abc"), "{:#}", err);
    }

    #[test]
    fn test_ragged_rows_fail() {
        let file = write_file("1,2\n3,4,5\n");
        assert!(read_csv(file.path(), false).is_err());
    }

    #[test]
    fn test_missing_header_fails() {
        let file = write_file("");
        assert!(read_csv(file.path(), true).is_err());
        assert_eq!(read_csv(file.path(), false).unwrap().shape(), (0, 0));
    }

    #[test]
    fn test_blank_header_line_is_discarded() {
        let file = write_file("\n1,2\n3,4\n");
        let m = read_csv(file.path(), true).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_error_line_counts_header() {
        let file = write_file("a,b\n1,2\n3,x\n");
        let err = read_csv(file.path(), true).unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"), "{:#}", err);
    }

    #[test]
    fn test_quoted_fields_are_not_numbers() {
        let file = write_file("\"1\",2\n");
        assert!(read_csv(file.path(), false).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(read_csv("/nonexistent/path/data.csv", false).is_err());
    }

    #[test]
    fn test_custom_delimiter() {
        let file = write_file("x\ty\n1\t2\n");
        let config = CsvReaderConfig {
            delimiter: b'\t',
            has_header: true,
        };
        let m = read_csv_with_config(file.path(), &config).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 2.0]]));
    }
}
