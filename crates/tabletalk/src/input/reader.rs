//! Delimited-file reader with delimiter detection.
//!
//! The HTTP surface receives datasets as JSON records; this reader covers
//! the CLI path, where datasets arrive as CSV/TSV files on disk.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::record::Dataset;
use crate::error::{Result, TabletalkError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Metadata about a loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Reads delimited files into datasets.
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file and return the dataset plus source metadata.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceInfo)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| TabletalkError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| TabletalkError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let dataset = self.read_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        };

        let info = SourceInfo {
            file: path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            hash,
            size_bytes: contents.len() as u64,
            format: format.to_string(),
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            loaded_at: Utc::now(),
        };

        Ok((dataset, info))
    }

    /// Parse bytes with a known delimiter.
    pub fn read_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut columns: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();

        if self.config.has_header {
            columns = reader.headers()?.iter().map(|s| s.to_string()).collect();
        }

        for result in reader.records() {
            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }

            let record = result?;
            if columns.is_empty() {
                // No header row: synthesize names from the first record.
                columns = (1..=record.len()).map(|i| format!("column_{i}")).collect();
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            // Pad ragged rows, truncate overlong ones.
            row.resize(columns.len(), String::new());
            rows.push(row);
        }

        if columns.is_empty() {
            return Err(TabletalkError::EmptyData("No columns found".to_string()));
        }
        if rows.is_empty() {
            return Err(TabletalkError::EmptyData("No data rows found".to_string()));
        }

        Ok(Dataset::new(columns, rows))
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few non-empty lines.
///
/// A delimiter that appears a consistent number of times per line wins;
/// tab gets a small bonus since it rarely occurs inside field values.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let lines: Vec<String> = BufReader::new(bytes)
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(TabletalkError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best = (b',', 0usize);
    for &delim in DELIMITERS {
        let score = delimiter_score(&lines, delim);
        if score > best.1 {
            best = (delim, score);
        }
    }

    Ok(best.0)
}

/// Score a candidate delimiter over the sampled lines.
fn delimiter_score(lines: &[String], delim: u8) -> usize {
    let counts: Vec<usize> = lines
        .iter()
        .map(|line| count_unquoted(line, delim as char))
        .collect();

    let first = counts[0];
    if first == 0 {
        return 0;
    }

    if counts.iter().all(|&c| c == first) {
        first * 1000 + if delim == b'\t' { 100 } else { 0 }
    } else {
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let variance = counts
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / counts.len() as f64;
        if variance < 1.0 { first * 100 } else { first }
    }
}

/// Count delimiter occurrences in a line, ignoring quoted sections.
fn count_unquoted(line: &str, delim: char) -> usize {
    let mut count = 0;
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim && !in_quotes => count += 1,
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted() {
        let data = b"name,notes\n\"Smith, Jane\",ok\n\"Lee, Sam\",ok";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_read_csv() {
        let reader = Reader::new();
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let dataset = reader.read_bytes(data, b',').unwrap();

        assert_eq!(dataset.columns, vec!["name", "age", "city"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.get(0, 0), Some("Alice"));
        assert_eq!(dataset.get(1, 1), Some("25"));
    }

    #[test]
    fn test_read_ragged_rows_padded() {
        let reader = Reader::new();
        let data = b"a,b,c\n1,2\n4,5,6,7";
        let dataset = reader.read_bytes(data, b',').unwrap();

        assert_eq!(dataset.rows[0], vec!["1", "2", ""]);
        assert_eq!(dataset.rows[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_read_without_header() {
        let reader = Reader::with_config(ReaderConfig {
            has_header: false,
            ..Default::default()
        });
        let dataset = reader.read_bytes(b"1,2\n3,4", b',').unwrap();

        assert_eq!(dataset.columns, vec!["column_1", "column_2"]);
        assert_eq!(dataset.row_count(), 2);
    }

    #[test]
    fn test_read_empty_errors() {
        let reader = Reader::new();
        let result = reader.read_bytes(b"a,b\n", b',');
        assert!(matches!(result, Err(TabletalkError::EmptyData(_))));
    }

    #[test]
    fn test_read_file_metadata() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "x,y\n1,2\n3,4\n").unwrap();

        let (dataset, info) = Reader::new().read_file(file.path()).unwrap();

        assert_eq!(dataset.row_count(), 2);
        assert_eq!(info.format, "csv");
        assert_eq!(info.row_count, 2);
        assert_eq!(info.column_count, 2);
        assert!(info.hash.starts_with("sha256:"));
        assert!(info.size_bytes > 0);
    }
}
