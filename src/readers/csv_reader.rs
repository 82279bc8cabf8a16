use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{AnalysisError, Result};
use crate::models::{Dataset, RawValue, Record};
use crate::utils::progress::ProgressReporter;

pub struct CsvReader {
    delimiter: u8,
}

impl CsvReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read a CSV file with a header row into a typed dataset.
    pub fn read_dataset(&self, path: &Path, progress: Option<&ProgressReporter>) -> Result<Dataset> {
        let bytes = fs::read(path)?;
        if let Some(p) = progress {
            p.set_message(&format!("Parsing {}...", path.display()));
        }
        let text = decode(&bytes);
        let dataset = self.parse_str(&text, progress)?;

        info!(
            path = %path.display(),
            columns = dataset.fields.len(),
            rows = dataset.len(),
            "Read dataset"
        );
        Ok(dataset)
    }

    pub fn parse_str(&self, text: &str, progress: Option<&ProgressReporter>) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let fields: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        if fields.iter().all(|f| f.is_empty()) {
            return Err(AnalysisError::InvalidFormat(
                "CSV input has no header row".to_string(),
            ));
        }
        for field in duplicate_fields(&fields) {
            warn!(column = field, "Duplicate column name; the rightmost value is kept");
        }

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let row_data = result?;

            // Blank lines are skipped by the csv reader; rows of only
            // delimiters still come through and carry nothing useful.
            if row_data.iter().all(|cell| cell.is_empty()) {
                debug!(row = row + 1, "Skipping empty row");
                continue;
            }

            let mut record = Record::new();
            for (field, cell) in fields.iter().zip(row_data.iter()) {
                record.insert(field, RawValue::infer(cell));
            }
            records.push(record);

            if let Some(p) = progress {
                p.rows_read(records.len() as u64);
            }
        }

        Ok(Dataset::new(fields, records))
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Header names that appear more than once, in first-repeat order.
fn duplicate_fields(fields: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for field in fields {
        if !seen.insert(field.as_str()) && !duplicates.contains(&field.as_str()) {
            duplicates.push(field.as_str());
        }
    }
    duplicates
}

/// UTF-8 (BOM stripped) when valid, otherwise Windows-1252.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match UTF_8.decode_without_bom_handling_and_without_replacement(strip_bom(bytes)) {
        Some(text) => text,
        None => {
            debug!("Input is not valid UTF-8; decoding as Windows-1252");
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_dynamic_typing() -> Result<()> {
        let text = "direccion,velocidad,fecha\nNNE, 12 ,2023-01-01\n270,,2023-01-02\n";
        let dataset = CsvReader::new().parse_str(text, None)?;

        assert_eq!(dataset.fields, vec!["direccion", "velocidad", "fecha"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.records[0].get("direccion"),
            Some(&RawValue::Text("NNE".to_string()))
        );
        assert_eq!(dataset.records[0].get("velocidad"), Some(&RawValue::Number(12.0)));
        assert_eq!(dataset.records[1].get("direccion"), Some(&RawValue::Number(270.0)));
        assert_eq!(dataset.records[1].get("velocidad"), Some(&RawValue::Empty));
        Ok(())
    }

    #[test]
    fn test_short_rows_leave_columns_absent() -> Result<()> {
        let text = "dir,speed,note\n90\n180,4,ok\n,,\n";
        let dataset = CsvReader::new().parse_str(text, None)?;

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].get("speed"), None);
        assert_eq!(dataset.records[1].get("note"), Some(&RawValue::Text("ok".to_string())));
        Ok(())
    }

    #[test]
    fn test_semicolon_delimiter() -> Result<()> {
        let text = "dir;vel\nN;3\n";
        let dataset = CsvReader::with_delimiter(b';').parse_str(text, None)?;
        assert_eq!(dataset.fields, vec!["dir", "vel"]);
        assert_eq!(dataset.records[0].get("vel"), Some(&RawValue::Number(3.0)));
        Ok(())
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = CsvReader::new().parse_str("", None);
        assert!(matches!(result, Err(AnalysisError::InvalidFormat(_))));
    }

    #[test]
    fn test_duplicate_headers_keep_rightmost_value() -> Result<()> {
        let text = "dir,speed,speed,dir\nN,3,9,E\n";
        let dataset = CsvReader::new().parse_str(text, None)?;

        assert_eq!(dataset.fields, vec!["dir", "speed", "speed", "dir"]);
        assert_eq!(dataset.records[0].get("speed"), Some(&RawValue::Number(9.0)));
        assert_eq!(
            dataset.records[0].get("dir"),
            Some(&RawValue::Text("E".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_fields_reported_once() {
        let fields: Vec<String> = ["a", "b", "a", "c", "a", "b"]
            .iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(duplicate_fields(&fields), vec!["a", "b"]);
        assert!(duplicate_fields(&fields[..2]).is_empty());
    }

    #[test]
    fn test_read_windows_1252_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        // "Dirección,Velocidad" with ó encoded as a single Latin-1 byte
        temp_file.write_all(b"Direcci\xF3n,Velocidad\nSW,14\n")?;

        let dataset = CsvReader::new().read_dataset(temp_file.path(), None)?;
        assert_eq!(dataset.fields, vec!["Dirección", "Velocidad"]);
        assert_eq!(dataset.records[0].get("Velocidad"), Some(&RawValue::Number(14.0)));
        Ok(())
    }

    #[test]
    fn test_read_utf8_bom_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        temp_file.write_all(b"\xEF\xBB\xBFdir,vel\nE,5\n")?;

        let dataset = CsvReader::new().read_dataset(temp_file.path(), None)?;
        assert_eq!(dataset.fields, vec!["dir", "vel"]);
        Ok(())
    }
}
