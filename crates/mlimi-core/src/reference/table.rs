use crate::error::MlimiError;
use calamine::Reader;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// One row of a reference table, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Record { fields }
    }

    /// Field value, or "" when the column is missing, empty or "NA".
    pub fn get(&self, key: &str) -> &str {
        match self.fields.get(key).map(|v| v.trim()) {
            Some("NA") | None => "",
            Some(v) => v,
        }
    }

    /// Like [`Record::get`] but with a caller-supplied placeholder.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            "" => default,
            v => v,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Rows of a CSV or XLSX reference table, in file order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl ReferenceTable {
    pub fn from_records(headers: Vec<String>, records: Vec<Record>) -> Self {
        ReferenceTable { headers, records }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read a table from CSV with a header row. Short rows leave the
    /// remaining columns empty.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, MlimiError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut records: Vec<Record> = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let record: Record = headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.clone(), v.to_string()))
                .collect();
            records.push(record);
        }

        Ok(ReferenceTable { headers, records })
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, MlimiError> {
        let file = std::fs::File::open(path).map_err(|e| table_error(path, e))?;
        Self::from_csv_reader(file).map_err(|e| table_error(path, e))
    }

    /// Read the first worksheet of a spreadsheet; row 1 holds the headers.
    ///
    /// The format (XLSX, legacy XLS, XLSB or ODS) is detected from the bytes.
    pub fn from_workbook_bytes(bytes: &[u8]) -> Result<Self, MlimiError> {
        let cursor = Cursor::new(bytes);
        let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
            .map_err(|e| MlimiError::ParseError(format!("failed to open workbook: {e}")))?;

        let sheet = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| MlimiError::ParseError("workbook has no worksheets".into()))?
            .map_err(|e| MlimiError::ParseError(format!("failed to read worksheet: {e}")))?;

        let mut rows = sheet.rows();
        let headers: Vec<String> = match rows.next() {
            Some(cells) => cells.iter().map(cell_as_string).collect(),
            None => return Ok(ReferenceTable::default()),
        };

        let records: Vec<Record> = rows
            .filter(|cells| cells.iter().any(|c| !matches!(c, calamine::Data::Empty)))
            .map(|cells| -> Record {
                headers
                    .iter()
                    .zip(cells.iter())
                    .map(|(h, c)| (h.clone(), cell_as_string(c)))
                    .collect()
            })
            .collect();

        Ok(ReferenceTable { headers, records })
    }

    /// Load a table, choosing the reader from the file extension.
    pub fn load(path: &Path) -> Result<Self, MlimiError> {
        let is_workbook = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xls"))
            .unwrap_or(false);

        let table = if is_workbook {
            let bytes = std::fs::read(path).map_err(|e| table_error(path, e))?;
            Self::from_workbook_bytes(&bytes).map_err(|e| table_error(path, e))?
        } else {
            Self::from_csv_path(path)?
        };

        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers.len(),
            "loaded reference table"
        );
        Ok(table)
    }
}

fn table_error(path: &Path, e: impl std::fmt::Display) -> MlimiError {
    MlimiError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn cell_as_string(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::String(s) => s.trim().to_string(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Empty => String::new(),
        _ => format!("{cell}"),
    }
}

/// A table loaded once from disk that can be re-read on demand.
///
/// The latest successful load wins; a failed reload keeps the previous rows.
#[derive(Debug)]
pub struct TableStore {
    path: PathBuf,
    table: ReferenceTable,
}

impl TableStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, MlimiError> {
        let path = path.into();
        let table = ReferenceTable::load(&path)?;
        Ok(TableStore { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn reload(&mut self) -> Result<(), MlimiError> {
        match ReferenceTable::load(&self.path) {
            Ok(table) => {
                self.table = table;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "reload failed, keeping previous table");
                Err(e)
            }
        }
    }
}
