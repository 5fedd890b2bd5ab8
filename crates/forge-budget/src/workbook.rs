//! Workbook document model.
//!
//! Spreadsheet artifacts are emitted as JSON documents: a workbook is a named
//! list of sheets, a sheet is an ordered list of rows, a row is a list of
//! typed cells. Cell styling from the legacy Excel output is out of scope;
//! sheet names, row order, and cell content are preserved.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::BudgetError;

/// One cell value. Serializes untagged so JSON rows read naturally:
/// `["Electrical", 77700, 0.12]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Blank,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One worksheet: a title and its rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Sheet {
    pub title: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            rows: Vec::new(),
        }
    }

    /// Append a row of cells.
    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Append an empty spacer row.
    pub fn push_blank(&mut self) {
        self.rows.push(Vec::new());
    }
}

/// A complete workbook artifact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Workbook {
    /// Output file stem, e.g. `Budget_Plan_suburban_standard_3500sqft`.
    pub name: String,
    /// Generation date as `YYYY-MM-DD`.
    pub generated: String,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    #[must_use]
    pub fn new(name: &str, generated: &str) -> Self {
        Self {
            name: name.to_string(),
            generated: generated.to_string(),
            sheets: Vec::new(),
        }
    }

    pub fn push_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Sheet lookup by title.
    #[must_use]
    pub fn sheet(&self, title: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.title == title)
    }

    /// Output file name (`{name}.json`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Write the workbook as pretty-printed JSON into `dir`, creating the
    /// directory if needed. Returns the file name written.
    pub fn save(&self, dir: &Path) -> Result<String, BudgetError> {
        fs::create_dir_all(dir)?;
        let file_name = self.file_name();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(&file_name), json)?;
        Ok(file_name)
    }
}
