//! Table comparison
//!
//! Column names and order must match exactly, as must the row count. Each
//! column is typed int, float or text and both sides must agree: a column of
//! integers is int, one that also holds decimals, exponents, `nan`/`inf` or
//! empty cells (read as NaN) is float, anything else is text. Numeric cells
//! match within tolerance, text cells must be identical.

use std::path::Path;

use super::values_match;
use crate::config::Tolerance;
use crate::error::{HarnessError, Result};

/// A csv file read as header plus string rows
#[derive(Debug)]
struct Frame {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    fn read(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| HarnessError::csv(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| HarnessError::csv(path, e))?
            .iter()
            .map(String::from)
            .collect();

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(String::from).collect())
                    .map_err(|e| HarnessError::csv(path, e))
            })
            .collect::<Result<_>>()?;

        Ok(Self { headers, rows })
    }

    fn column(&self, j: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row.get(j).map_or("", String::as_str))
    }

    fn kind(&self, j: usize) -> Kind {
        self.column(j).map(Kind::of_cell).max().unwrap_or(Kind::Text)
    }

    fn numeric_column(&self, j: usize) -> Vec<f64> {
        self.column(j).map(parse_number).collect()
    }
}

/// Inferred type of a column, ordered from narrowest to widest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    Int,
    Float,
    Text,
}

impl Kind {
    fn of_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.parse::<i64>().is_ok() {
            Self::Int
        } else if cell.is_empty() || cell.parse::<f64>().is_ok() {
            Self::Float
        } else {
            Self::Text
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
        }
    }
}

fn parse_number(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        f64::NAN
    } else {
        cell.parse().unwrap_or(f64::NAN)
    }
}

/// Label of column `j`, naming unnamed columns by position
fn column_label(headers: &[String], j: usize) -> String {
    match headers.get(j) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("Unnamed: {j}"),
    }
}

pub(super) fn compare_csv(actual: &Path, expected: &Path, tolerance: Tolerance) -> Result<()> {
    let got = Frame::read(actual)?;
    let want = Frame::read(expected)?;

    if got.headers != want.headers {
        return Err(HarnessError::mismatch(
            expected,
            format!("columns differ: expected {:?}, found {:?}", want.headers, got.headers),
        ));
    }
    if got.rows.len() != want.rows.len() {
        return Err(HarnessError::mismatch(
            expected,
            format!("row count differs: expected {}, found {}", want.rows.len(), got.rows.len()),
        ));
    }

    for j in 0..want.headers.len() {
        let label = column_label(&want.headers, j);
        let (got_kind, want_kind) = (got.kind(j), want.kind(j));
        if got_kind != want_kind {
            return Err(HarnessError::mismatch(
                expected,
                format!(
                    "column '{label}' type differs: expected {}, found {}",
                    want_kind.as_str(),
                    got_kind.as_str()
                ),
            ));
        }

        if want_kind == Kind::Text {
            if let Some((row, (g, w))) =
                got.column(j).zip(want.column(j)).enumerate().find(|(_, (g, w))| g != w)
            {
                return Err(HarnessError::mismatch(
                    expected,
                    format!("column '{label}' row {row}: expected {w:?}, found {g:?}"),
                ));
            }
            continue;
        }

        let got_values = got.numeric_column(j);
        let want_values = want.numeric_column(j);
        let diff = got_values
            .iter()
            .zip(&want_values)
            .position(|(&g, &w)| !values_match(g, w, tolerance));
        if let Some(row) = diff {
            return Err(HarnessError::mismatch(
                expected,
                format!(
                    "column '{label}' row {row}: expected {}, found {} (atol={}, rtol={})",
                    want_values[row], got_values[row], tolerance.absolute, tolerance.relative
                ),
            ));
        }
    }

    Ok(())
}
