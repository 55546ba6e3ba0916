//! Tabular output formatting
//!
//! Commands hand back a `Table` of columns and rows; the formatter turns it
//! into a bordered text table, JSON, YAML or bare values. A table is either
//! a single record (`render_one`) or a listing (`render_list`).

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde_json::{Map, Value};

/// Output formats accepted by `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered text table
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
    /// Bare values, no headers
    Value,
}

/// Columns plus rows of matching arity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Keep only the `wanted` columns, in the order requested.
    /// Unknown names are dropped; an empty `wanted` keeps everything.
    pub fn select(self, wanted: &[String]) -> Result<Self> {
        if wanted.is_empty() {
            return Ok(self);
        }

        let indices: Vec<usize> = wanted
            .iter()
            .filter_map(|w| self.columns.iter().position(|c| c == w))
            .collect();
        if indices.is_empty() {
            bail!(
                "No recognized column names in {:?}. Recognized columns are {:?}.",
                wanted,
                self.columns
            );
        }

        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Ok(Self { columns, rows })
    }

    /// Render the first row as a single record
    pub fn render_one(&self, format: OutputFormat) -> Result<String> {
        let row = self.rows.first().map(Vec::as_slice).unwrap_or(&[]);

        let out = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&self.record(row))?,
            OutputFormat::Yaml => serde_yaml::to_string(&self.record(row))?,
            OutputFormat::Table => {
                let headers = ["Field".to_string(), "Value".to_string()];
                let lines: Vec<Vec<String>> = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(column, value)| vec![column.clone(), cell_text(value)])
                    .collect();
                grid(&headers, &lines)
            }
            OutputFormat::Value => row.iter().map(cell_text).collect::<Vec<_>>().join("\n"),
        };
        Ok(out.trim_end().to_string())
    }

    /// Render every row as a listing
    pub fn render_list(&self, format: OutputFormat) -> Result<String> {
        let out = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&self.records())?,
            OutputFormat::Yaml => serde_yaml::to_string(&self.records())?,
            OutputFormat::Table => {
                let lines: Vec<Vec<String>> = self
                    .rows
                    .iter()
                    .map(|row| row.iter().map(cell_text).collect())
                    .collect();
                grid(&self.columns, &lines)
            }
            OutputFormat::Value => self
                .rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Ok(out.trim_end().to_string())
    }

    fn record(&self, row: &[Value]) -> Value {
        let map: Map<String, Value> = self
            .columns
            .iter()
            .cloned()
            .zip(row.iter().cloned())
            .collect();
        Value::Object(map)
    }

    fn records(&self) -> Value {
        Value::Array(self.rows.iter().map(|row| self.record(row)).collect())
    }
}

/// Text shown for one cell
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Draw a bordered table; cells may span several lines
fn grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            let widest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            widths[i] = widths[i].max(widest);
        }
    }

    let separator = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let line = |cells: &[&str]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| format!(" {:<w$} ", cells.get(i).copied().unwrap_or(""), w = w))
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let mut out = vec![separator.clone()];
    let header_cells: Vec<&str> = headers.iter().map(String::as_str).collect();
    out.push(line(&header_cells));
    out.push(separator.clone());

    if !rows.is_empty() {
        for row in rows {
            let split: Vec<Vec<&str>> = row.iter().map(|c| c.lines().collect()).collect();
            let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);
            for n in 0..height {
                let cells: Vec<&str> = split
                    .iter()
                    .map(|lines| lines.get(n).copied().unwrap_or(""))
                    .collect();
                out.push(line(&cells));
            }
        }
        out.push(separator);
    }

    out.join("\n")
}
