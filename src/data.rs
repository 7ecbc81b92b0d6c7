// CSV input for the demo renderer

use anyhow::{anyhow, Context, Result};
use std::io::Read;

/// A numeric x/y series extracted from CSV input.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Read a series from CSV, selecting columns by name or falling back to the
/// first two columns.
pub fn read_series(
    input: impl Read,
    x_col: Option<&str>,
    y_col: Option<&str>,
) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.len() < 2 {
        anyhow::bail!("CSV input needs at least two columns");
    }

    let x_index = column_index(&headers, x_col, 0)?;
    let y_index = column_index(&headers, y_col, 1)?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.context("Failed to read CSV record")?;
        x.push(parse_field(&record, x_index, &headers[x_index], row_idx)?);
        y.push(parse_field(&record, y_index, &headers[y_index], row_idx)?);
    }

    if x.is_empty() {
        anyhow::bail!("CSV input needs at least one data row");
    }

    Ok(Series {
        x_label: headers[x_index].clone(),
        y_label: headers[y_index].clone(),
        x,
        y,
    })
}

fn column_index(headers: &[String], name: Option<&str>, fallback: usize) -> Result<usize> {
    match name {
        Some(name) => headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                anyhow!("Column '{}' not found, available: {}", name, headers.join(", "))
            }),
        None => Ok(fallback),
    }
}

fn parse_field(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> Result<f64> {
    let raw = record
        .get(index)
        .ok_or_else(|| anyhow!("Row {} is missing column '{}'", row + 1, column))?;
    raw.parse::<f64>().with_context(|| {
        format!(
            "Failed to parse '{}' as number in column '{}' at row {}",
            raw,
            column,
            row + 1
        )
    })
}
