//! CSV → `PointStore`.
//!
//! Expected header: a label column (name configurable), `X`, `Y`, and an
//! optional `Direction` column. Every field is read as text so labels keep
//! their exact spelling (`007` stays `007`); only `X` and `Y` are cast to
//! numbers, once, here. The engine never sees strings.

use anyhow::{anyhow, bail, Context, Result};
use peripheral::{Direction, Point, PointStore};
use polars::prelude::*;
use std::fs::File;

pub const X_COLUMN: &str = "X";
pub const Y_COLUMN: &str = "Y";
pub const DIRECTION_COLUMN: &str = "Direction";

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("column {name:?} is not numeric"))?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| anyhow!("row {}: empty or non-numeric {name:?} value", row + 1))
        })
        .collect()
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::String)
        .with_context(|| format!("column {name:?} is not text"))?;
    Ok(series
        .str()?
        .into_iter()
        .map(|v| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from))
        .collect())
}

/// Read all rows of `file` into a sorted, validated store.
pub fn read_points(file: File, label_column: &str) -> Result<PointStore> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        // No inference: all columns arrive as String.
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .context("parsing CSV")?;
    tracing::debug!(rows = df.height(), cols = df.width(), "csv_shape");

    let labels = string_column(&df, label_column)?;
    let xs = float_column(&df, X_COLUMN)?;
    let ys = float_column(&df, Y_COLUMN)?;
    let directions = if df.column(DIRECTION_COLUMN).is_ok() {
        string_column(&df, DIRECTION_COLUMN)?
    } else {
        tracing::debug!("no Direction column; no point can act as a source");
        vec![None; df.height()]
    };

    let mut points = Vec::with_capacity(df.height());
    for (row, (((label, x), y), direction)) in labels
        .into_iter()
        .zip(xs)
        .zip(ys)
        .zip(directions)
        .enumerate()
    {
        let Some(label) = label else {
            bail!("row {}: empty {label_column:?} value", row + 1);
        };
        let direction = direction
            .map(|d| d.parse::<Direction>())
            .transpose()
            .with_context(|| format!("row {} ({label})", row + 1))?;
        points.push(Point::new(label, x, y, direction));
    }
    Ok(PointStore::new(points)?)
}
