// src/file.rs

use std::{
    fs,
    io::Write,
    path::Path,
};

use csv::{ReaderBuilder, WriterBuilder};

use crate::config::options::ExportFormat;
use crate::error::Result;

/// Headers + rows, as read from or written to a delimited file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Write a header line plus rows to any writer. Quoting is handled by `csv`.
pub fn write_rows<W, I>(w: W, headers: &[String], rows: I, format: ExportFormat) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut wtr = WriterBuilder::new()
        .delimiter(format.delim())
        .from_writer(w);
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create/truncate `path` (making parent dirs) and write the table into it.
pub fn write_table_to_path<I>(
    path: &Path,
    headers: &[String],
    rows: I,
    format: ExportFormat,
) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    ensure_parent(path)?;
    let file = fs::File::create(path)?;
    write_rows(std::io::BufWriter::new(file), headers, rows, format)
}

/// Read a delimited file whose first line is the header row.
/// Ragged rows are accepted as-is.
pub fn read_table(path: &Path, format: ExportFormat) -> Result<DataSet> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(DataSet { headers, rows })
}
