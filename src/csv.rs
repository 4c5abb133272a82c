// src/csv.rs
use std::io::Write;

use csv::{Terminator, WriterBuilder};

use crate::store::DataSet;

/// Write headers (if any) and rows as CSV/TSV to any writer.
/// Fields containing the delimiter, quotes or newlines are quoted.
pub fn write_table<W: Write>(w: W, ds: &DataSet, delim: u8) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    if let Some(h) = &ds.headers {
        wtr.write_record(h)?;
    }
    for row in &ds.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create a full export string from a dataset.
pub fn to_export_string(ds: &DataSet, delim: u8) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, ds, delim)?;

    match String::from_utf8(buf) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}
