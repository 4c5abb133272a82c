// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::ExportOptions;
use crate::csv::write_table;
use crate::error::ExportError;
use crate::store::DataSet;

/// Write the dataset to the file named by `export`, creating parent directories.
/// Returns the final path written to.
pub fn export_dataset(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path).map_err(|source| ExportError::Io { path: path.clone(), source })?;
    write_table(BufWriter::new(file), ds, export.delim())?;

    logf!("Export: {} rows → {}", ds.row_count(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
