// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::{write_table, UTF8_BOM};
use crate::store::DataSet;

/// Write `data` to `export.path`, creating parent directories and
/// overwriting whatever was there. Returns the path written to.
pub fn write_export(
    export: &ExportOptions,
    data: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.path.clone();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if export.bom {
        out.write_all(UTF8_BOM)?;
    }
    write_table(&mut out, data, export.delimiter, export.quote)?;
    out.flush()?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
