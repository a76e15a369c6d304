//! Label map export
//!
//! Turns the `categories` list of a COCO annotation file into a CSV label
//! map with a `labels,id` header and one row per category, in input order.

use log::info;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{CategoriesFile, CategoryRecord, LABEL_MAP_HEADER};
use crate::utils::read_and_parse_json;

// Every row, header included, ends with CRLF
const LINE_TERMINATOR: &str = "\r\n";

/// Read the ordered category list from a COCO JSON file
pub fn read_categories(path: &Path) -> Result<Vec<CategoryRecord>> {
    let file: CategoriesFile = read_and_parse_json(path)?;
    Ok(file.categories)
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render the label map as CSV text
pub fn render_label_map(records: &[CategoryRecord]) -> String {
    let mut csv = String::with_capacity(LABEL_MAP_HEADER.len() + 1 + records.len() * 16);
    csv.push_str(LABEL_MAP_HEADER);
    csv.push_str(LINE_TERMINATOR);
    for record in records {
        csv.push_str(&format!(
            "{},{}{}",
            escape_field(&record.name),
            record.id,
            LINE_TERMINATOR
        ));
    }
    csv
}

/// Write the label map to `dest`, replacing whatever is there
pub fn write_label_map(records: &[CategoryRecord], dest: &Path) -> Result<()> {
    let file = File::create(dest).map_err(|e| Error::io(dest, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_label_map(records).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(dest, e))
}

/// Export the categories of `input` to `dest` and return the number of rows
pub fn export_label_map(input: &Path, dest: &Path) -> Result<usize> {
    let records = read_categories(input)?;
    write_label_map(&records, dest)?;
    info!(
        "Wrote {} categories from {} to {}",
        records.len(),
        input.display(),
        dest.display()
    );
    Ok(records.len())
}
