//! Result rendering: tab-separated and table output

use std::io::{self, Write};

use inventa_core::AssetRow;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Printed instead of an empty table
pub const NO_MATCHES: &str = "No assets matching the filter(s) were found";

/// One line per row: field values, then the path, separated by tabs
///
/// # Errors
/// Returns error if writing fails.
pub fn machine_readable<W: Write>(out: &mut W, rows: &[AssetRow]) -> io::Result<()> {
    for row in rows {
        for value in row.values() {
            write!(out, "{value}\t")?;
        }
        writeln!(out, "{}", row.path.display())?;
    }
    Ok(())
}

/// Table with one column per key and a trailing path column
///
/// # Errors
/// Returns error if writing fails.
pub fn table<W: Write>(out: &mut W, keys: &[String], rows: &[AssetRow]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{NO_MATCHES}");
    }

    let mut builder = Builder::default();
    builder.push_record(keys.iter().cloned().chain(["path".to_string()]));
    for row in rows {
        let path = row.path.display().to_string();
        builder.push_record(row.values().map(str::to_string).chain([path]));
    }

    let table = builder.build().with(Style::sharp()).to_string();
    writeln!(out, "{table}")
}
