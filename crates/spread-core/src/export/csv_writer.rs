//! CSV output of resolution records.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::resolver::Resolution;

/// Header row of the output file.
pub const CSV_HEADER: [&str; 2] = ["Item", "API Name"];

/// Writes the header and one `(item, api name)` row per record to `out`.
/// Unresolved records are written with the `Unknown item` sentinel.
pub fn write_resolutions<W: Write>(out: W, records: &[Resolution]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([record.item.as_str(), record.api_name_or_unknown()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the records to it.
pub fn write_csv(path: &Path, records: &[Resolution]) -> Result<(), ExportError> {
    let to_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(|e| to_err(csv::Error::from(e)))?;
    write_resolutions(file, records).map_err(to_err)?;
    tracing::info!(path = %path.display(), rows = records.len(), "csv written");
    Ok(())
}

/// Reads `(item, api name)` pairs back from CSV produced by [`write_resolutions`].
/// The header row is consumed and not returned.
pub fn read_pairs<R: Read>(input: R) -> csv::Result<Vec<(String, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);
    let mut pairs = Vec::new();
    for row in reader.deserialize() {
        let pair: (String, String) = row?;
        pairs.push(pair);
    }
    Ok(pairs)
}
