use crate::config::ScraperConfig;
use crate::error::OutputError;
use crate::results::BookRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Where a run's result files were written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub jsonl: PathBuf,
}

/// Writes a header row followed by one row per record.
///
/// The header comes from the record's field names, so at least one record is
/// required.
pub fn write_csv<W: Write>(records: &[BookRecord], writer: W) -> Result<(), OutputError> {
    if records.is_empty() {
        return Err(OutputError::Empty);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes one JSON object per line
pub fn write_jsonl<W: Write>(records: &[BookRecord], mut writer: W) -> Result<(), OutputError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates the output directory and overwrites both result files.
///
/// An empty record set is rejected before anything touches the filesystem.
pub fn write_outputs(
    records: &[BookRecord],
    config: &ScraperConfig,
) -> Result<OutputPaths, OutputError> {
    if records.is_empty() {
        return Err(OutputError::Empty);
    }

    fs::create_dir_all(&config.output_dir)?;

    let paths = OutputPaths {
        csv: config.csv_path(),
        jsonl: config.jsonl_path(),
    };

    write_csv(records, BufWriter::new(File::create(&paths.csv)?))?;
    ::log::info!("Wrote {} rows to {}", records.len(), paths.csv.display());

    write_jsonl(records, BufWriter::new(File::create(&paths.jsonl)?))?;
    ::log::info!("Wrote {} lines to {}", records.len(), paths.jsonl.display());

    Ok(paths)
}
