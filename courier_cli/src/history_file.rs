use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::PathBuf,
};

use courier_optimizer::history::{HistoryError, HistoryRow, HistorySink};

/// Appends history rows to a file, one JSON object per line.
pub struct JsonLinesHistory {
    path: PathBuf,
}

impl JsonLinesHistory {
    pub fn new(path: PathBuf) -> Self {
        JsonLinesHistory { path }
    }
}

impl HistorySink for JsonLinesHistory {
    fn append(&mut self, rows: &[HistoryRow]) -> Result<(), HistoryError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        for row in rows {
            serde_json::to_writer(&mut writer, row)?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;

        Ok(())
    }
}
