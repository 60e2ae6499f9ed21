//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_stats.csv`
//! - `vaccinations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickStatsRow, VaccinationRow};

pub const TICK_STATS_HEADER: [&str; 8] = [
    "tick",
    "susceptible",
    "exposed",
    "infectious",
    "symptomatic",
    "recovered",
    "vaccinated",
    "r0",
];

pub const VACCINATION_HEADER: [&str; 5] = ["tick", "x", "y", "success", "response"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    stats:        Writer<File>,
    vaccinations: Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut stats = Writer::from_path(dir.join("tick_stats.csv"))?;
        stats.write_record(TICK_STATS_HEADER)?;

        let mut vaccinations = Writer::from_path(dir.join("vaccinations.csv"))?;
        vaccinations.write_record(VACCINATION_HEADER)?;

        Ok(Self { stats, vaccinations, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_stats(&mut self, row: &TickStatsRow) -> OutputResult<()> {
        self.stats.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.exposed.to_string(),
            row.infectious.to_string(),
            row.symptomatic.to_string(),
            row.recovered.to_string(),
            row.vaccinated.to_string(),
            row.r0.to_string(),
        ])?;
        Ok(())
    }

    fn write_vaccination(&mut self, row: &VaccinationRow) -> OutputResult<()> {
        self.vaccinations.write_record(&[
            row.tick.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            (row.success as u8).to_string(),
            row.response.as_str().to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stats.flush()?;
        self.vaccinations.flush()?;
        Ok(())
    }
}
