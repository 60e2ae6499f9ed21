//! `epi-output` — simulation output writers for the rogi simulator.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `tick_stats.csv`, `vaccinations.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by [`StatsObserver`],
//! which implements `epi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, StatsObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = StatsObserver::new(writer);
//! obs.record(model.last_stats());
//! model.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use row::{TickStatsRow, VaccinationRow};
pub use writer::OutputWriter;
