//! Capacity table assembly and CSV serialization.
//!
//! A [`CapacityTable`] always starts with the all-zero origin row followed by
//! one row per sweep point, in sweep order.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capacity::{bits_to_kb, capacity_series};
use crate::config::SweepConfig;
use crate::constants::CSV_HEADER;
use crate::error::{Error, Result};
use crate::sweep::linspace;

/// One row of the exported table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityRow {
    /// Swept parameter in KB.
    #[serde(rename = "P_KB")]
    pub p_kb: f64,
    /// Capacity for the first block size, in GB.
    #[serde(rename = "Y_b1")]
    pub y_b1: f64,
    /// Capacity for the second block size, in GB.
    #[serde(rename = "Y_b2")]
    pub y_b2: f64,
}

impl CapacityRow {
    /// Origin row prepended to every table.
    pub const ORIGIN: CapacityRow = CapacityRow {
        p_kb: 0.0,
        y_b1: 0.0,
        y_b2: 0.0,
    };

    fn is_origin(&self) -> bool {
        self.p_kb == 0.0 && self.y_b1 == 0.0 && self.y_b2 == 0.0
    }
}

/// Materialized result of a capacity sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityTable {
    rows: Vec<CapacityRow>,
    source: Option<PathBuf>,
}

impl CapacityTable {
    /// Build a table from sweep rows, prepending the origin row.
    pub fn from_sweep_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CapacityRow>,
    {
        let rows = std::iter::once(CapacityRow::ORIGIN).chain(rows).collect();
        Self { rows, source: None }
    }

    /// All rows, origin first.
    pub fn rows(&self) -> &[CapacityRow] {
        &self.rows
    }

    /// Rows produced by the sweep, without the origin row.
    pub fn sweep_rows(&self) -> &[CapacityRow] {
        &self.rows[1..]
    }

    /// Number of rows including the origin row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A table always holds the origin row, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Path the table was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Serialize the table as CSV with a `P_KB,Y_b1,Y_b2` header line.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the table to `path`.
    ///
    /// The parent directory must already exist; it is never created here.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        self.write_csv(file)
    }

    /// Load a previously exported table from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut table = Self::from_reader(file)?;
        table.source = Some(path.to_path_buf());
        Ok(table)
    }

    /// Load a previously exported table from a reader.
    ///
    /// The header must match exactly and the first row must be the origin row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.iter().ne(CSV_HEADER.iter().copied()) {
            return Err(Error::InvalidHeader {
                expected: CSV_HEADER.join(","),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let rows = csv_reader
            .deserialize()
            .collect::<std::result::Result<Vec<CapacityRow>, csv::Error>>()?;

        match rows.first() {
            Some(first) if first.is_origin() => {}
            _ => return Err(Error::MissingOriginRow),
        }

        debug!(rows = rows.len(), "loaded capacity table");
        Ok(Self { rows, source: None })
    }
}

/// Evaluate the capacity formula over the configured sweep.
///
/// Returns `config.samples + 1` rows: the origin row followed by
/// `(P_KB, Y_b1, Y_b2)` for each sweep point.
pub fn compute_table(config: &SweepConfig) -> CapacityTable {
    let sweep = linspace(config.start_bits, config.end_bits, config.samples);
    let points = sweep.points();
    let [block_1, block_2] = config.block_sizes_bits;

    let y_b1 = capacity_series(points, block_1, config.total_capacity_bits, config.offset);
    let y_b2 = capacity_series(points, block_2, config.total_capacity_bits, config.offset);

    let rows = points
        .iter()
        .zip(y_b1.zip(y_b2))
        .map(|(&p_bits, (y_b1, y_b2))| CapacityRow {
            p_kb: bits_to_kb(p_bits),
            y_b1,
            y_b2,
        });

    CapacityTable::from_sweep_rows(rows)
}
