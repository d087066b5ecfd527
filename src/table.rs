//! PV measurement table: CSV loading, view selection, and filtering.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

/// One PV measurement row from the external spreadsheet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PvRecord {
    /// Calendar month (1–12).
    #[serde(rename = "Month")]
    pub month: u32,
    /// Day of month.
    #[serde(rename = "Day")]
    pub day: u32,
    /// Hour of day.
    #[serde(rename = "Hour")]
    pub hour: u32,
    /// Measured irradiance (W/m²).
    #[serde(rename = "Irradiance")]
    pub irradiance: f32,
    /// Measured PV power (W).
    #[serde(rename = "PV_Power")]
    pub pv_power: f32,
}

/// Which record key the dependent filter dropdown operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableView {
    /// Filter by day of month.
    Day,
    /// Filter by calendar month.
    Month,
    /// Filter by hour of day.
    Hour,
}

impl TableView {
    fn key(self, record: &PvRecord) -> u32 {
        match self {
            Self::Day => record.day,
            Self::Month => record.month,
            Self::Hour => record.hour,
        }
    }
}

impl FromStr for TableView {
    type Err = DataSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "hour" => Ok(Self::Hour),
            other => Err(DataSourceError::BadView {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Hour => "hour",
        })
    }
}

/// Data-source failure: missing file, unreadable bytes, or malformed rows.
#[derive(Debug)]
pub enum DataSourceError {
    /// The file could not be opened or read.
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error text.
        message: String,
    },
    /// A row failed to decode against the expected five-column schema.
    Malformed {
        /// CSV decoding error text, including the row position.
        message: String,
    },
    /// An unrecognized view selector.
    BadView {
        /// The selector value that failed to parse.
        value: String,
    },
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read data file {path}: {message}"),
            Self::Malformed { message } => write!(f, "malformed data row: {message}"),
            Self::BadView { value } => {
                write!(f, "unknown view \"{value}\" (expected day, month, or hour)")
            }
        }
    }
}

impl std::error::Error for DataSourceError {}

/// An immutable snapshot of the PV measurement table.
///
/// Loaded fresh on every refresh; never cached or shared as ambient state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PvTable {
    records: Vec<PvRecord>,
}

impl PvTable {
    /// Reads the table from a CSV file with the
    /// `Month,Day,Hour,Irradiance,PV_Power` header.
    ///
    /// Re-reads the file on every call; repeated loads are idempotent reads
    /// of whatever the file holds at that moment.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] if the file is missing or unreadable, or
    /// any row fails to decode.
    pub fn load(path: &Path) -> Result<Self, DataSourceError> {
        let file = std::fs::File::open(path).map_err(|e| DataSourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_reader(file)
    }

    /// Reads the table from any CSV byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Malformed`] if a row fails to decode.
    pub fn from_reader(reader: impl Read) -> Result<Self, DataSourceError> {
        let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: PvRecord = row.map_err(|e| DataSourceError::Malformed {
                message: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(Self { records })
    }

    /// Returns all rows in file order.
    pub fn records(&self) -> &[PvRecord] {
        &self.records
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the rows matching `value` under the given view.
    ///
    /// `None` means no dropdown selection: the full unfiltered set.
    pub fn filter(&self, view: TableView, value: Option<u32>) -> Vec<PvRecord> {
        match value {
            Some(v) => self
                .records
                .iter()
                .filter(|r| view.key(r) == v)
                .cloned()
                .collect(),
            None => self.records.clone(),
        }
    }

    /// Returns the sorted distinct key values under the given view.
    ///
    /// These populate the dependent filter dropdown.
    pub fn distinct(&self, view: TableView) -> Vec<u32> {
        let mut keys: Vec<u32> = self.records.iter().map(|r| view.key(r)).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}
