//! CSV roster source
//!
//! The header row names the columns. `Name`, `Mac Address` and `Status` are
//! required; any other column is ignored. Status 0 is a public identity and
//! status 1 an anonymous one.

use csv::{ReaderBuilder, StringRecord, Trim};
use occupancy_core::{
    HardwareAddress, IdentityRecord, LoadError, LoadResult, RosterSource, Visibility,
};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const NAME_COLUMN: &str = "Name";
pub const MAC_ADDRESS_COLUMN: &str = "Mac Address";
pub const STATUS_COLUMN: &str = "Status";

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    name: usize,
    mac_address: usize,
    status: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> LoadResult<Self> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn(column))
        };

        Ok(Self {
            name: position(NAME_COLUMN)?,
            mac_address: position(MAC_ADDRESS_COLUMN)?,
            status: position(STATUS_COLUMN)?,
        })
    }

    fn parse_record(self, row: usize, record: &StringRecord) -> LoadResult<IdentityRecord> {
        let field = |index: usize, column: &str| {
            record.get(index).ok_or_else(|| LoadError::Malformed {
                row,
                reason: format!("missing value for column {column:?}"),
            })
        };

        let name = field(self.name, NAME_COLUMN)?;
        let mac_address = field(self.mac_address, MAC_ADDRESS_COLUMN)?;
        let status = field(self.status, STATUS_COLUMN)?;

        let visibility = status
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Visibility::from_status)
            .ok_or_else(|| LoadError::InvalidStatus {
                row,
                value: status.to_string(),
            })?;

        // An empty address is a substring of every scan line
        let hardware_address = HardwareAddress::new(mac_address);
        if hardware_address.is_empty() {
            return Err(LoadError::Malformed {
                row,
                reason: format!("empty {MAC_ADDRESS_COLUMN:?}"),
            });
        }

        Ok(IdentityRecord::new(name, hardware_address, visibility))
    }
}

/// Parse roster records from any CSV reader
///
/// Rows are numbered from 1 (the first row after the header) in errors.
pub fn parse_roster<R: Read>(reader: R) -> LoadResult<Vec<IdentityRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Malformed {
            row: 0,
            reason: e.to_string(),
        })?
        .clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result.map_err(|e| LoadError::Malformed {
            row,
            reason: e.to_string(),
        })?;
        records.push(layout.parse_record(row, &record)?);
    }

    Ok(records)
}

/// Roster source backed by a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvRosterSource {
    path: PathBuf,
}

impl CsvRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for CsvRosterSource {
    fn load(&self) -> LoadResult<Vec<IdentityRecord>> {
        let file = File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        let records = parse_roster(file)?;

        for record in &records {
            tracing::debug!(
                name = %record.name,
                hardware_address = %record.hardware_address,
                visibility = %record.visibility,
                "Loaded roster entry"
            );
        }
        tracing::info!(
            path = %self.path.display(),
            entries = records.len(),
            "Roster loaded"
        );

        Ok(records)
    }
}
