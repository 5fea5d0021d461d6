// crates/parkmap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file, gzip, HTTP) and hands a reader to the
//! CSV stage, which feeds the [`Converter`].
//!
//! A failure to open, fetch or read the CSV header is an error for the whole
//! load. Anything that goes wrong after that is per-row and ends up in the
//! [`ConversionReport`](crate::convert::ConversionReport).

use crate::convert::{Conversion, Converter};
use crate::error::Result;
use crate::record::{ParkingRecord, COLUMNS};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

mod common_io;
#[cfg(feature = "fetch")]
mod fetch;

/// Where the CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
    Text(String),
}

impl Source {
    /// `http://` and `https://` become [`Source::Url`], anything else a path.
    pub fn parse(input: &str) -> Self {
        let lower = input.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(input.trim().to_string())
        } else {
            Source::Path(PathBuf::from(input))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
            Source::Text(t) => write!(f, "<{} bytes of CSV text>", t.len()),
        }
    }
}

impl Conversion {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "parking.csv"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    pub fn load(source: &Source) -> Result<Self> {
        debug!(%source, "loading parking CSV");
        match source {
            Source::Path(path) => Self::load_from_path(path),
            Source::Url(url) => Self::load_from_url(url),
            Source::Text(text) => Self::from_csv_str(text),
        }
    }

    /// Reads `*.csv`, or `*.csv.gz` when the `compact` feature is on.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_reader(reader)
    }

    #[cfg(feature = "fetch")]
    pub fn load_from_url(url: &str) -> Result<Self> {
        let text = fetch::fetch_text(url)?;
        Self::from_csv_str(&text)
    }

    #[cfg(not(feature = "fetch"))]
    pub fn load_from_url(url: &str) -> Result<Self> {
        Err(crate::error::ParkError::InvalidData(format!(
            "cannot load {url}: built without the 'fetch' feature"
        )))
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse CSV with a header row and convert every record.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = first_occurrence_headers(rdr.headers()?);
        rdr.set_headers(headers.clone());
        let missing: Vec<&str> = COLUMNS
            .iter()
            .copied()
            .filter(|c| !headers.iter().any(|h| h == *c))
            .collect();
        if !missing.is_empty() {
            warn!(?missing, "CSV header lacks expected columns");
        }

        let mut converter = Converter::new();
        for result in rdr.deserialize::<ParkingRecord>() {
            match result {
                Ok(record) => converter.push(&record),
                Err(e) => converter.push_error(e),
            }
        }
        Ok(converter.finish())
    }
}

/// Rename repeated header names so only the first column of each is read.
/// serde rejects a record whose header repeats a field name.
fn first_occurrence_headers(headers: &csv::StringRecord) -> csv::StringRecord {
    let mut seen = HashSet::new();
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if seen.insert(name) {
                name.to_string()
            } else {
                warn!(column = i, name, "duplicate CSV header, column ignored");
                format!("{name}#{i}")
            }
        })
        .collect()
}
