// crates/parkmap-core/src/error.rs

//! Error types.
//!
//! [`ParkError`] covers whole-load failures (I/O, fetch, CSV header, JSON).
//! Per-row problems never surface as `ParkError`; they end up as
//! [`SkippedRow`](crate::convert::SkippedRow) entries in the conversion report.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParkError>;

#[derive(Debug, Error)]
pub enum ParkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Overlay already loaded; the feature collection is frozen")]
    AlreadyLoaded,
}

/// Structural failure while reading one `MULTILINESTRING` value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("expected MULTILINESTRING keyword")]
    MissingKeyword,

    #[error("expected '{expected}' at byte {position}")]
    Expected { expected: char, position: usize },

    #[error("unexpected trailing input at byte {position}")]
    TrailingInput { position: usize },

    #[error("line has {found} valid coordinate(s), need at least 2 ({} token(s) rejected)", .rejected.len())]
    TooFewCoordinates {
        found: usize,
        rejected: Vec<TokenError>,
    },
}

/// One coordinate-pair token that was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenError {
    /// Position of the token across the whole value (0-based).
    pub index: usize,
    pub token: String,
    pub fault: TokenFault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFault {
    MissingComponent,
    NotANumber,
    NotFinite,
}

impl fmt::Display for TokenFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenFault::MissingComponent => "expected two components",
            TokenFault::NotANumber => "not a number",
            TokenFault::NotFinite => "not finite",
        };
        f.write_str(s)
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token #{} {:?}: {}", self.index, self.token, self.fault)
    }
}

impl std::error::Error for TokenError {}
