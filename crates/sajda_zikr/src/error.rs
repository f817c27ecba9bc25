//! Error types for the tally engine and its stores.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from counter configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ZikrError {
    /// Cycle target must be at least 1.
    InvalidTarget(u32),
}

impl Display for ZikrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTarget(t) => write!(f, "invalid cycle target: {t} (minimum 1)"),
        }
    }
}

impl Error for ZikrError {}

/// Errors from snapshot persistence.
#[derive(Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// Underlying I/O failure.
    Io(String),
    /// Snapshot could not be encoded or decoded.
    Format(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Format(msg) => write!(f, "snapshot format error: {msg}"),
        }
    }
}

impl Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e.to_string())
    }
}
