//! Domain error types

mod domain_error;

pub use domain_error::{
    LoadError, LoadResult, ScanError, ScanResult, TransportError, TransportResult,
};
