//! The runner is responsible for loading accounts from CSV into a bank over
//! the chosen storage backend, timing the three benchmark probes (first
//! loaded number, last loaded number, and an absent number), and writing the
//! timing report to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner
//! implementation.

mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::{run, ProbeRow};

use std::str::FromStr;

/// The account number probed in the "missing" lookup. Its leading character
/// is not a digit, so the bucketed backend rejects it without scanning.
pub(crate) const MISSING_NUMBER: &str = "notfound";

/// Storage backend selection, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Map,
    Bucketed,
    Sorted,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "map" => Ok(Backend::Map),
            "bucketed" => Ok(Backend::Bucketed),
            "sorted" => Ok(Backend::Sorted),
            other => Err(format!(
                "unknown backend {other:?}, expected one of: map, bucketed, sorted"
            )),
        }
    }
}

/// Zero-pads an index to a fixed-width account number, e.g.
/// `padded_number(42, 10)` is `"0000000042"`.
pub fn padded_number(index: u64, width: usize) -> String {
    format!("{index:0width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_number() {
        assert_eq!(padded_number(1, 10), "0000000001");
        assert_eq!(padded_number(1000, 10), "0000001000");
        assert_eq!(padded_number(7, 3), "007");
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("map".parse(), Ok(Backend::Map));
        assert_eq!("bucketed".parse(), Ok(Backend::Bucketed));
        assert_eq!("sorted".parse(), Ok(Backend::Sorted));
        assert!("btree".parse::<Backend>().is_err());
    }
}
