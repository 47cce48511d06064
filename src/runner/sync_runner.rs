use std::error::Error;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::{
    csv_utils::{read_csv_into_iter, write_csv},
    runner::{Backend, MISSING_NUMBER},
    Account, AccountStorage, Bank, BucketedStorage, MapStorage, SortedStorage,
};

/// One timed lookup in the report.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProbeRow {
    /// Which probe this is: "first", "last", or "missing".
    pub probe: String,
    /// The account number that was looked up.
    pub account: String,
    pub found: bool,
    pub nanos: u64,
}

/// Runs the lookup benchmark on the given account file and writes the
/// timing report to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing accounts
/// * `backend` - Which storage backend to load the accounts into
/// * `writer` - Where to write the probe report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * An account number is rejected by the backend
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, backend: Backend, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    match backend {
        Backend::Map => run_with(MapStorage::new(), input_path, writer),
        Backend::Bucketed => run_with(BucketedStorage::new(), input_path, writer),
        Backend::Sorted => run_with(SortedStorage::new(), input_path, writer),
    }
}

fn run_with<S, P, W>(storage: S, input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    S: AccountStorage,
    P: AsRef<Path>,
    W: Write,
{
    let mut bank = Bank::new(storage);
    let mut first: Option<String> = None;
    let mut last: Option<String> = None;

    for account in read_csv_into_iter::<Account, _>(input_path)? {
        // CSV parsing errors are critical - propagate them
        let account = account?;
        if first.is_none() {
            first = Some(account.number().to_owned());
        }
        last = Some(account.number().to_owned());
        bank.add(account)?;
    }

    let mut report = Vec::new();
    if let (Some(first), Some(last)) = (first, last) {
        report.push(probe(&mut bank, "first", &first));
        report.push(probe(&mut bank, "last", &last));
    }
    report.push(probe(&mut bank, "missing", MISSING_NUMBER));

    write_csv(writer, report.into_iter())?;
    Ok(())
}

pub(crate) fn probe<S: AccountStorage>(bank: &mut Bank<S>, label: &str, number: &str) -> ProbeRow {
    let started = Instant::now();
    let hit = bank.account(number);
    let nanos = started.elapsed().as_nanos() as u64;
    ProbeRow {
        probe: label.to_owned(),
        account: number.to_owned(),
        found: hit.is_some(),
        nanos,
    }
}
