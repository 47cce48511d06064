use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    csv_utils::write_csv,
    runner::{sync_runner::probe, Backend, MISSING_NUMBER},
    Account, AccountStorage, Bank, BucketedStorage, MapStorage, SortedStorage,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs the lookup benchmark async on the given account file and writes the
/// timing report to the provided writer. Spawns two tasks:
/// * CSV reader - streams accounts from the input file, deserializes them and
///   sends them to the loader via channel.
/// * Loader - receives accounts from the channel and adds them to the bank
///   until the channel is closed.
///
/// The bank stays exclusively owned by the loader task; the probes run only
/// after loading has finished, so the storage core itself sees no
/// concurrent access.
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * An account number is rejected by the backend
/// * Writing to the output fails
pub async fn run<P, W>(input_path: P, backend: Backend, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    match backend {
        Backend::Map => run_with(MapStorage::new(), input_path, writer).await,
        Backend::Bucketed => run_with(BucketedStorage::new(), input_path, writer).await,
        Backend::Sorted => run_with(SortedStorage::new(), input_path, writer).await,
    }
}

async fn run_with<S, P, W>(storage: S, input_path: P, writer: W) -> Result<()>
where
    S: AccountStorage + Send + 'static,
    P: AsRef<Path>,
    W: Write,
{
    // Create channel for passing accounts from reader to loader
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_accounts(input_path, tx));
    let loader_handle = tokio::spawn(load_accounts(storage, rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    // Get the loaded bank plus the first and last number seen
    let (mut bank, first, last) = loader_handle.await??;

    let mut report = Vec::new();
    if let (Some(first), Some(last)) = (first, last) {
        report.push(probe(&mut bank, "first", &first));
        report.push(probe(&mut bank, "last", &last));
    }
    report.push(probe(&mut bank, "missing", MISSING_NUMBER));

    write_csv(writer, report.into_iter())?;
    Ok(())
}

/// Reads and deserializes accounts from a CSV file.
/// Returns them through the provided channel.
async fn read_accounts(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Account>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Account>();
    while let Some(result) = records.next().await {
        match result {
            Ok(account) => {
                if tx.send(account).await.is_err() {
                    // Receiver dropped, exit gracefully
                    break;
                }
            }
            // CSV parsing errors are critical - propagate them
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Adds accounts received through the channel to a fresh bank.
/// Returns the bank and the first/last account number seen once the channel
/// is closed by the reader.
async fn load_accounts<S: AccountStorage>(
    storage: S,
    mut rx: mpsc::Receiver<Account>,
) -> Result<(Bank<S>, Option<String>, Option<String>), crate::Error> {
    let mut bank = Bank::new(storage);
    let mut first = None;
    let mut last = None;
    while let Some(account) = rx.recv().await {
        if first.is_none() {
            first = Some(account.number().to_owned());
        }
        last = Some(account.number().to_owned());
        bank.add(account)?;
    }
    Ok((bank, first, last))
}
