mod account;
mod bank;
mod csv_utils;
mod error;
mod runner;
mod stores;

pub use account::Account;
pub use bank::Bank;
pub use error::Error;
pub use runner::{padded_number, run, run_async, Backend, ProbeRow};
pub use stores::{AccountStorage, BucketedStorage, MapStorage, SortStrategy, SortedStorage};
