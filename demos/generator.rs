//! Generates a CSV file of bank accounts for a number of accounts supplied
//! as a command-line argument.
//!
//! The CSV file can then be fed to the `ledger-lookup` runners and benches.
//!
//! Example (10 accounts):
//! ```bash
//! cargo run --example generator 10 > data/accounts_10.csv
//! ```
//!
//! Account numbers are the indices 1..=N zero-padded to 10 characters, so
//! the first number is always "0000000001" and the last is N padded. The
//! balance of account i is i * 1.5, which makes any row's expected content
//! derivable from its index alone.

use csv::Writer;
use ledger_lookup::{padded_number, Account};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{env, error::Error};

const NUMBER_WIDTH: usize = 10;
const BASE_BALANCE: Decimal = dec!(1.5);

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }

    let num_accounts: u64 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_accounts> must be a positive integer.");
            std::process::exit(1);
        }
    };

    let mut wtr = Writer::from_writer(std::io::stdout());
    for i in 1..=num_accounts {
        let account = Account::with_balance(
            padded_number(i, NUMBER_WIDTH),
            BASE_BALANCE * Decimal::from(i),
        );
        wtr.serialize(account)?;
    }
    wtr.flush()?;
    Ok(())
}
