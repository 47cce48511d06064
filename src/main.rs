use std::env;
use std::error::Error;
use std::io;
use std::process;

use ledger_lookup::{run, Backend};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        return Err("Usage: cargo run -- <map|bucketed|sorted> accounts.csv".into());
    }
    let backend: Backend = args[1].parse()?;
    run(&args[2], backend, io::stdout().lock())?;
    Ok(())
}
