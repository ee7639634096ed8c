use std::process;

use stepwise::{cli, logging};

fn main() {
    logging::init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
