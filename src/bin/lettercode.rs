use std::process;

use lettercode::{compress_bytes, write_report};
use log::*;

const DEFAULT_INPUT: &str = "input.txt";

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let input = match std::fs::read(&path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Error: could not open {}: {}", path, err);
            process::exit(1);
        }
    };
    info!("read {} bytes from {}", input.len(), path);

    let stdout = std::io::stdout();
    let result = compress_bytes(&input).and_then(|encoded| write_report(&encoded, &mut stdout.lock()));
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
