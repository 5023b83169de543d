//! File comparison example.
//!
//! Run with:
//!     cargo run --example files_equal -- /path/to/a /path/to/b

use std::env;
use std::process::ExitCode;

use streameq::{CompareConfig, files_equal_with};

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (Some(a), Some(b)) = (args.next(), args.next()) else {
        eprintln!("usage: files_equal <a> <b> [buffer-size]");
        return ExitCode::from(2);
    };

    let config = match args.next().map(|s| s.parse::<usize>()) {
        None => CompareConfig::default(),
        Some(Ok(size)) => CompareConfig::default().with_buffer_size(size),
        Some(Err(e)) => {
            eprintln!("invalid buffer size: {}", e);
            return ExitCode::from(2);
        }
    };

    let size = config.buffer_size();
    println!("Comparing {} and {} ({} byte buffers)\n", a, b, size);

    match files_equal_with(&a, &b, &config) {
        Ok(true) => {
            println!("identical");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("different");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
