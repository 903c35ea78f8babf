use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

/// Computes hexadecimal digits of pi starting at a given position, sequentially.
#[derive(Parser, Debug)]
#[command(name = "bbp-seq")]
struct Args {
    /// Digit position to start extraction at.
    start: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let started = Instant::now();
    match bbp::sequential::bbp(args.start) {
        Ok(total) => {
            let digits = bbp::hex::render(total);
            let elapsed = started.elapsed();
            println!("{} digits @ {} = {}", bbp::PRECISION, args.start, digits);
            println!("Total Exec. Time: {:.5}s", elapsed.as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
