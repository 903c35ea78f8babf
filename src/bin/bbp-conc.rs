use std::process::ExitCode;

use clap::Parser;

use bbp::formula::Formula;
use bbp::Driver;

/// Computes hexadecimal digits of pi starting at a given position, in parallel.
#[derive(Parser, Debug)]
#[command(name = "bbp-conc")]
struct Args {
    /// Digit position to start extraction at.
    start: u64,

    /// Number of worker threads.
    threads: u16,

    /// Which BBP variant to evaluate.
    #[arg(long, value_enum, default_value = "original")]
    formula: Formula,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let driver = match Driver::new(args.start, args.threads, args.formula) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match driver.run() {
        Ok(result) => {
            println!("{} digits @ {} = {}", bbp::PRECISION, args.start, result.digits);
            println!("Total Exec. Time: {:.5}s", result.elapsed.as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
