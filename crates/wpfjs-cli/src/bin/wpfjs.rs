#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::IsTerminal;

use wpfjs_cli::args::CliArgs;
use wpfjs_cli::driver;
use wpfjs_cli::reporter::Reporter;

const EXIT_FAILURE: i32 = 1;

fn main() {
    // Initialize tracing if WPFJS_LOG or RUST_LOG is set.
    wpfjs_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    if let Err(error) = driver::run(&args) {
        let reporter = Reporter::new(std::io::stderr().is_terminal());
        eprintln!("{}", reporter.format_error(&error));
        std::process::exit(EXIT_FAILURE);
    }
}
