use anyhow::Result;
use clap::Parser;
use tracing::error;

use gacookie::utils::setup_logging;
use gacookie::{report, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match report::parse_cookies(&args) {
        Ok(cookies) => {
            report::print_parse_results(&cookies, &args)?;
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
