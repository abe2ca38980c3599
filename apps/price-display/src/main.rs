//! # Price Display Entry Point
//!
//! ```text
//! $ price-display --price 199.99 --discount 25 --tax 8.5 --quantity 3
//! Price Information
//! Original Price: $199.99
//! Discount (25%): -$50.00
//! Discounted Price: $149.99
//! Tax (8.5%): $12.75
//! Final Price: $162.74
//! In Stock (3)
//! ```

use clap::Parser;
use price_display::{error::AppError, init_tracing, run, Cli};

fn main() -> Result<(), AppError> {
    init_tracing();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{output}");

    Ok(())
}
