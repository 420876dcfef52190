//! # CLI Module
//!
//! Command implementations behind the `featurd` binary. Each command loads
//! what it needs (settings, market lookup), delegates to the pipeline or the
//! region data, and reports progress with the console macros.
//!
//! ## Commands
//!
//! - [`extract`] - Runs one extraction per country of a region for a date and
//!   stores the rows as `featured/YYYYMMDD/ISO-YYYYMMDD.jsonl`
//! - [`markets`] - Lists the markets of a region
//!
//! ## Usage
//!
//! ```bash
//! featurd extract EU 2023-05-26                   # every European market
//! featurd extract NASAOC 2023-05-26 --country US  # a single market
//! featurd extract AF 2023-05-26 --skip-existing   # resume an aborted run
//! featurd markets AS
//! ```

mod extract;
mod markets;

pub use extract::{ExtractOptions, extract, select_countries};
pub use markets::{load_lookup, markets};
