//! Sorts the fixed scenarios with every strategy and exits non-zero on the first mismatch.

use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use middle_qsort::{recursive, scenarios, stacked};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let strategies: [(&str, fn(Vec<i32>) -> Vec<i32>); 2] = [
        ("recursive", recursive::sorted),
        ("stacked", stacked::sorted),
    ];

    for (name, sort_fn) in strategies {
        match scenarios::verify(sort_fn) {
            Ok(passed) => info!(strategy = name, passed, "all scenarios sorted as expected"),
            Err(err) => {
                error!(strategy = name, "{err}");
                process::exit(1);
            }
        }
    }
}
