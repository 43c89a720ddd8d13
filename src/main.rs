//! Timetable search CLI.
//!
//! Runs a full search with the default configuration and prints the best
//! timetable to stdout. Logs go to stderr.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use u_timetable::ga::GaConfig;
use u_timetable::timetable::{solve, TimetableConfig, TimetableReport};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("u_timetable=info"))
        .with_writer(std::io::stderr)
        .init();

    let config = TimetableConfig::default();
    let ga = GaConfig::default();

    let result = solve(&config, &ga)?;

    print!("{}", TimetableReport::new(&result.best));
    Ok(())
}
