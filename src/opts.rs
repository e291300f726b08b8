//! CLI options.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[clap(long, default_value = "0.0")]
    pub traces_sample_rate: f32,

    /// Web application bind host
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, default_value = "5000")]
    pub port: u16,

    /// CSV file with the `city,type,name` columns
    #[clap(short, long, default_value = "locations.csv")]
    pub locations: PathBuf,
}
