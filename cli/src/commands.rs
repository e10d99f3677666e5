pub mod check;

use clap::Parser;

use crate::report::ReportFormat;

#[derive(Parser)]
#[command(name = "reachr")]
#[command(version)]
#[command(about = "Checks outbound TCP, HTTP(S) and DNS connectivity from this host.")]
pub struct CommandLine {
    /// Output format for probe results
    #[arg(long, value_enum, default_value_t = ReportFormat::Auto, env = "REACHR_FORMAT")]
    pub format: ReportFormat,

    /// Seconds to wait for each TCP connect and HTTP request
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 5,
        env = "REACHR_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Connect HTTP probes directly, ignoring HTTP_PROXY/HTTPS_PROXY
    #[arg(long, env = "REACHR_DIRECT")]
    pub direct: bool,

    /// Disable colored output in human-readable mode
    #[arg(long)]
    pub no_color: bool,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
