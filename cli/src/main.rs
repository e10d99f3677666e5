mod commands;
mod report;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, check};
use reachr_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        timeout: Duration::from_secs(commands.timeout),
        direct: commands.direct,
        ..Config::default()
    };
    let color: bool = !commands.no_color && console::colors_enabled();

    check::check(cfg, commands.format, color).await
}
