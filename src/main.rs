use clap::Parser;
use ghwhat::cli::{self, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(err) = cli::run(config).await {
        log::debug!("{err:?}");
        cli::die(1, &err.to_string());
    }
}
