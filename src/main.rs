use clap::{arg, command, value_parser, ArgMatches};
use color_eyre::eyre::Result;
use log::*;
use std::path::PathBuf;

use lightpush_chat::config::{default_config_path, ChatConfig};
use lightpush_chat::logger::setup_logger;
use lightpush_chat::run;

fn parse_args() -> ArgMatches {
    command!()
        .arg(
            arg!(-c --config <FILE> "Configuration file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-p --peers <N> "Light push peers found by peer discovery")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(-n --nick <NAME> "Name shown next to your messages"))
        .get_matches()
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = parse_args();

    let config_path = match matches.get_one::<PathBuf>("config") {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = ChatConfig::load_or_create(&config_path)?;
    if let Some(peers) = matches.get_one::<usize>("peers") {
        config.initial_peers = *peers;
    }
    if let Some(nick) = matches.get_one::<String>("nick") {
        config.nick = nick.clone();
    }
    config.validate()?;

    setup_logger(config.log_level_filter()?)?;
    info!("Using config {}", config_path.display());

    run(config).await
}
