use clap::Parser;
use color_eyre::eyre::Result;

use letterbox::{
    infrastructure::{
        cli::{Cli, SourceKind},
        config::Config,
        source::{MemoryLetterSource, RestLetterSource},
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};
use secrecy::{ExposeSecret, SecretString};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Defaults, config file, environment, then flags
    let mut config = Config::new()?;
    config.apply_cli(&args);
    config.validate()?;
    log::info!(
        "Starting {} for {} from {} source",
        env!("CARGO_PKG_NAME"),
        config.viewer,
        args.source
    );

    let tui = Box::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    );

    let mut runner = match args.source {
        SourceKind::Rest => {
            config.backend.validate()?;
            let api_key = SecretString::from(config.backend.api_key.expose_secret().to_owned());
            let source = RestLetterSource::new(config.backend.url.clone(), api_key)?;
            AppRunner::new(&config, source, tui)?
        }
        SourceKind::File => {
            // clap enforces --file with --source=file
            let path = args.file.clone().unwrap_or_default();
            let source = MemoryLetterSource::from_json_file(&path)?;
            AppRunner::new(&config, source, tui)?
        }
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
