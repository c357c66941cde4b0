use clap::Parser;
use std::io::Write;
use zipgeo::utils::{logger, validation::Validate};
use zipgeo::{Cli, Command, EtlEngine, SqliteStore, TracingDiagnostics, ZipPipeline};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose);
    tracing::info!("starting zipgeo");

    match cli.command {
        Command::Build(config) => {
            if let Err(e) = config.validate() {
                tracing::error!("configuration validation failed: {}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }

            let store = SqliteStore::open(&config.database_file)?;
            let pipeline = ZipPipeline::new(config, store, TracingDiagnostics);
            let engine = EtlEngine::new(pipeline);

            match engine.run() {
                Ok(summary) => {
                    println!("Loaded {} records into the database", summary.written);
                    if !summary.failed.is_empty() {
                        println!(
                            "{} records failed to load; see the log for details",
                            summary.failed.len()
                        );
                    }
                }
                Err(e) => {
                    tracing::error!("run aborted: {}", e);
                    eprintln!("run aborted: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Emit(config) => {
            if let Err(e) = config.validate() {
                tracing::error!("configuration validation failed: {}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }

            let mut stdout = std::io::stdout().lock();
            match zipgeo::emit_dataset(&config.input_file, &mut stdout, &TracingDiagnostics) {
                Ok(emitted) => {
                    stdout.flush()?;
                    tracing::info!("emitted {} entries", emitted);
                }
                Err(e) => {
                    tracing::error!("run aborted: {}", e);
                    eprintln!("run aborted: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
