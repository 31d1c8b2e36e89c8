mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orm_demos::{Config, Demo, DemoContext, SchemaOptions};
use std::path::PathBuf;

/// Run the ORM demos against a database
#[derive(Debug, Parser)]
#[command(name = "orm-demos", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Connection string, overriding the configuration
    #[arg(long, value_name = "DSN")]
    dsn: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available demos
    List,
    /// Run the named demos in order, or all of them
    Run {
        #[arg(value_name = "DEMO")]
        demos: Vec<Demo>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dsn) = cli.dsn {
        config.database.dsn = dsn;
    }
    logging::init(&config.logging)?;

    match cli.command {
        Command::List => {
            for demo in Demo::all() {
                println!("{:<16} {}", demo.name(), demo.description());
            }
        }
        Command::Run { demos } => {
            let selected = if demos.is_empty() {
                Demo::all().to_vec()
            } else {
                demos
            };

            let db = orm_demos::connect(&config.database).await?;
            let schema = SchemaOptions {
                charset: config.database.charset.clone(),
            };
            let ctx = DemoContext::new(db, config.demos.clone(), schema);

            for demo in selected {
                let report = demo
                    .run(&ctx)
                    .await
                    .with_context(|| format!("demo '{}' failed", demo))?;
                println!("{}: {}", demo, report);
            }
        }
    }

    Ok(())
}
