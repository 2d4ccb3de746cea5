//! shoplens CLI
//!
//! Command-line front end for the analytics dashboard:
//! - Render a tab
//! - Run an interactive session
//! - Export datasets
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shoplens::config::{generate_default_config, Config, LoggingConfig};
use shoplens::session::HELP;
use shoplens::{
    export, Command, DataGenerator, Dataset, ExportFormat, GeneratorConfig, Outcome, RegionFilter,
    Session, Tab,
};

#[derive(Parser)]
#[command(name = "shoplens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "E-commerce analytics dashboard over simulated data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one tab of the dashboard
    Show {
        /// Tab to show (overview, sales, customers, churn)
        #[arg(short, long)]
        tab: Option<Tab>,
        /// Region filter (All, North, South, East, West)
        #[arg(short, long)]
        region: Option<RegionFilter>,
        /// Seed for the mock data generator
        #[arg(long)]
        seed: Option<u64>,
        /// Disable ANSI colours
        #[arg(long)]
        no_color: bool,
    },

    /// Start an interactive session
    Session {
        /// Seed for the mock data generator
        #[arg(long)]
        seed: Option<u64>,
        /// Disable ANSI colours
        #[arg(long)]
        no_color: bool,
    },

    /// Export a dataset
    Export {
        /// Dataset (monthly, categories, regions, segments, churn, products, all)
        #[arg(short, long, default_value = "all")]
        dataset: Dataset,
        /// Output format (json, ndjson, csv)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
        /// Seed for the mock data generator
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Cannot load config {:?}", path))?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Show {
            tab,
            region,
            seed,
            no_color,
        } => {
            if seed.is_some() {
                config.dashboard.seed = seed;
            }
            if no_color {
                config.display.color = false;
            }
            config.dashboard.select(tab, region);

            let options = config
                .display
                .render_options_for(std::io::stdout().is_terminal());
            let session = Session::start(&config.dashboard, options)
                .context("Invalid dashboard defaults in config")?;

            print!("{}", session.render());
        }

        Commands::Session { seed, no_color } => {
            if seed.is_some() {
                config.dashboard.seed = seed;
            }
            if no_color {
                config.display.color = false;
            }

            let options = config
                .display
                .render_options_for(std::io::stdout().is_terminal());
            let session = Session::start(&config.dashboard, options)
                .context("Invalid dashboard defaults in config")?;
            run_session(session).await?;
        }

        Commands::Export {
            dataset,
            format,
            seed,
            output,
        } => {
            let seed = seed.or(config.dashboard.seed);
            let bundle = DataGenerator::new(GeneratorConfig { seed }).generate();
            let body = export(&bundle, dataset, format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &body)
                        .with_context(|| format!("Cannot write {:?}", path))?;
                    eprintln!("Exported {} to {:?}", dataset.name(), path);
                }
                None => {
                    print!("{}", body);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

/// Read commands from stdin until quit, end of input or Ctrl-C
async fn run_session(mut session: Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("{}", session.render());
    println!("{}", HELP);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    session.apply(Command::Quit);
                    break;
                };

                match session.apply(Command::parse(&line)) {
                    Outcome::Render(out) => print!("{}", out),
                    Outcome::Message(msg) if msg.is_empty() => {}
                    Outcome::Message(msg) => println!("{}", msg),
                    Outcome::Quit => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                session.apply(Command::Quit);
                break;
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("shoplens={}", config.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
