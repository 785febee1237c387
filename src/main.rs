use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use payments_client::{
    shared::logging::LoggingUtils, AppConfig, AppError, Operation, PaymentsService, RuleRegistry,
    ValidationResult, Validator,
};
use serde_json::Value;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file name, without extension
    #[arg(long, default_value = "Payments")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rule set of one operation, or of every operation
    Rules {
        #[arg(long)]
        operation: Option<String>,
    },
    /// Validate request parameters without sending them
    Validate {
        operation: String,
        /// JSON parameters file; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Validate request parameters and send them to the payments service
    Send {
        operation: String,
        /// JSON parameters file; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match AppConfig::load_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(e) = LoggingUtils::initialize(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        return Ok(ExitCode::FAILURE);
    }

    info!("Configuration loaded successfully");

    match cli.command {
        Command::Rules { operation } => print_rules(operation.as_deref()),
        Command::Validate { operation, file } => {
            let params = read_params(file.as_ref())?;
            let result = Validator::new().validate(&operation, &params)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(match result {
                ValidationResult::Accepted(_) => ExitCode::SUCCESS,
                ValidationResult::Rejected(_) => ExitCode::from(2),
            })
        }
        Command::Send { operation, file } => {
            let operation: Operation = operation
                .parse()
                .map_err(|_| AppError::UnknownOperation { operation: operation.clone() })?;
            let params = read_params(file.as_ref())?;
            let service = PaymentsService::new(Arc::new(config))?;

            match service.execute(operation, params).await {
                Ok(response) => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    error!("Request failed: {}", e);
                    println!("{}", serde_json::to_string_pretty(&e.to_json())?);
                    Ok(if e.is_client_error() { ExitCode::from(2) } else { ExitCode::FAILURE })
                }
            }
        }
    }
}

fn print_rules(operation: Option<&str>) -> anyhow::Result<ExitCode> {
    let registry = RuleRegistry::global();
    let output = match operation {
        Some(name) => serde_json::to_value(registry.get_rules(name)?)?,
        None => {
            let mut all = serde_json::Map::new();
            for op in registry.operations() {
                all.insert(op.as_str().to_string(), serde_json::to_value(registry.rules_for(op)?)?);
            }
            Value::Object(all)
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

fn read_params(file: Option<&PathBuf>) -> anyhow::Result<Value> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read parameters from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Parameters are not valid JSON")
}
