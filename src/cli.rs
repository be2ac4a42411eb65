//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::codec_for;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config::TradebookConfig;
use crate::domain::error::TradebookError;
use crate::domain::format::TradeFormat;
use crate::domain::trade_record::TradeRecord;

#[derive(Parser, Debug)]
#[command(name = "tradebook", about = "Trade history validation and conversion")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that every record in a trade history file is valid
    Validate {
        #[arg(short, long)]
        input: PathBuf,
        /// Inferred from the extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<TradeFormat>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Convert a trade history file between json and csv
    Convert {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, value_enum)]
        from: Option<TradeFormat>,
        #[arg(long, value_enum)]
        to: Option<TradeFormat>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print one line per trade
    Show {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<TradeFormat>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn execute(cli: Cli) -> Result<(), TradebookError> {
    match cli.command {
        Command::Validate {
            input,
            format,
            config,
        } => load_config(config.as_ref()).and_then(|cfg| {
            init_logging(cfg.log_level);
            run_validate(&input, format)
        }),
        Command::Convert {
            input,
            output,
            from,
            to,
            config,
        } => load_config(config.as_ref()).and_then(|cfg| {
            init_logging(cfg.log_level);
            run_convert(&input, &output, from, to, &cfg)
        }),
        Command::Show {
            input,
            format,
            config,
        } => load_config(config.as_ref()).and_then(|cfg| {
            init_logging(cfg.log_level);
            run_show(&input, format)
        }),
    }
}

/// `RUST_LOG` overrides the configured level. Repeated calls are no-ops.
fn init_logging(level: LevelFilter) {
    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    let _ = builder.try_init();
}

pub fn load_config(path: Option<&PathBuf>) -> Result<TradebookConfig, TradebookError> {
    match path {
        Some(path) => {
            let adapter = FileConfigAdapter::from_file(path)?;
            TradebookConfig::from_port(&adapter)
        }
        None => Ok(TradebookConfig::default()),
    }
}

/// Explicit format first, then the file extension.
pub fn resolve_input_format(
    path: &Path,
    explicit: Option<TradeFormat>,
) -> Result<TradeFormat, TradebookError> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    TradeFormat::from_path(path).ok_or_else(|| TradebookError::UnknownFormat {
        name: path.display().to_string(),
    })
}

/// Explicit format first, then the file extension, then `[output] format`.
pub fn resolve_output_format(
    path: &Path,
    explicit: Option<TradeFormat>,
    config: &TradebookConfig,
) -> TradeFormat {
    explicit
        .or_else(|| TradeFormat::from_path(path))
        .unwrap_or(config.output_format)
}

pub fn read_trades(path: &Path, format: TradeFormat) -> Result<Vec<TradeRecord>, TradebookError> {
    info!("reading {} trades from {}", format, path.display());
    let content = fs::read_to_string(path)?;
    codec_for(format, false).decode(&content)
}

pub fn write_trades(
    path: &Path,
    trades: &[TradeRecord],
    format: TradeFormat,
    config: &TradebookConfig,
) -> Result<(), TradebookError> {
    info!("writing {} {} trades to {}", trades.len(), format, path.display());
    let encoded = codec_for(format, config.pretty).encode(trades)?;
    fs::write(path, encoded)?;
    Ok(())
}

fn run_validate(input: &Path, format: Option<TradeFormat>) -> Result<(), TradebookError> {
    let format = resolve_input_format(input, format)?;
    let trades = read_trades(input, format)?;
    println!("{} trade records OK", trades.len());
    Ok(())
}

fn run_convert(
    input: &Path,
    output: &Path,
    from: Option<TradeFormat>,
    to: Option<TradeFormat>,
    config: &TradebookConfig,
) -> Result<(), TradebookError> {
    let from = resolve_input_format(input, from)?;
    let to = resolve_output_format(output, to, config);
    let trades = read_trades(input, from)?;
    write_trades(output, &trades, to, config)?;
    eprintln!(
        "Converted {} trade records from {} to {}",
        trades.len(),
        from,
        to
    );
    Ok(())
}

/// Lines printed by `show`, one per trade in file order.
pub fn show_lines(input: &Path, format: Option<TradeFormat>) -> Result<Vec<String>, TradebookError> {
    let format = resolve_input_format(input, format)?;
    Ok(read_trades(input, format)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

fn run_show(input: &Path, format: Option<TradeFormat>) -> Result<(), TradebookError> {
    for line in show_lines(input, format)? {
        println!("{line}");
    }
    Ok(())
}
