use clap::Parser;
use log::{info, warn};
use paneboard::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paneboard", about = "Terminal dashboard for dispatching commands and watching output")]
struct Args {
    /// Config file (default: ~/.paneboard/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address of the command channel (host:port)
    #[arg(long)]
    write_addr: Option<String>,

    /// Address of the event channel (host:port)
    #[arg(long)]
    read_addr: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are printed before the terminal is taken over, and
    // logged once the logger exists.
    let (file_config, config_outcome) = match config::load_config(args.config.as_deref()) {
        Ok((c, source)) => (c, Ok(source)),
        Err(e) => {
            eprintln!("paneboard: {e}; using defaults");
            (config::PaneboardConfig::default(), Err(e))
        }
    };
    let cli = CliOverrides {
        write_addr: args.write_addr,
        read_addr: args.read_addr,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    match &config_outcome {
        Ok(source) => info!("Config: {}", source),
        Err(e) => warn!("Config: {}; using defaults", e),
    }
    info!(
        "Paneboard starting: write={} read={} panes={}",
        resolved.write_addr,
        resolved.read_addr,
        resolved.panes.len()
    );

    paneboard::tui::run(resolved)
}
