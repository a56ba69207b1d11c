use clap::Parser;
use feedback_flow::core::BuildMode;
use feedback_flow::core::config::{self, CliOverrides, FlowConfig};
use feedback_flow::host;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedback-flow", about = "Walk through the in-app feedback wizard")]
struct Args {
    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Build mode seen by the ratings gate
    #[arg(short, long, value_enum)]
    build: Option<BuildMode>,

    /// Log submissions instead of sending them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to feedback-flow.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("feedback-flow.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        FlowConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            build_mode: args.build,
            dry_run: args.dry_run,
        },
    );
    log::info!("feedback-flow starting with {:?}", resolved);

    let mut out = std::io::stdout().lock();
    let result = match args.script {
        Some(path) => host::run(&resolved, BufReader::new(File::open(path)?), &mut out).await,
        None => host::run(&resolved, std::io::stdin().lock(), &mut out).await,
    };

    match result {
        Ok(Some(signal)) => {
            log::info!("Flow finished, submitted: {}", signal.submitted);
            Ok(())
        }
        Ok(None) => {
            eprintln!("Input ended before the feedback flow finished.");
            Ok(())
        }
        Err(e) => Err(std::io::Error::other(e.to_string())),
    }
}
