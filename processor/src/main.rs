//! Ticker Lists CLI
//!
//! ```bash
//! ticker-lists                      # WIKI-datasets-codes.csv → 3 JSON lists in .
//! ticker-lists --legacy-strip       # Strip leading W/I/K// characters instead of the prefix
//! ticker-lists inspect -o out.json  # Dump cleaned, sorted records (no lists written)
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use ticker_lists::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, INPUT_ENV, OUTPUT_DIR_ENV};
use ticker_lists::logs::{self, log_error, log_info, log_success};
use ticker_lists::{load, prepare, run, PipelineOptions, StripMode};

#[derive(Parser)]
#[command(name = "ticker-lists")]
#[command(about = "Build ticker autocomplete lists from the WIKI metadata CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Metadata CSV
    #[arg(short, long, global = true, env = INPUT_ENV, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory for the three JSON lists
    #[arg(short = 'd', long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Strip every leading W, I, K and / instead of the exact "WIKI/" prefix
    #[arg(long, global = true)]
    legacy_strip: bool,

    /// Pretty-print the JSON lists
    #[arg(long)]
    pretty: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cleaned, sorted records as JSON
    Inspect {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logs::set_quiet(cli.quiet);

    let strip_mode = if cli.legacy_strip {
        StripMode::CharacterSet
    } else {
        StripMode::Exact
    };

    let result = match cli.command {
        None => cmd_run(PipelineOptions {
            input: cli.input,
            output_dir: cli.output_dir,
            strip_mode,
            pretty: cli.pretty,
        }),
        Some(Commands::Inspect { output }) => cmd_inspect(&cli.input, strip_mode, output.as_deref()),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_run(options: PipelineOptions) -> Result<(), Box<dyn std::error::Error>> {
    let report = run(&options)?;
    log_success(format!(
        "✨ Done: {} of {} rows kept",
        report.stats.entries_per_view, report.stats.rows_read
    ));
    Ok(())
}

fn cmd_inspect(
    input: &Path,
    strip_mode: StripMode,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("📄 Inspecting: {}", input.display()));

    let parsed = load(input)?;
    let (records, stats) = prepare(&parsed.records, strip_mode);
    log_success(format!("{} of {} rows kept", stats.entries_per_view, stats.rows_read));

    let json = serde_json::to_string_pretty(&records)?;
    write_output(&json, output)
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log_success(format!("💾 Output written to: {}", p.display()));
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
