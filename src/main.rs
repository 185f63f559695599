use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use senses_score::logging::init_tracing;
use senses_score::model::thresholds::{DEFAULT_Z_THRESHOLD, ScoringConfig};
use senses_score::pipeline::senses::score_senses_str;
use senses_score::report::json::{render_detailed_json, render_summary_json};
use senses_score::report::text::render_report_text;

#[derive(Debug, Parser)]
#[command(name = "senses-score", version, about = "SENSES quality scoring from user ratings")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one ratings bundle given as a JSON object.
    Score(ScoreArgs),
}

#[derive(Debug, clap::Args)]
struct ScoreArgs {
    /// Ratings JSON file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: PathBuf,

    #[arg(long, default_value_t = DEFAULT_Z_THRESHOLD, allow_negative_numbers = true)]
    z_threshold: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Summary JSON on the first line, composite on the second.
    Summary,
    Detailed,
    Text,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("failed to initialize logging: {err}");
        std::process::exit(1);
    }
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Score(args) => run_score(&args),
    }
}

fn run_score(args: &ScoreArgs) -> Result<(), String> {
    let raw = read_input(&args.input)?;
    let rendered = score_to_string(&raw, args.z_threshold, args.format)?;
    match &args.out {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn score_to_string(raw: &str, z_threshold: f64, format: OutputFormat) -> Result<String, String> {
    let output = score_senses_str(raw, z_threshold).map_err(|e| e.to_string())?;
    let config = ScoringConfig { z_threshold };

    let rendered = match format {
        OutputFormat::Summary => {
            let summary = render_summary_json(&output.summary()).map_err(|e| e.to_string())?;
            format!("{summary}\n{}\n", output.composite)
        }
        OutputFormat::Detailed => {
            let mut json = render_detailed_json(&output, &config).map_err(|e| e.to_string())?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_report_text(&output, &config),
    };
    Ok(rendered)
}

fn read_input(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
