//! Command-line front end for the prompt enhancer.
//!
//! ```bash
//! promptcrafter enhance "Create a modern website for a coffee shop" \
//!     --type design --tone friendly --constraint step-by-step --dev
//! ```

use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};

use promptcrafter::{
    Constraint, DetailLevel, EnhancerConfig, OutputType, PromptData, Session, Tone,
    session::SessionEntry,
};

#[derive(Parser)]
#[command(version, about = "Turn a rough idea into a structured AI prompt")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, env = "PROMPTCRAFTER_CONFIG")]
    config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Enhance an idea into a structured prompt
    Enhance {
        /// The idea to enhance
        idea: String,
        #[arg(long = "type", default_value = "general")]
        output_type: String,
        #[arg(long, default_value = "professional")]
        tone: String,
        #[arg(long, default_value = "medium")]
        detail: String,
        /// May be repeated
        #[arg(long = "constraint")]
        constraints: Vec<String>,
        /// Print the whole result as JSON
        #[arg(long)]
        json: bool,
        /// Also print tags, score, stats, debug info and preview
        #[arg(long)]
        dev: bool,
        /// Write the enhanced prompt to FILE, or to the configured export
        /// file name in the current directory when FILE is omitted
        #[arg(short, long, num_args = 0..=1, value_name = "FILE")]
        output: Option<Option<PathBuf>>,
        /// Override the simulated delay
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// List every option value
    Options,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EnhancerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EnhancerConfig::default(),
    }
    .with_env_overrides();

    let (level, configured_ok) = resolve_level(cli.verbose, &config.log_level);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    if !configured_ok {
        warn!("ignoring unknown log level {:?}, using info", config.log_level);
    }
    info!("promptcrafter v{}", env!("CARGO_PKG_VERSION"));

    match cli.cmd {
        Cmd::Options => print!("{}", options_listing()),
        Cmd::Enhance {
            idea,
            output_type,
            tone,
            detail,
            constraints,
            json,
            dev,
            output,
            delay_ms,
        } => {
            if let Some(ms) = delay_ms {
                config.simulated_delay_ms = ms;
            }

            let mut session = Session::with_config(config);
            session.data = build_prompt_data(idea, &output_type, &tone, &detail, &constraints)?;
            if dev {
                session.toggle_dev_view();
            }
            let dev_view = session.dev_view();

            let Some(entry) = session.enhance().await? else {
                bail!("nothing to enhance: the idea is empty");
            };

            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                print_entry(entry, dev_view)?;
            }

            match output {
                Some(Some(path)) => session.export(&path)?,
                Some(None) => {
                    session.export_to_dir(".")?;
                }
                None => {}
            }
        }
    }

    Ok(())
}

/// Picks the subscriber level. The flag is false when the configured level
/// could not be parsed.
fn resolve_level(verbose: bool, configured: &str) -> (Level, bool) {
    match Level::from_str(configured.trim()) {
        Ok(_) if verbose => (Level::DEBUG, true),
        Ok(level) => (level, true),
        Err(_) if verbose => (Level::DEBUG, false),
        Err(_) => (Level::INFO, false),
    }
}

/// Maps the raw `enhance` flags onto a selection. Repeated constraints are
/// kept once.
fn build_prompt_data(
    idea: String,
    output_type: &str,
    tone: &str,
    detail: &str,
    constraints: &[String],
) -> anyhow::Result<PromptData> {
    let mut data = PromptData::new(idea)
        .with_output_type(output_type.parse::<OutputType>()?)
        .with_tone(tone.parse::<Tone>()?)
        .with_detail(detail.parse::<DetailLevel>()?);
    for raw in constraints {
        data = data.with_constraint(raw.parse::<Constraint>()?);
    }
    Ok(data)
}

fn print_entry(entry: &SessionEntry, dev_view: bool) -> anyhow::Result<()> {
    let result = &entry.result;
    println!("{}", result.content);

    if dev_view {
        println!();
        println!("Tags:    {}", result.tags.join(", "));
        println!("Score:   {}%", result.score);
        println!(
            "Stats:   {} words, {} characters",
            result.word_count(),
            result.char_count()
        );
        println!("Debug:\n{}", serde_json::to_string_pretty(&result.debug_info)?);
        if let Some(preview) = &result.preview_output {
            println!("Preview: {}", preview);
        }
    }

    Ok(())
}

fn options_listing() -> String {
    let mut out = String::from("Output types:\n");
    for opt in OutputType::ALL {
        out.push_str(&format!("  {:<16} {}\n", opt.as_str(), opt.label()));
    }
    out.push_str("Tones:\n");
    for opt in Tone::ALL {
        out.push_str(&format!("  {:<16} {}\n", opt.as_str(), opt.label()));
    }
    out.push_str("Detail levels:\n");
    for opt in DetailLevel::ALL {
        out.push_str(&format!("  {:<16} {}\n", opt.as_str(), opt.label()));
    }
    out.push_str("Constraints:\n");
    for opt in Constraint::ALL {
        out.push_str(&format!("  {:<16} {}\n", opt.as_str(), opt.label()));
    }
    out
}
