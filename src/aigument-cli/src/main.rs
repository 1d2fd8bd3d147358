//! AIGUMENT CLI - Templated Debate Tool
//!
//! A command-line front end for composing mock debate transcripts between a
//! host and two guests.

use aigument_core::render::{self, ExportFormat};
use aigument_core::{
    Cast, Composer, Config, DebateOptions, Guest, Host, InputConfig, SessionState, Speaker,
    Transcript, available_perspectives, default_cast, topics,
};
use clap::{ArgAction, Parser};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aigument",
    version,
    about = "AIGUMENT - Where historical and modern minds collide",
    long_about = "A CLI tool for composing templated debate transcripts from a topic, a host and two guests."
)]
struct Cli {
    /// The topic to debate
    #[arg(value_name = "TOPIC")]
    topic: Option<String>,

    /// Pick a random sample topic instead of TOPIC
    #[arg(long)]
    random_topic: bool,

    /// Debate perspective (historical, modern, mixed)
    #[arg(short, long, value_name = "PERSPECTIVE")]
    perspective: Option<String>,

    /// Host name
    #[arg(long, value_name = "NAME")]
    host_name: Option<String>,

    /// Host moderation style
    #[arg(long, value_name = "STYLE")]
    host_style: Option<String>,

    /// Guest names (specify exactly twice, or not at all for the preset cast)
    #[arg(short, long, action = ArgAction::Append, value_name = "NAME")]
    guest: Vec<String>,

    /// Guest companies (optional, same order as guests)
    #[arg(long, action = ArgAction::Append, value_name = "COMPANY")]
    company: Vec<String>,

    /// Guest characteristics (optional, same order as guests)
    #[arg(long = "trait", action = ArgAction::Append, value_name = "TRAIT")]
    characteristic: Vec<String>,

    /// Requested debate length (3-15)
    #[arg(short, long, value_name = "LENGTH")]
    length: Option<u8>,

    /// Enhanced generation
    #[arg(long)]
    enhanced: bool,

    /// Audio generation (not implemented)
    #[arg(long)]
    audio: bool,

    /// Advanced mode
    #[arg(long)]
    advanced: bool,

    /// TOML config file (defaults to $AIGUMENT_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file (defaults to a name derived from the topic)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: String,

    /// Print the transcript without writing a file
    #[arg(long)]
    no_save: bool,

    /// List the available perspectives and exit
    #[arg(long)]
    list_perspectives: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_perspectives {
        for name in available_perspectives() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config_path = cli
        .config
        .clone()
        .or_else(|| env::var("AIGUMENT_CONFIG").ok().map(PathBuf::from));
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => aigument_core::default_config(),
    };
    let composer = Composer::new(config.template_library()?);
    tracing::debug!(
        config = ?config_path,
        perspectives = ?composer.library().perspectives(),
        "template library ready"
    );

    let topic = match (&cli.topic, cli.random_topic) {
        (_, true) => {
            let topic = topics::random_topic(&mut rand::thread_rng()).to_string();
            println!("{} {}", "Random topic:".bold(), topic.bright_white());
            topic
        }
        (Some(topic), false) if !topic.trim().is_empty() => topic.clone(),
        _ => {
            eprintln!(
                "{} Enter a debate topic or pass --random-topic.",
                "Error:".red().bold()
            );
            std::process::exit(1);
        }
    };

    if !cli.guest.is_empty() && cli.guest.len() != 2 {
        eprintln!(
            "{} A debate needs exactly 2 guests, but {} were provided.",
            "Error:".red().bold(),
            cli.guest.len()
        );
        eprintln!("Usage: aigument \"{}\" -g \"Guest One\" -g \"Guest Two\"", topic);
        std::process::exit(1);
    }

    let perspective_raw = cli
        .perspective
        .clone()
        .unwrap_or_else(|| config.defaults.perspective.clone());
    let perspective = match composer.resolve_perspective(&perspective_raw) {
        Ok(perspective) => perspective,
        Err(e) => {
            eprintln!(
                "{} {}. Available perspectives: {}",
                "Error:".red().bold(),
                e,
                available_perspectives().join(", ")
            );
            std::process::exit(1);
        }
    };

    let cast = default_cast(perspective);
    let host = Host::new(
        cli.host_name
            .clone()
            .unwrap_or_else(|| config.defaults.host_name.clone()),
        cli.host_style
            .clone()
            .unwrap_or_else(|| config.defaults.host_style.clone()),
    );

    let (guests, warnings) = build_guests(&cli, &cast);
    for warning in warnings {
        eprintln!("{}", format!("Warning: {}", warning).yellow());
    }

    let options = DebateOptions {
        enhanced: cli.enhanced,
        audio: cli.audio,
        length: cli.length.unwrap_or(config.defaults.length),
        advanced: cli.advanced,
    };
    if options.audio {
        eprintln!(
            "{}",
            "Warning: audio generation is not implemented; producing text only.".yellow()
        );
    }

    let input = InputConfig::new(topic, perspective_raw, host, guests).with_options(options);

    let format: ExportFormat = cli.format.parse()?;
    let mut session = SessionState::new();
    let transcript = match session.generate(&composer, &input) {
        Ok(transcript) => transcript,
        Err(e) if e.is_validation() => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    print_transcript(transcript);

    if !cli.no_save {
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output(&transcript.topic, format));
        render::save(transcript, &path, format)?;
        println!(
            "\n{} Transcript saved to: {}",
            "✓".green().bold(),
            path.display().to_string().bright_cyan()
        );
    }

    Ok(())
}

/// Fill the guest pair from the command line.
///
/// Names come from `--guest`, or from the preset cast when none are given.
/// `--company` and `--trait` apply by position in both cases. Returns the
/// guests and a warning for every value that had no guest to apply to.
fn build_guests(cli: &Cli, cast: &Cast) -> (Vec<Guest>, Vec<String>) {
    let names: Vec<String> = if cli.guest.is_empty() {
        cast.guests.iter().map(|g| g.name.clone()).collect()
    } else {
        cli.guest.clone()
    };

    let guests = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let preset = &cast.guests[i % cast.guests.len()];
            let characteristic = cli
                .characteristic
                .get(i)
                .cloned()
                .unwrap_or_else(|| preset.characteristic.clone());
            let company = match cli.company.get(i) {
                Some(company) => company.clone(),
                None if cli.guest.is_empty() => preset.company.clone(),
                None => String::new(),
            };
            Guest::new(name, characteristic).with_company(company)
        })
        .collect::<Vec<_>>();

    let mut warnings = Vec::new();
    for (flag, values) in [("--company", &cli.company), ("--trait", &cli.characteristic)] {
        for extra in values.iter().skip(guests.len()) {
            warnings.push(format!(
                "ignoring {} \"{}\": only {} guests are in the debate",
                flag,
                extra,
                guests.len()
            ));
        }
    }

    (guests, warnings)
}

/// Topic-derived filename with the extension swapped for non-text formats.
fn default_output(topic: &str, format: ExportFormat) -> PathBuf {
    let path = PathBuf::from(aigument_core::download_filename(topic));
    match format {
        ExportFormat::Text => path,
        other => path.with_extension(other.extension()),
    }
}

/// Print a transcript to the console.
fn print_transcript(transcript: &Transcript) {
    println!();
    println!("{}", "═".repeat(70).bright_blue());
    println!(
        "{}",
        format!("  {} - {} Debate", "AIGUMENT".bold(), transcript.perspective)
            .bright_blue()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_blue());
    println!();
    println!("{} {}", "Topic:".bold(), transcript.topic.bright_white());
    println!();
    println!("{}", "Participants:".bold());
    println!(
        "  {} {} - {}",
        "Host:".yellow(),
        transcript.host.name.bright_cyan(),
        transcript.host.style.dimmed()
    );
    for (i, guest) in transcript.guests.iter().enumerate() {
        println!(
            "  {} {} - {}",
            format!("Guest {}:", i + 1).yellow(),
            guest.name.bright_cyan(),
            guest.stance.dimmed()
        );
    }
    println!();
    println!("{}", "─".repeat(70).dimmed());
    println!();

    for turn in &transcript.turns {
        let name = transcript.speaker_name(turn.speaker);
        let label = match turn.speaker {
            Speaker::Host => name.bright_magenta().bold(),
            _ => name.bright_cyan().bold(),
        };
        println!(
            "{} {} {}",
            "▶".bright_cyan(),
            label,
            format!("({})", turn.speaker.display_name()).yellow()
        );
        for line in textwrap(&turn.text, 66).lines() {
            println!("  {}", line);
        }
        println!();
    }

    println!("{}", "═".repeat(70).bright_blue());
    println!("{}", "  Debate generated successfully!".bright_green().bold());
    println!("{}", "═".repeat(70).bright_blue());
}

/// Simple text wrapping function.
fn textwrap(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_line_len = 0;

    for word in text.split_whitespace() {
        if current_line_len + word.len() + 1 > width && current_line_len > 0 {
            result.push('\n');
            current_line_len = 0;
        }
        if current_line_len > 0 {
            result.push(' ');
            current_line_len += 1;
        }
        result.push_str(word);
        current_line_len += word.len();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use aigument_core::{DebateError, Perspective};

    #[test]
    fn test_textwrap_width() {
        let wrapped = textwrap("one two three four five six", 10);
        assert!(wrapped.lines().all(|l| l.len() <= 10));
        assert_eq!(wrapped.split_whitespace().count(), 6);
    }

    #[test]
    fn test_default_output_extension() {
        assert_eq!(
            default_output("Free Trade", ExportFormat::Text),
            PathBuf::from("free_trade_debate.txt")
        );
        assert_eq!(
            default_output("Free Trade", ExportFormat::Json),
            PathBuf::from("free_trade_debate.json")
        );
    }

    #[test]
    fn test_cli_parses_guests() {
        let cli = Cli::try_parse_from([
            "aigument",
            "Free trade",
            "-g",
            "Ada",
            "-g",
            "Ben",
            "--trait",
            "Bold",
            "--no-save",
        ])
        .unwrap();
        assert_eq!(cli.guest, vec!["Ada", "Ben"]);
        assert_eq!(cli.characteristic, vec!["Bold"]);
        assert!(cli.no_save);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_traits_and_companies_apply_to_preset_cast() {
        let cli = Cli::try_parse_from([
            "aigument",
            "Free trade",
            "--trait",
            "Cautious",
            "--company",
            "Trade Council",
        ])
        .unwrap();
        let cast = default_cast(Perspective::Modern);
        let (guests, warnings) = build_guests(&cli, &cast);

        assert!(warnings.is_empty());
        assert_eq!(guests[0].name, "Alex Progressive");
        assert_eq!(guests[0].characteristic, "Cautious");
        assert_eq!(guests[0].company, "Trade Council");
        assert_eq!(guests[1].name, "Jordan Innovation");
        assert_eq!(guests[1].characteristic, "Bold");
    }

    #[test]
    fn test_preset_cast_keeps_its_companies() {
        let cli = Cli::try_parse_from(["aigument", "Free trade"]).unwrap();
        let cast = default_cast(Perspective::Historical);
        let (guests, _) = build_guests(&cli, &cast);
        assert_eq!(guests, cast.guests_vec());
    }

    #[test]
    fn test_extra_traits_and_companies_warn() {
        let cli = Cli::try_parse_from([
            "aigument", "Free trade", "-g", "Ada", "-g", "Ben", "--trait", "A", "--trait", "B",
            "--trait", "C", "--company", "X", "--company", "Y", "--company", "Z",
        ])
        .unwrap();
        let cast = default_cast(Perspective::Modern);
        let (guests, warnings) = build_guests(&cli, &cast);

        assert_eq!(guests.len(), 2);
        assert_eq!(guests[1].characteristic, "B");
        assert_eq!(guests[1].company, "Y");
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("--company \"Z\""));
        assert!(warnings[1].contains("--trait \"C\""));
    }

    #[test]
    fn test_validation_error_kinds() {
        assert!(DebateError::EmptyTopic.is_validation());
        assert!(!DebateError::ConfigError("x".into()).is_validation());
    }
}
