//! Transcript rendering and download export.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::error::DebateError;
use crate::participant::INDEPENDENT_COMPANY;
use crate::transcript::Transcript;

pub const DOWNLOAD_SUFFIX: &str = "_debate.txt";

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Alphabetic}\p{N}_\-]").expect("filename pattern is valid")
});

/// Export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Text => "text",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = DebateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            other => Err(DebateError::ConfigError(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// Download filename for a topic: lower-cased, whitespace runs replaced by
/// `_`, anything but letters, digits, `_` and `-` dropped. Non-ASCII letters
/// are kept.
pub fn download_filename(topic: &str) -> String {
    let lowered = topic.trim().to_lowercase();
    let joined = lowered.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");
    if stem.is_empty() {
        format!("debate{}", DOWNLOAD_SUFFIX)
    } else {
        format!("{}{}", stem, DOWNLOAD_SUFFIX)
    }
}

/// Plain-text layout used for the download.
pub fn render_text(transcript: &Transcript) -> String {
    let mut content = String::new();

    content.push_str("AIGUMENT DEBATE TRANSCRIPT\n");
    content.push_str(&format!("Topic: {}\n", transcript.topic));
    content.push_str(&format!("Perspective: {}\n", transcript.perspective));
    content.push_str(&format!(
        "Host: {} ({})\n",
        transcript.host.name, transcript.host.style
    ));
    for (i, guest) in transcript.guests.iter().enumerate() {
        content.push_str(&format!(
            "Guest {}: {} ({}) - {}\n",
            i + 1,
            guest.name,
            company_label(&guest.company),
            guest.stance
        ));
    }
    content.push('\n');

    let lines: Vec<String> = transcript
        .turns
        .iter()
        .map(|turn| format!("{}: {}", transcript.speaker_name(turn.speaker), turn.text))
        .collect();
    content.push_str(&lines.join("\n\n"));
    content.push('\n');

    content
}

/// Markdown export.
pub fn render_markdown(transcript: &Transcript) -> String {
    let mut content = String::new();

    content.push_str(&format!("# AIGUMENT: {}\n\n", transcript.topic));
    content.push_str(&format!("**Perspective**: {}\n\n", transcript.perspective));

    content.push_str("## Participants\n\n");
    content.push_str(&format!(
        "- **Host**: {} ({})\n",
        transcript.host.name, transcript.host.style
    ));
    for (i, guest) in transcript.guests.iter().enumerate() {
        content.push_str(&format!(
            "- **Guest {}**: {}, {} ({})\n",
            i + 1,
            guest.name,
            guest.stance,
            company_label(&guest.company)
        ));
    }
    content.push('\n');

    content.push_str("## Transcript\n\n");
    for turn in &transcript.turns {
        content.push_str(&format!(
            "**{}**: {}\n\n",
            transcript.speaker_name(turn.speaker),
            turn.text
        ));
    }

    content
}

/// Pretty-printed JSON export.
pub fn to_json(transcript: &Transcript) -> Result<String, DebateError> {
    Ok(serde_json::to_string_pretty(transcript)?)
}

/// Render in `format`.
pub fn render(transcript: &Transcript, format: ExportFormat) -> Result<String, DebateError> {
    match format {
        ExportFormat::Text => Ok(render_text(transcript)),
        ExportFormat::Markdown => Ok(render_markdown(transcript)),
        ExportFormat::Json => to_json(transcript),
    }
}

/// Write the transcript to `path`.
pub fn save(transcript: &Transcript, path: &Path, format: ExportFormat) -> Result<(), DebateError> {
    let content = render(transcript, format)?;
    fs::write(path, content)?;
    info!(path = %path.display(), format = %format, "transcript saved");
    Ok(())
}

fn company_label(company: &str) -> &str {
    let company = company.trim();
    if company.is_empty() {
        INDEPENDENT_COMPANY
    } else {
        company
    }
}
