//! Terminal front end: topic prompt and output rendering.
//!
//! Rendering functions take any `io::Write` so they can be exercised without a terminal.

use crate::article::Article;
use crate::pipeline::{CycleError, Outcome, Pipeline};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, Write};

const DIVIDER: &str = "────────────────────────────────────────";

lazy_static! {
    // CSI sequences (ESC [ ... cmd) and OSC sequences (ESC ] ... BEL)
    static ref ANSI: Regex =
        Regex::new(r"\x1B\[[0-9;?]*[ -/]*[@-~]|\x1B\][^\x07]*\x07").expect("valid regex");
}

/// What the user asked for in one turn of the prompt loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAction {
    pub topic: String,
    /// False when the user backed out at the confirmation step
    pub triggered: bool,
}

/// Ask for a topic, then for confirmation to run. Empty input is allowed through.
/// Returns `None` once input has ended.
pub fn collect_action() -> anyhow::Result<Option<UserAction>> {
    let topic: String = match Input::new()
        .with_prompt("Enter a trending topic (e.g. Elon Musk, AI, Elections)")
        .allow_empty(true)
        .interact_text()
    {
        Ok(topic) => topic,
        Err(e) if is_end_of_input(&e) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let triggered = match Confirm::new()
        .with_prompt("Summon the summary?")
        .default(true)
        .interact()
    {
        Ok(triggered) => triggered,
        Err(e) if is_end_of_input(&e) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(UserAction { topic, triggered }))
}

/// Ask whether to run another cycle. End of input counts as no.
pub fn ask_continue() -> anyhow::Result<bool> {
    match Confirm::new()
        .with_prompt("Search another topic?")
        .default(true)
        .interact()
    {
        Ok(again) => Ok(again),
        Err(e) if is_end_of_input(&e) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// True when a prompt failed because stdin was closed
pub fn is_end_of_input(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// Run a cycle for `action` if the user triggered it; a declined action does nothing
pub async fn run_action(pipeline: &Pipeline, action: &UserAction) -> Option<Outcome> {
    if !action.triggered {
        tracing::debug!("action not triggered, skipping cycle");
        return None;
    }
    Some(pipeline.run(&action.topic).await)
}

/// Strip escape sequences and control characters from API text, one line per value
pub fn sanitize_line(s: &str) -> String {
    let no_ansi = ANSI.replace_all(s, "");
    let cleaned: String = no_ansi
        .chars()
        .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();
    cleaned.trim().to_string()
}

pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "GrokNews - the AI research assistant".bold().cyan())?;
    writeln!(
        out,
        "{}",
        "Factual summaries from the latest news, with a bit of attitude.".dimmed()
    )?;
    writeln!(out)
}

pub fn render_status<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.dimmed())
}

/// Numbered list of articles: title, link, description, divider
pub fn render_articles<W: Write>(out: &mut W, articles: &[Article]) -> io::Result<()> {
    writeln!(out, "{}", "Latest News Articles".bold().underline())?;
    writeln!(out)?;
    for (i, article) in articles.iter().enumerate() {
        writeln!(
            out,
            "{}",
            format!("{}. {}", i + 1, sanitize_line(&article.title)).bold()
        )?;
        writeln!(out, "   {}", sanitize_line(&article.link).blue().underline())?;
        writeln!(out, "   {}", sanitize_line(&article.description))?;
        writeln!(out, "{}", DIVIDER.dimmed())?;
    }
    Ok(())
}

pub fn render_summary<W: Write>(out: &mut W, summary: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Grok's Sarcastic Summary".bold().underline())?;
    writeln!(out)?;
    writeln!(out, "{}", summary)
}

pub fn render_error<W: Write>(out: &mut W, error: &CycleError) -> io::Result<()> {
    let line = match error {
        CycleError::Configuration(e) => format!("⚠️  {}", e).red().bold(),
        CycleError::Validation => "Try typing *something*, Genius.".yellow(),
        CycleError::EmptyResult { topic } => format!(
            "No juicy headlines found for '{}'. Maybe it's too boring?",
            sanitize_line(topic)
        )
        .yellow(),
        CycleError::Upstream { status, body } => {
            format!("Summary API error ({}): {}", status, body).red()
        }
        CycleError::Transport(e) => format!("Request failed: {}", e).red(),
    };
    writeln!(out, "{}", line)
}

/// Render a finished cycle: any articles first, then the summary or the error
pub fn render_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    if !outcome.articles().is_empty() {
        render_articles(out, outcome.articles())?;
    }
    match outcome {
        Outcome::Success { summary, .. } => render_summary(out, summary),
        Outcome::Failure { error, .. } => {
            if !outcome.articles().is_empty() {
                writeln!(out)?;
            }
            render_error(out, error)
        }
    }
}
