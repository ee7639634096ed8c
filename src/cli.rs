//! CLI interface for stepwise.
//!
//! Each subcommand is non-interactive: a chapter file and `--set` commits
//! in, rendered output out. `--set NAME=VALUE` commits are applied in the
//! order given, exactly as if a reader had typed them into the chapter's
//! variable inputs one after another.

mod format;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::control::VariableControl;
use crate::document::load_chapter;
use crate::error::{Error, Result};
use crate::interpolate::{interpolate_descriptor, resolved_values};
use crate::model::EntryKind;
use crate::render::{ComrakRenderer, MarkdownRenderer, RenderDescriptor, render};
use crate::session::ChapterSession;

use format::{format_descriptor, format_slots, format_variable};

/// stepwise: render tutorial chapters.
#[derive(Debug, Parser)]
#[command(name = "stepwise", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file. Overrides `STEPWISE_CONFIG` and `~/.stepwise/config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  stepwise render chapter.json
  stepwise render chapter.json --set DOCKER_USERNAME=albert --interpolate
  stepwise render chapter.json --json
  stepwise variables chapter.json
  stepwise events chapter.json --set NAME="Hallo Welt" --set NAME="Hello world""#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render every entry of a chapter.
    Render {
        /// Chapter JSON document.
        chapter: PathBuf,

        /// Commit a value to a variable input. Repeatable, applied in order.
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,

        /// Print render descriptors as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Substitute `${NAME}` placeholders with each entry's values.
        #[arg(long)]
        interpolate: bool,
    },

    /// List variable inputs and the slots entries declare.
    Variables {
        /// Chapter JSON document.
        chapter: PathBuf,
    },

    /// Print the variable events a sequence of commits produces, as JSON lines.
    Events {
        /// Chapter JSON document.
        chapter: PathBuf,

        /// Commit a value to a variable input. Repeatable, applied in order.
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,
    },
}

/// A `--set NAME=VALUE` commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

/// Parse `NAME=VALUE`. The value may be empty or contain `=`.
fn parse_assignment(raw: &str) -> Result<Assignment> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(Assignment {
            name: name.to_string(),
            value: value.to_string(),
        }),
        _ => Err(Error::InvalidAssignment(raw.to_string())),
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error when the config or chapter cannot be loaded, when a
/// `--set` names no variable entry, or when writing to stdout fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            chapter,
            set,
            json,
            interpolate,
        } => cmd_render(&config, &chapter, &set, json, interpolate || config.interpolate),
        Command::Variables { chapter } => cmd_variables(&chapter),
        Command::Events { chapter, set } => cmd_events(&chapter, &set),
    }
}

/// Load a chapter and apply commits in order.
fn open_session(path: &Path, set: &[Assignment]) -> Result<ChapterSession> {
    let mut session = ChapterSession::new(load_chapter(path)?);
    for assignment in set {
        session.commit_by_name(&assignment.name, &assignment.value)?;
    }
    Ok(session)
}

fn cmd_render(
    config: &Config,
    path: &Path,
    set: &[Assignment],
    json: bool,
    interpolate: bool,
) -> Result<()> {
    let session = open_session(path, set)?;
    let markdown = ComrakRenderer::new(&config.markdown);
    write_render(&mut io::stdout().lock(), &session, &markdown, json, interpolate)
}

fn cmd_variables(path: &Path) -> Result<()> {
    let session = open_session(path, &[])?;
    write_variables(&mut io::stdout().lock(), &session)
}

fn cmd_events(path: &Path, set: &[Assignment]) -> Result<()> {
    let session = open_session(path, set)?;
    write_events(&mut io::stdout().lock(), &session)
}

/// Render the session as text blocks separated by blank lines, or as JSON.
fn write_render(
    out: &mut impl Write,
    session: &ChapterSession,
    markdown: &dyn MarkdownRenderer,
    json: bool,
    interpolate: bool,
) -> Result<()> {
    let mut descriptors = session.render(markdown);
    if interpolate {
        let values = resolved_values(session.chapter());
        descriptors = descriptors
            .into_iter()
            .map(|descriptor| interpolate_descriptor(descriptor, &values))
            .collect();
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&descriptors)?)?;
        return Ok(());
    }

    for (index, descriptor) in descriptors.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        // Only variable entries have a control.
        let current = session.control(index).map(VariableControl::current);
        for line in format_descriptor(descriptor, current) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// List variable inputs first, then every entry's declared slots.
fn write_variables(out: &mut impl Write, session: &ChapterSession) -> Result<()> {
    let markdown = ComrakRenderer::default();

    let mut any = false;
    for (index, entry) in session.chapter().entries.iter().enumerate() {
        if entry.kind == EntryKind::Variable
            && let RenderDescriptor::VariableInput(input) = render(entry, &markdown)
        {
            writeln!(out, "{}", format_variable(index, &input))?;
            any = true;
        }
    }
    for (index, entry) in session.chapter().entries.iter().enumerate() {
        if let Some(line) = format_slots(index, entry) {
            writeln!(out, "{line}")?;
            any = true;
        }
    }

    if !any {
        writeln!(out, "No variables")?;
    }
    Ok(())
}

/// One JSON line per emitted event, mount events included.
fn write_events(out: &mut impl Write, session: &ChapterSession) -> Result<()> {
    for event in session.events() {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
    }
    Ok(())
}
