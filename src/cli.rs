//! Command-line host for the hover preview.
//!
//! Stands in for an editor: it supplies text plus a cursor offset, prints
//! the resulting markup, and exposes the "choose font" command.

use crate::font_picker::{FontPicker, PICKER_TITLE};
use crate::hover::{HoverContent, hover_content, query};
use crate::token_matcher::{EscapeToken, find_all_tokens};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use unicode_hover_config::{Config, FileFontStore, FontPreferenceStore};

/// unicode-hover - preview Unicode escape sequences in source text
#[derive(Parser)]
#[command(name = "unicode-hover")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/unicode-hover/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How `hover` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The markup payload body, as a host would display it
    Markup,
    /// One annotation field per line
    Plain,
}

/// Where the document text comes from (stdin when neither is given)
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Document text
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the document from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the preview for the escape sequence at a cursor offset
    Hover {
        /// Cursor position as a character offset into the document
        #[arg(long)]
        offset: usize,

        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markup)]
        format: OutputFormat,
    },

    /// List every escape sequence in the document
    Scan {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List the candidate preview fonts
    Fonts,

    /// Choose the preview font (prompts when no selection is given)
    SetFont {
        /// Font name or 1-based list index
        selection: Option<String>,
    },

    /// Print the effective configuration
    Config,
}

/// Run a parsed command. `input` is used for stdin documents and prompts.
pub fn run(cli: Cli, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
    let store = cli
        .config
        .map_or_else(FileFontStore::default_location, FileFontStore::new);
    let config_path = store.path().to_path_buf();

    match cli.command {
        Commands::Hover {
            offset,
            input: source,
            format,
        } => {
            let text = read_document(&source, input)?;
            let config = Config::load_or_default(&config_path);
            let Some(hover) = query(&text, offset, &config) else {
                log::debug!("No preview at offset {offset}");
                return Ok(());
            };
            match format {
                OutputFormat::Markup => writeln!(out, "{}", hover.markup().body)?,
                OutputFormat::Plain => {
                    write_token_line(out, &hover.span)?;
                    write_content(out, &hover.content)?;
                }
            }
        }
        Commands::Scan { input: source } => {
            let text = read_document(&source, input)?;
            let font = Config::load_or_default(&config_path).font_preference();
            for token in find_all_tokens(&text) {
                let (line, column) = line_column(&text, token.start);
                let summary = match hover_content(&token.text, &font) {
                    Some(HoverContent::Preview(annotation)) => format!(
                        "U+{} {:?} {}",
                        annotation.hex_label, annotation.glyph, annotation.block_label
                    ),
                    Some(HoverContent::Invalid(invalid)) => invalid.to_string(),
                    None => "malformed".to_string(),
                };
                writeln!(out, "{line}:{column}\t{}\t{summary}", token.text)?;
            }
        }
        Commands::Fonts => {
            write_picker(out, &FontPicker::new(&store))?;
        }
        Commands::SetFont { selection } => {
            let picker = FontPicker::new(&store);
            let selection = match selection {
                Some(selection) => selection,
                None => {
                    write_picker(out, &picker)?;
                    write!(out, "Font (number or name, empty to cancel): ")?;
                    out.flush()?;
                    let mut line = String::new();
                    input.read_line(&mut line).context("failed to read selection")?;
                    line
                }
            };
            match picker.choose(&selection)? {
                Some(message) => writeln!(out, "{message}")?,
                None => writeln!(out, "Font unchanged: {}", store.get().family)?,
            }
        }
        Commands::Config => {
            let config = Config::load_or_default(&config_path);
            writeln!(out, "# {}", config_path.display())?;
            write!(out, "{}", serde_yaml_ng::to_string(&config)?)?;
        }
    }

    Ok(())
}

fn read_document(source: &InputArgs, input: &mut dyn BufRead) -> Result<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }
    if let Some(path) = &source.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read document from stdin")?;
    Ok(text)
}

fn write_picker(out: &mut dyn Write, picker: &FontPicker<'_>) -> Result<()> {
    writeln!(out, "{PICKER_TITLE}")?;
    writeln!(out, "{}", picker.placeholder())?;
    for item in picker.items() {
        let marker = if item.current { '*' } else { ' ' };
        writeln!(out, "{marker} {:>2}. {}", item.index, item.family)?;
    }
    Ok(())
}

fn write_token_line(out: &mut dyn Write, token: &EscapeToken) -> Result<()> {
    writeln!(out, "token: {} ({}..{})", token.text, token.start, token.end)?;
    Ok(())
}

fn write_content(out: &mut dyn Write, content: &HoverContent) -> Result<()> {
    match content {
        HoverContent::Preview(annotation) => {
            writeln!(out, "glyph: {}", annotation.glyph)?;
            writeln!(out, "unicode: U+{}", annotation.hex_label)?;
            writeln!(out, "decimal: {}", annotation.decimal_label)?;
            writeln!(out, "block: {}", annotation.block_label)?;
            writeln!(out, "see: {}", annotation.reference_url)?;
        }
        HoverContent::Invalid(invalid) => writeln!(out, "{invalid}")?,
    }
    Ok(())
}

/// 1-based line and column for a character offset.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for c in text.chars().take(offset) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
