//! unimark CLI - Unicode styled-text export tool
//!
//! A command-line tool for converting rich markup notes to Unicode
//! styled text and putting it on the clipboard.

use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use unimark::{
    copy_styled, copy_styled_with_options, BufferSurface, CopyOutcome, Note, NoteStore,
    StyleOptions, SystemClipboard, TextStats,
};

/// Unicode styled-text export for rich-text notes
#[derive(Parser)]
#[command(
    name = "unimark",
    version,
    about = "Copy rich-text notes as Unicode styled text",
    long_about = "unimark - Unicode styled-text export for rich-text notes.\n\n\
                  Converts bold, italic, underline and strikethrough markup into\n\
                  plain Unicode that survives pasting into chat apps and social posts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markup to Unicode styled text
    Style {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render markup to unstyled plain text
    Plain {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy styled text to the system clipboard
    Copy {
        /// Input file path (default: the saved note)
        input: Option<PathBuf>,

        /// Byte range of the markup to copy instead of the whole document
        #[arg(long, value_name = "START..END")]
        selection: Option<String>,

        /// Skip styling and copy the plain rendering
        #[arg(long)]
        plain: bool,
    },

    /// Show text statistics for a note
    Stats {
        /// Input file path (default: the saved note)
        input: Option<PathBuf>,

        /// Output JSON instead of the readable report
        #[arg(long)]
        json: bool,
    },

    /// Manage the saved note
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Print the saved note's markup
    Show,

    /// Replace the saved note from a file or stdin
    Set {
        /// Input file path (default: stdin)
        input: Option<PathBuf>,
    },

    /// Print the note file path
    Path,

    /// Reset the saved note to the default
    Clear,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Style { input, output } => {
            let markup = read_input(input.as_ref())?;
            let styled = unimark::to_styled_text(&markup);
            write_output(output.as_ref(), &styled)?;

            if let Some(path) = output {
                println!(
                    "{} Styled text written to {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Plain { input, output } => {
            let markup = read_input(input.as_ref())?;
            let plain = unimark::to_plain_text(&markup);
            write_output(output.as_ref(), &plain)?;

            if let Some(path) = output {
                println!(
                    "{} Plain text written to {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Copy {
            input,
            selection,
            plain,
        } => {
            let markup = match input {
                Some(path) => fs::read_to_string(path)?,
                None => NoteStore::open_default()?.load().markup,
            };

            let mut surface = BufferSurface::new(markup);
            if let Some(ref range) = selection {
                let (start, end) = parse_selection(range)?;
                surface.select(start, end)?;
            }

            let mut clipboard = SystemClipboard::new()?;
            let outcome = if plain {
                let options = StyleOptions::new()
                    .with_bold(false)
                    .with_italic(false)
                    .with_underline(false)
                    .with_strikethrough(false);
                copy_styled_with_options(&surface, &mut clipboard, &options)
            } else {
                copy_styled(&surface, &mut clipboard)
            };

            match outcome {
                CopyOutcome::Styled if plain => {
                    println!("{} Copied as plain text", "✓".green().bold());
                }
                CopyOutcome::Styled => {
                    println!("{} Copied with style!", "✓".green().bold());
                }
                CopyOutcome::PlainFallback => {
                    println!(
                        "{} Styled write failed; copied plain text instead",
                        "!".yellow().bold()
                    );
                }
                CopyOutcome::Failed => {
                    println!("{} Could not write to the clipboard", "✗".red().bold());
                }
            }
        }

        Commands::Stats { input, json } => {
            let markup = match input {
                Some(path) => fs::read_to_string(path)?,
                None => NoteStore::open_default()?.load().markup,
            };
            let stats = TextStats::from_markup(&markup);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", "Note Statistics".cyan().bold());
                println!("{}", "─".repeat(40));
                println!("{}: {}", "Words".bold(), stats.words);
                println!("{}: {}", "Characters".bold(), stats.characters);
                println!(
                    "{}: {}",
                    "Characters (no spaces)".bold(),
                    stats.characters_no_spaces
                );
                println!("{}: {}", "Lines".bold(), stats.lines);
                println!("{}: {}", "Paragraphs".bold(), stats.paragraphs);
                println!("{}: {}", "Display width".bold(), stats.display_width);
            }
        }

        Commands::Note { command } => {
            let store = NoteStore::open_default()?;
            match command {
                NoteCommands::Show => {
                    println!("{}", store.load().markup);
                }
                NoteCommands::Set { input } => {
                    let markup = read_input(input.as_ref())?;
                    store.save(&Note::new(markup))?;
                    println!(
                        "{} Note saved to {}",
                        "✓".green().bold(),
                        store.path().display()
                    );
                }
                NoteCommands::Path => {
                    println!("{}", store.path().display());
                }
                NoteCommands::Clear => {
                    store.save(&Note::default())?;
                    println!("{} Note reset", "✓".green().bold());
                }
            }
        }
    }

    Ok(())
}

/// Read markup from a file, or stdin when no path was given.
fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write to a file, or stdout when no path was given.
fn write_output(path: Option<&PathBuf>, content: &str) -> io::Result<()> {
    match path {
        Some(p) => fs::write(p, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}

/// Parse a `START..END` byte range.
fn parse_selection(range: &str) -> Result<(usize, usize), unimark::Error> {
    let invalid = || unimark::Error::InvalidSelection(format!("expected START..END, got {range}"));

    let (start, end) = range.split_once("..").ok_or_else(|| invalid())?;
    let start = start.trim().parse().map_err(|_| invalid())?;
    let end = end.trim().parse().map_err(|_| invalid())?;
    Ok((start, end))
}
