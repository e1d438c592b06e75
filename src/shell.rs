//! Interactive console over a built knowledge base.
//!
//! A thin read-eval-print loop: every command delegates to the
//! [`QueryEngine`] and the formatters shared with the CLI. A failing command
//! prints its error and the loop continues; end of input ends the session.

use anyhow::Result;
use apiref_core::QueryEngine;
use std::io::{BufRead, Write};

use crate::get::format_detail;
use crate::list::{format_categories, format_list};
use crate::search::format_hits;

const HELP: &str = "\
Available commands:
  help             - Show this help message
  exit             - Exit the shell
  categories       - List all categories
  list [category]  - List all APIs (optionally filtered by category)
  search <query>   - Search for APIs matching query
  get <api_name>   - Get detailed information about an API
  <text>           - Anything else is treated as a search query
";

enum Flow {
    Continue,
    Exit,
}

/// Run the loop until `exit` or end of input.
///
/// The prompt is only written when `interactive` is set, so piped sessions
/// produce clean output.
pub fn run_shell<R: BufRead, W: Write>(
    engine: &QueryEngine<'_>,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    writeln!(out, "=== API Reference Shell ===")?;
    writeln!(out, "Type 'help' for available commands, 'exit' to quit.")?;

    let mut input = input;
    let mut buf = Vec::new();
    loop {
        if interactive {
            write!(out, "\n> ")?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Undecodable bytes must not end the session.
        let line = String::from_utf8_lossy(&buf);

        match dispatch(engine, line.trim(), out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                tracing::debug!(error = %e, "shell command failed");
                writeln!(out, "Error: {:#}", e)?;
            }
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn dispatch<W: Write>(engine: &QueryEngine<'_>, input: &str, out: &mut W) -> Result<Flow> {
    if input.is_empty() {
        return Ok(Flow::Continue);
    }

    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command.to_lowercase().as_str() {
        "exit" | "quit" if rest.is_empty() => return Ok(Flow::Exit),
        "help" if rest.is_empty() => write!(out, "{}", HELP)?,
        "categories" if rest.is_empty() => {
            write!(out, "{}", format_categories(&engine.categories()))?
        }
        "list" => {
            let category = rest.split_whitespace().next();
            write!(out, "{}", format_list(&engine.list(category)))?;
        }
        "search" => {
            if rest.is_empty() {
                writeln!(out, "Please provide a search query.")?;
            } else {
                write!(out, "{}", format_hits(rest, &engine.search(rest, None)))?;
            }
        }
        "get" => {
            if rest.is_empty() {
                writeln!(out, "Please provide an API name.")?;
            } else {
                match engine.get(rest, None) {
                    Some(detail) => write!(out, "{}", format_detail(&detail))?,
                    None => writeln!(out, "API '{}' not found.", rest)?,
                }
            }
        }
        _ => {
            writeln!(
                out,
                "Free-text questions fall back to keyword search; use 'search' or 'get' for precise results."
            )?;
            write!(out, "{}", format_hits(input, &engine.search(input, None)))?;
        }
    }

    Ok(Flow::Continue)
}
