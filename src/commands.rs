//! Command execution for the cell CLI.
//!
//! Each command maps one input item (an argument or a line of stdin) to one
//! line of output. Failures are reported per item and never stop the batch.

use std::io::{BufRead, Write};

use cell_engine::engine::{components, decode_into, encode_indices, scan};

use crate::config::Settings;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Validate,
    Decode,
    Encode,
    Split,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Command> {
        match name {
            "validate" => Some(Command::Validate),
            "decode" => Some(Command::Decode),
            "encode" => Some(Command::Encode),
            "split" => Some(Command::Split),
            _ => None,
        }
    }
}

/// Run `command` over command-line arguments.
///
/// `encode` treats all arguments as the indices of one coordinate; the other
/// commands treat each argument as a coordinate. Returns whether every item
/// succeeded.
pub fn run_args<W: Write, E: Write>(
    command: Command,
    args: &[String],
    settings: &Settings,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    if command == Command::Encode {
        let joined = args.join(" ");
        return report(process(command, &joined, settings), out, err);
    }

    let mut all_ok = true;
    for arg in args {
        all_ok &= report(process(command, arg, settings), out, err)?;
    }
    Ok(all_ok)
}

/// Run `command` over one item per input line.
///
/// Lines end with `\n` or `\r\n`; only that terminator and surrounding
/// spaces or tabs are stripped, so any other `\r` reaches the engine and is
/// rejected. Blank lines and `#` comments are skipped; failures, including
/// lines that are not UTF-8, carry the 1-based line number.
pub fn run_lines<R: BufRead, W: Write, E: Write>(
    command: Command,
    input: R,
    settings: &Settings,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    let mut all_ok = true;
    for (line_num, raw) in input.split(b'\n').enumerate() {
        let raw = raw?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        let result = match std::str::from_utf8(bytes) {
            Ok(line) => {
                let item = line.trim_matches([' ', '\t']);
                if item.is_empty() || item.starts_with('#') {
                    continue;
                }
                process(command, item, settings).map_err(|e| CliError::Parse {
                    line: line_num + 1,
                    message: format!("{}: {}", item, e),
                })
            }
            Err(e) => Err(CliError::Parse {
                line: line_num + 1,
                message: format!("not valid UTF-8: {}", e),
            }),
        };
        all_ok &= report(result, out, err)?;
    }
    Ok(all_ok)
}

fn report<W: Write, E: Write>(
    result: Result<String>,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    match result {
        Ok(line) => {
            writeln!(out, "{}", line)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            Ok(false)
        }
    }
}

fn process(command: Command, item: &str, settings: &Settings) -> Result<String> {
    let profile = settings.profile.profile();
    match command {
        Command::Validate => {
            scan(item, &profile, |_| {})?;
            Ok(format!("{}: ok", item))
        }
        Command::Decode => {
            let mut indices = Vec::new();
            decode_into(item, &profile, &mut indices)?;
            let parts: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
            Ok(parts.join(&settings.separator))
        }
        Command::Split => Ok(components(item, &profile)?.join(" ")),
        Command::Encode => {
            let indices = parse_indices(item, &settings.separator)?;
            Ok(encode_indices(&indices, &profile)?)
        }
    }
}

/// Split on whitespace and on any character of `separator`.
fn parse_indices(item: &str, separator: &str) -> Result<Vec<u64>> {
    item.split(|c: char| c.is_whitespace() || separator.contains(c))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| CliError::InvalidIndex(token.to_string()))
        })
        .collect()
}
