//! cell - validate, decode and encode CELL coordinates from the command line

mod commands;
mod config;
mod error;

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;

use commands::Command;
use config::{ProfileName, Settings};

fn print_usage() {
    eprintln!("Usage: cell [OPTIONS] <COMMAND> [ARGS]...");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  validate <COORD>...       Check coordinates");
    eprintln!("  decode <COORD>...         Print the indices of each coordinate");
    eprintln!("  encode <INDEX>...         Print the coordinate for a list of indices");
    eprintln!("  split <COORD>...          Print the dimension runs of each coordinate");
    eprintln!();
    eprintln!("Without arguments, validate/decode/split/encode read one item per line from stdin.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --bounded                 Up to 3 dimensions, indices up to 255 (default)");
    eprintln!("  --unbounded               Any number of dimensions");
    eprintln!("  --separator <SEP>         Separator between printed indices (default: ,)");
    eprintln!("  --config <FILE>           Load settings from TOML file");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -h, --help                Print help");
}

struct Options {
    command: Command,
    args: Vec<String>,
    profile: Option<ProfileName>,
    separator: Option<String>,
    config_file: Option<PathBuf>,
    no_config: bool,
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("Error: {}", message);
    print_usage();
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let mut command: Option<Command> = None;
    let mut rest: Vec<String> = Vec::new();
    let mut profile: Option<ProfileName> = None;
    let mut separator: Option<String> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut no_config = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "--bounded" => profile = Some(ProfileName::Bounded),
            "--unbounded" => profile = Some(ProfileName::Unbounded),
            "--separator" => {
                i += 1;
                if i >= args.len() {
                    return usage_error("--separator requires a value");
                }
                separator = Some(args[i].to_string());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    return usage_error("--config requires a file path");
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            "--no-config" => no_config = true,
            "--" => {
                rest.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') => {
                return usage_error(&format!("Unknown option: {}", arg));
            }
            arg if command.is_none() => match Command::from_name(arg) {
                Some(c) => command = Some(c),
                None => return usage_error(&format!("Unknown command: {}", arg)),
            },
            _ => rest.push(args[i].to_string()),
        }
        i += 1;
    }

    let Some(command) = command else {
        return usage_error("missing command");
    };

    let options = Options {
        command,
        args: rest,
        profile,
        separator,
        config_file,
        no_config,
    };

    match run(options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: Options) -> anyhow::Result<bool> {
    let mut settings = if options.no_config {
        Settings::default()
    } else {
        let (settings, warnings) = config::load_settings(options.config_file.as_ref());
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }
        settings
    };
    if let Some(profile) = options.profile {
        settings.profile = profile;
    }
    if let Some(separator) = options.separator {
        settings.separator = separator;
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if options.args.is_empty() {
        commands::run_lines(options.command, io::stdin().lock(), &settings, &mut out, &mut err)
            .context("failed to process standard input")
    } else {
        commands::run_args(options.command, &options.args, &settings, &mut out, &mut err)
            .context("failed to write output")
    }
}
