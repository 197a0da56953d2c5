use anyhow::Result;
use chanlink_config::Config;
use chanlink_engine::{FormatOptions, format_text};
use std::io::Read;
use std::path::PathBuf;
use std::{env, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut config_override: Option<PathBuf> = None;
    let mut message_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_override = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: --config requires a path");
                        print_usage(&args[0]);
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            arg if arg.starts_with('-') && arg != "-" => {
                eprintln!("Error: Unknown option '{arg}'");
                print_usage(&args[0]);
                process::exit(1);
            }
            arg => {
                if message_file.is_some() {
                    eprintln!("Error: Unexpected argument '{arg}'");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                message_file = Some(arg.to_string());
            }
        }
        i += 1;
    }

    // Resolve formatting options from the config file. An explicitly named
    // config file must exist; the default one is optional.
    let options = match &config_override {
        Some(path) => match Config::load_from_path(path) {
            Ok(Some(config)) => config.into_options(),
            Ok(None) => {
                eprintln!("Error: Config file not found at {}", path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        },
        None => match Config::load() {
            Ok(Some(config)) => config.into_options(),
            Ok(None) => FormatOptions::default(),
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Fix or remove {}", Config::config_path().display());
                process::exit(1);
            }
        },
    };

    // Read the message from the named file, or stdin when none is given.
    let text = match message_file.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: Failed to read message file '{path}': {e}");
                process::exit(1);
            }
        },
    };

    println!("{}", format_text(&text, &options));

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [--config <path>] [message-file]");
    eprintln!("Reads the message from stdin when no file is given, or when it is '-'.");
    eprintln!("Writes the formatted HTML to stdout.");
    eprintln!(
        "Channel names, the team and the basename come from {}",
        Config::config_path().display()
    );
}
