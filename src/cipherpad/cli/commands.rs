use super::print::{print_messages, print_result};
use super::setup::{init_logging, Cli};
use cipherpad::api::{CipherpadApi, CmdMessage};
use cipherpad::config::{resolve_config_dir, CipherpadConfig};
use cipherpad::driver;
use cipherpad::error::{CipherpadError, Result};
use cipherpad::store::memory::InMemoryStore;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;

struct AppContext {
    commands_file: PathBuf,
    color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;
    if !ctx.color {
        colored::control::set_override(false);
    }

    handle_file(&ctx.commands_file)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = match resolve_config_dir(&cwd) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            CipherpadConfig::load(&dir)?
        }
        None => CipherpadConfig::default(),
    };

    let commands_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.commands_path());

    Ok(AppContext {
        commands_file,
        color: config.color && !cli.no_color,
    })
}

fn handle_file(path: &Path) -> Result<()> {
    let mut api = CipherpadApi::new(InMemoryStore::new());

    let outcome = driver::process_file(&mut api, path, |line| {
        println!("Processing line {}: {}", line.line_number, line.content);
        print_result(&line.result);
        println!();
    });

    match outcome {
        Ok(_) => Ok(()),
        // Reported like any other command outcome; the run just stops here.
        Err(e @ (CipherpadError::FileNotFound(_) | CipherpadError::Io(_))) => {
            print_messages(&[CmdMessage::error(e.to_string())]);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
