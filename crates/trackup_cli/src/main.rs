//! Interactive command-line front end.
//!
//! # Responsibility
//! - Resolve configuration from environment and flags.
//! - Run a read-eval-print loop over `trackup_core::Logic`.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use trackup_core::db::{open_db, open_db_in_memory};
use trackup_core::{
    init_logging, AddressBookStore, CoreConfig, Logic, MemoryAddressBookStore,
    SqliteAddressBookStore,
};

#[derive(Debug, Parser)]
#[command(name = "trackup", version, about = "Contact and event tracker")]
struct Cli {
    /// SQLite file holding the address book.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Keep data in memory only for this session.
    #[arg(long)]
    no_persist: bool,
}

impl Cli {
    fn into_config(self) -> CoreConfig {
        let mut config = CoreConfig::from_env();
        if let Some(db) = self.db {
            config.db_path = db;
        }
        if let Some(log_dir) = self.log_dir {
            config.log_dir = log_dir;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        config.persist = !self.no_persist;
        config
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    let log_dir = absolute(config.log_dir.clone());
    if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }

    log::info!(
        "event=session_start module=cli status=ok persist={}",
        config.persist
    );
    match run(&config) {
        Ok(()) => {
            log::info!("event=session_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(message) => {
            log::error!("event=session_end module=cli status=error");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CoreConfig) -> Result<(), String> {
    if !config.persist {
        let logic = Logic::new(MemoryAddressBookStore::new()).map_err(|err| err.to_string())?;
        return repl(logic);
    }

    let opened = if config.db_path.as_os_str() == ":memory:" {
        open_db_in_memory()
    } else {
        open_db(&config.db_path)
    };
    let mut conn = opened
        .map_err(|err| format!("failed to open `{}`: {err}", config.db_path.display()))?;
    let store = SqliteAddressBookStore::try_new(&mut conn).map_err(|err| err.to_string())?;
    let logic = Logic::new(store).map_err(|err| err.to_string())?;
    repl(logic)
}

fn repl<S: AddressBookStore>(mut logic: Logic<S>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "> ")
            .and_then(|()| stdout.flush())
            .map_err(|err| err.to_string())?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(|err| err.to_string())?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.exit {
                    return Ok(());
                }
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&path))
        .unwrap_or(path)
}
