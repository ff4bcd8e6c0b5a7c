mod app;
mod command;
mod config;
mod consts;
mod options;
mod session;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::options::Options;
use anyhow::Context;
use lexopt::prelude::*;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [options]

Options:
  -c, --config <PATH>   Read configuration from <PATH>
      --log <FILE>      Write log output to <FILE>
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

struct Args {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let options = match startup(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(options).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn parse_args() -> Result<Option<Args>, lexopt::Error> {
    let mut config = None;
    let mut log_file = None;
    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('c') | Long("config") => config = Some(PathBuf::from(parser.value()?)),
            Long("log") => log_file = Some(PathBuf::from(parser.value()?)),
            Short('h') | Long("help") => {
                print!("{USAGE}");
                return Ok(None);
            }
            Short('V') | Long("version") => {
                println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            _ => return Err(arg.unexpected()),
        }
    }
    Ok(Some(Args { config, log_file }))
}

/// Initialize logging and load the configured default presets, before the
/// terminal is put into raw mode so that errors still reach stderr.
fn startup(args: &Args) -> anyhow::Result<Options> {
    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        )
        .context("failed to initialize logger")?;
    }
    let config = match &args.config {
        Some(path) => Config::load(path, false)?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    Ok(config.defaults)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
