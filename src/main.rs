mod app;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod paused;
mod screen;
mod skin;
mod ticker;
mod util;
use crate::app::App;
use crate::audio::{Mute, Sounds, TerminalBell};
use crate::config::{Config, FileConfig};
use crate::highscores::{HighScoreFile, HighScoreStore, MemoryStore};
use crate::skin::SkinName;
use crate::util::error_chain;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use ratatui::DefaultTerminal;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: neosnake [<options>]\n",
    "\n",
    "Play snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <PATH>     Read configuration from the given file\n",
    "  -s, --skin <NAME>       Draw the board with the given skin (\"blocky\" or\n",
    "                          \"rounded\")\n",
    "  -t, --tile-count <N>    Play on an N×N board instead of fitting the board\n",
    "                          to the terminal\n",
    "  -h, --help              Display this help message and exit\n",
    "  -V, --version           Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run {
        config: Option<PathBuf>,
        skin: Option<SkinName>,
        tile_count: Option<u16>,
    },
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        let mut skin = None;
        let mut tile_count = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('s') | Arg::Long("skin") => {
                    skin = Some(parser.value()?.parse::<SkinName>()?);
                }
                Arg::Short('t') | Arg::Long("tile-count") => {
                    tile_count = Some(parser.value()?.parse::<u16>()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run {
            config,
            skin,
            tile_count,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Cli::Run {
                config,
                skin,
                tile_count,
            } => {
                let mut cfg = match config {
                    Some(path) => Config::load(&path, false),
                    None => Config::default_path().and_then(|path| Config::load(&path, true)),
                }
                .context("failed to load configuration")?;
                if let Some(skin) = skin {
                    cfg.game.skin = skin;
                }
                if tile_count.is_some() {
                    cfg.game.tile_count = tile_count;
                }
                cfg.validate().context("invalid command-line option")?;
                init_logging(&cfg.files)?;
                play(&cfg)
            }
            Cli::Help => {
                print!("{USAGE}");
                Ok(())
            }
            Cli::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> ExitCode {
    let r = match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli.run(),
        Err(e) => {
            eprintln!("neosnake: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    exit_code(r)
}

fn play(config: &Config) -> anyhow::Result<()> {
    let store = open_store(&config.files);
    let sounds: Box<dyn Sounds> = if config.game.sound {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Mute)
    };
    let terminal = ratatui::init();
    let r = run_terminal(terminal, config, store, sounds);
    ratatui::restore();
    r?;
    log::info!("Exiting");
    Ok(())
}

fn run_terminal(
    terminal: DefaultTerminal,
    config: &Config,
    store: Box<dyn HighScoreStore>,
    sounds: Box<dyn Sounds>,
) -> io::Result<()> {
    execute!(io::stdout(), EnableFocusChange)?;
    let size = terminal.size()?;
    let r = App::new(&config.game, store, sounds, size).run(terminal);
    execute!(io::stdout(), DisableFocusChange)?;
    r
}

/// Send log messages to the configured log file.  Nothing is logged to the
/// terminal, as that is occupied by the game.
fn init_logging(files: &FileConfig) -> anyhow::Result<()> {
    if files.log_level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = files.log_file.as_deref() else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    WriteLogger::init(files.log_level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Open the high-score store.  A store that cannot be read is replaced with
/// an empty one at the same path, so that a corrupt file does not keep the
/// game from starting.
fn open_store(files: &FileConfig) -> Box<dyn HighScoreStore> {
    let Some(path) = files.high_scores_file.clone() else {
        log::warn!("Could not determine path for high scores file; high scores will not be saved");
        return Box::new(MemoryStore::default());
    };
    match HighScoreFile::load(path.clone()) {
        Ok(store) => {
            log::debug!("Using high scores file {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!(
                "Failed to load high scores from {}: {}",
                path.display(),
                error_chain(&e)
            );
            Box::new(HighScoreFile::empty(path))
        }
    }
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("neosnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
