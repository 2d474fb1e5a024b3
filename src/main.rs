use std::{
    error::Error,
    io::{self, stdin, Stdout},
    path::PathBuf,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keyrace::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, Outcome, Runner},
    session::Session,
    ui::{ResultsView, TypingView},
    DEFAULT_PASSAGE,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

/// minimal typing trainer: type the passage word by word, get your wpm
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a passage word by word. The current word turns green while you are on track and red on a typo; press space after a correct word to move on. Esc quits."
)]
pub struct Cli {
    /// text to type (defaults to a built-in sample sentence)
    passage: Option<String>,

    /// layout config file to use instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// write logs here instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// width of the input box in columns
    #[clap(long)]
    input_width: Option<u16>,
}

impl Cli {
    fn passage(&self) -> &str {
        self.passage.as_deref().unwrap_or(DEFAULT_PASSAGE)
    }

    fn load_config(&self) -> Config {
        let store = match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        };
        let mut config = store.load();
        if let Some(width) = self.input_width {
            config.input_box_width = width;
        }
        config
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode + alternate screen for as long as it lives.
struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let mut guard = Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
        };
        enable_raw_mode()?;
        execute!(guard.terminal.backend_mut(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        error!(?info, "panic");
        default_hook(info);
    }));
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _log_guard = cli
        .log_file
        .clone()
        .or_else(AppDirs::log_path)
        .and_then(|path| logging::init(&path).ok());

    let config = cli.load_config();
    let mut session = Session::new(cli.passage());
    info!(words = session.passage().word_count(), "starting session");

    install_panic_hook();
    match run(&mut session, &config) {
        Ok(Outcome::Completed(score)) => info!(wpm = score.wpm, "done"),
        Ok(Outcome::Cancelled) => info!("cancelled"),
        Err(err) => {
            error!(%err, "fatal");
            return Err(err.into());
        }
    }

    Ok(())
}

fn run(session: &mut Session, config: &Config) -> keyrace::Result<Outcome> {
    let mut guard = TerminalGuard::new()?;
    let terminal = &mut guard.terminal;
    let mut runner = Runner::new(CrosstermEventSource);

    let outcome = runner.run_session(session, |session| {
        terminal.draw(|f| {
            let area = f.area();
            let view = TypingView::new(session, config);
            f.render_widget(view, area);
            f.set_cursor_position(view.cursor_position(area));
        })?;
        Ok(())
    })?;

    if let Outcome::Completed(score) = outcome {
        runner.await_dismissal(|| {
            terminal.draw(|f| f.render_widget(ResultsView::new(score), f.area()))?;
            Ok(())
        })?;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn passage_defaults_to_sample_text() {
        let cli = Cli::parse_from(["keyrace"]);

        assert_eq!(cli.passage(), DEFAULT_PASSAGE);
        assert!(cli.config.is_none());
    }

    #[test]
    fn positional_passage_overrides_default() {
        let cli = Cli::parse_from(["keyrace", "cat dog"]);

        assert_eq!(cli.passage(), "cat dog");
    }

    #[test]
    fn input_width_overrides_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        FileConfigStore::with_path(&path)
            .save(&Config {
                input_box_width: 30,
                show_echo: false,
                ..Config::default()
            })
            .unwrap();

        let cli = Cli::parse_from([
            "keyrace",
            "--config",
            path.to_str().unwrap(),
            "--input-width",
            "20",
        ]);
        let config = cli.load_config();

        assert_eq!(config.input_box_width, 20);
        assert!(!config.show_echo);
    }

    #[test]
    fn config_file_is_used_as_is_without_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let saved = Config {
            horizontal_margin: 3,
            ..Config::default()
        };
        FileConfigStore::with_path(&path).save(&saved).unwrap();

        let cli = Cli::parse_from(["keyrace", "-c", path.to_str().unwrap()]);

        assert_eq!(cli.load_config(), saved);
    }
}
