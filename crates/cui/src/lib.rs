mod app;
mod console;
mod input;
mod logger;
mod view;

use anyhow::{Context, Result};
use app::Board;
use console::TerminalConsole;
use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, IsTerminal};
use termjack_core::{GameSession, TableConfig, Tally};
use termjack_data::parse_level;

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub config: TableConfig,
}

/// Plays until the player declines a replay and returns the session tally.
pub fn run(options: LaunchOptions) -> Result<Tally> {
    let level = parse_level(&options.config.log_level)?;
    ensure_interactive_terminal()?;
    let logs = logger::install(level)?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            abandon_terminal();
            return Err(err);
        }
    };

    let mut session = GameSession::new(options.config.card_source());
    let mut console = TerminalConsole::new(terminal, Board::new(&options.config), logs);
    let result = session.run(&mut console);

    let mut terminal = console.into_terminal();
    let restored = restore_terminal(&mut terminal);
    settle(result, restored)
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    terminal.hide_cursor().context("hide cursor")?;
    Ok(terminal)
}

/// Undoes a half-finished setup. Failures here have nowhere to go.
fn abandon_terminal() {
    let _ = execute!(stdout(), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}

/// Runs every restore step and reports the first failure.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode().context("disable raw mode");
    let screen =
        execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen");
    let cursor = terminal.show_cursor().context("show cursor");
    raw.and(screen).and(cursor)
}

/// A session error takes precedence over a restore failure.
fn settle<T, E>(result: Result<T, E>, restored: Result<()>) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match (result, restored) {
        (Ok(value), restored) => restored.map(|()| value),
        (Err(err), restored) => {
            if let Err(restore) = restored {
                eprintln!("termjack-cui: {restore:#}");
            }
            Err(anyhow::Error::new(err).context("play session"))
        }
    }
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "termjack-cui requires an interactive TTY (use termjack-cli for piped or headless input)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use termjack_core::{TableError, TurnPhase};

    #[test]
    fn session_error_wins_over_restore_failure() {
        let result: std::result::Result<u32, TableError> =
            Err(TableError::InputClosed(TurnPhase::PlayerTurn));
        let err = settle(result, Err(anyhow::anyhow!("leave alternate screen")))
            .expect_err("session error");
        assert_eq!(err.to_string(), "play session");
        assert!(err.root_cause().is::<TableError>());
    }

    #[test]
    fn restore_failure_surfaces_after_clean_session() {
        let result: std::result::Result<u32, TableError> = Ok(3);
        let err = settle(result, Err(anyhow::anyhow!("disable raw mode"))).expect_err("restore");
        assert_eq!(err.to_string(), "disable raw mode");
        assert_eq!(settle::<_, TableError>(Ok(3), Ok(())).expect("clean"), 3);
    }
}
