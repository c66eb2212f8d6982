use crate::app::Board;
use crate::input::{self, InputAction};
use crate::logger::LogBuffer;
use crate::view;
use crossterm::event;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use termjack_core::{Console, Event, Hand, Role, TableAction, TableError, TurnPhase};

const TICK_RATE: Duration = Duration::from_millis(120);

/// Draws the table on every engine callback and blocks on key presses when asked for input.
pub struct TerminalConsole<B: Backend> {
    terminal: Terminal<B>,
    board: Board,
    logs: LogBuffer,
}

impl<B: Backend> TerminalConsole<B> {
    pub fn new(terminal: Terminal<B>, board: Board, logs: LogBuffer) -> Self {
        Self {
            terminal,
            board,
            logs,
        }
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn pull_logs(&mut self) -> bool {
        let lines = self.logs.take();
        let fresh = !lines.is_empty();
        for line in lines {
            self.board.push_event_line(line);
        }
        fresh
    }

    fn redraw(&mut self) -> Result<(), TableError> {
        self.pull_logs();
        self.terminal
            .draw(|frame| view::draw(frame, &self.board))?;
        Ok(())
    }
}

impl<B: Backend> Console for TerminalConsole<B> {
    fn render_hand(&mut self, role: Role, hand: &Hand, hidden: bool) -> Result<(), TableError> {
        self.board.set_hand(role, hand, hidden);
        self.redraw()
    }

    fn notify(&mut self, event: &Event) -> Result<(), TableError> {
        self.board.apply_event(event);
        self.redraw()
    }

    fn request_action(&mut self, phase: TurnPhase) -> Result<TableAction, TableError> {
        self.board.prompt = Some(phase);
        self.redraw()?;
        loop {
            if event::poll(TICK_RATE)? {
                match input::map_event(event::read()?) {
                    InputAction::Table(action) => {
                        log::debug!("{phase:?} input {action:?}");
                        self.board.prompt = None;
                        return Ok(action);
                    }
                    InputAction::Redraw => self.redraw()?,
                    InputAction::Ignore => {}
                }
            } else if self.pull_logs() {
                self.terminal
                    .draw(|frame| view::draw(frame, &self.board))?;
            }
        }
    }
}
