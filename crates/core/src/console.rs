//! Boundary between the engine and whatever draws the table and reads keys.

use crate::{Event, Hand, TableError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Player,
    Dealer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    PlayerTurn,
    ReplayPrompt,
}

/// Raw decision read from the user. What it means depends on the [`TurnPhase`] it answers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TableAction {
    Hit,
    Stand,
    Yes,
    No,
    None,
}

impl TableAction {
    /// Single-key mapping shared by every front-end.
    pub fn from_key(key: char) -> Self {
        match key {
            'H' | 'h' => TableAction::Hit,
            'S' | 's' => TableAction::Stand,
            'Y' | 'y' => TableAction::Yes,
            'N' | 'n' => TableAction::No,
            _ => TableAction::None,
        }
    }
}

pub trait Console {
    /// Shows a participant's hand. `hidden` masks the score (the dealer's hole card).
    fn render_hand(&mut self, role: Role, hand: &Hand, hidden: bool) -> Result<(), TableError>;

    /// One-way notification; the engine ignores anything the console does with it.
    fn notify(&mut self, event: &Event) -> Result<(), TableError>;

    /// Blocks until the user produces an action.
    fn request_action(&mut self, phase: TurnPhase) -> Result<TableAction, TableError>;
}
