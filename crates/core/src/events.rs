use crate::{Outcome, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    RoundStarted { round: u32 },
    CardDealt { role: Role, value: u8 },
    PlayerTurnStarted,
    PlayerHit { value: u8, score: u32 },
    PlayerStood { score: u32 },
    PlayerBusted { score: u32 },
    /// The dealer's first two cards already reached the threshold.
    DealerStands { score: u32 },
    DealerDrew { value: u8, score: u32 },
    DealerFinished { score: u32 },
    RoundSettled {
        outcome: Outcome,
        player: u32,
        dealer: u32,
    },
    ReplayPrompted,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::RoundStarted { round } => write!(f, "round {round} started"),
            Event::CardDealt { role, value } => write!(f, "{role:?} dealt {value}"),
            Event::PlayerTurnStarted => write!(f, "player to act"),
            Event::PlayerHit { value, score } => write!(f, "player hit {value} -> {score}"),
            Event::PlayerStood { score } => write!(f, "player stood on {score}"),
            Event::PlayerBusted { score } => write!(f, "player busted with {score}"),
            Event::DealerStands { score } => write!(f, "dealer stands on {score}"),
            Event::DealerDrew { value, score } => write!(f, "dealer drew {value} -> {score}"),
            Event::DealerFinished { score } => write!(f, "dealer finished on {score}"),
            Event::RoundSettled {
                outcome,
                player,
                dealer,
            } => write!(f, "{outcome:?} (player {player}, dealer {dealer})"),
            Event::ReplayPrompted => write!(f, "waiting for replay answer"),
        }
    }
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
