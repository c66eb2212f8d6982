use crate::{CardSource, Event, EventBus, Hand, TableAction, BLACKJACK, DEALER_STAND_THRESHOLD};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerTurn {
    #[default]
    Playing,
    Busted,
    Standing,
}

impl PlayerTurn {
    pub fn is_terminal(self) -> bool {
        !matches!(self, PlayerTurn::Playing)
    }

    pub fn is_busted(self) -> bool {
        matches!(self, PlayerTurn::Busted)
    }

    /// Applies one player action. Terminal states and anything other than hit or stand are
    /// returned unchanged without touching the hand.
    pub fn step(
        self,
        action: TableAction,
        hand: &mut Hand,
        source: &mut dyn CardSource,
        events: &mut EventBus,
    ) -> PlayerTurn {
        if self.is_terminal() {
            return self;
        }
        match action {
            TableAction::Hit => {
                let value = source.draw();
                hand.push(value);
                let score = hand.score();
                events.push(Event::PlayerHit { value, score });
                if score > BLACKJACK {
                    events.push(Event::PlayerBusted { score });
                    PlayerTurn::Busted
                } else {
                    PlayerTurn::Playing
                }
            }
            TableAction::Stand => {
                events.push(Event::PlayerStood {
                    score: hand.score(),
                });
                PlayerTurn::Standing
            }
            TableAction::Yes | TableAction::No | TableAction::None => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerPlay {
    /// Already at the threshold after the deal; nothing drawn.
    Stood { score: u32 },
    Drew { cards: usize, score: u32 },
}

impl DealerPlay {
    pub fn score(self) -> u32 {
        match self {
            DealerPlay::Stood { score } | DealerPlay::Drew { score, .. } => score,
        }
    }
}

/// Draws for the dealer until the score reaches the threshold. A soft 17 stands like a hard one.
pub fn play_dealer(
    hand: &mut Hand,
    source: &mut dyn CardSource,
    events: &mut EventBus,
) -> DealerPlay {
    let mut score = hand.score();
    if score >= DEALER_STAND_THRESHOLD {
        events.push(Event::DealerStands { score });
        return DealerPlay::Stood { score };
    }

    let mut cards = 0;
    while score < DEALER_STAND_THRESHOLD {
        let value = source.draw();
        hand.push(value);
        score = hand.score();
        cards += 1;
        events.push(Event::DealerDrew { value, score });
    }
    events.push(Event::DealerFinished { score });
    DealerPlay::Drew { cards, score }
}
