use std::collections::VecDeque;
use termjack_core::text::{self, outcome_messages};
use termjack_core::{Event, Hand, Role, ShoeKind, TableConfig, Tally, TurnPhase};

const MAX_EVENT_LOG: usize = 200;

/// Everything the view needs to draw the table, updated from engine callbacks.
#[derive(Debug, Clone)]
pub struct Board {
    pub seed: Option<u64>,
    pub shoe: ShoeKind,
    pub round: u32,
    pub tally: Tally,
    pub player: Option<Hand>,
    pub dealer: Option<Hand>,
    pub dealer_hidden: bool,
    pub dealer_note: Option<&'static str>,
    pub turn_note: Option<&'static str>,
    pub banners: Vec<&'static str>,
    pub prompt: Option<TurnPhase>,
    pub event_log: VecDeque<String>,
}

impl Board {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            seed: config.seed,
            shoe: config.shoe,
            round: 0,
            tally: Tally::default(),
            player: None,
            dealer: None,
            dealer_hidden: true,
            dealer_note: None,
            turn_note: None,
            banners: Vec::new(),
            prompt: None,
            event_log: VecDeque::new(),
        }
    }

    pub fn set_hand(&mut self, role: Role, hand: &Hand, hidden: bool) {
        match role {
            Role::Player => self.player = Some(hand.clone()),
            Role::Dealer => {
                self.dealer = Some(hand.clone());
                self.dealer_hidden = hidden;
            }
        }
    }

    pub fn apply_event(&mut self, event: &Event) {
        match event {
            Event::RoundStarted { round } => {
                self.round = *round;
                self.player = None;
                self.dealer = None;
                self.dealer_hidden = true;
                self.dealer_note = None;
                self.turn_note = None;
                self.banners.clear();
            }
            Event::PlayerTurnStarted => self.turn_note = Some(text::YOUR_TURN),
            Event::PlayerStood { .. } | Event::PlayerBusted { .. } => self.turn_note = None,
            Event::DealerStands { .. } => self.dealer_note = Some(text::DEALER_STANDS),
            Event::RoundSettled { outcome, .. } => {
                self.tally.record(*outcome);
                self.banners = outcome_messages(*outcome).to_vec();
            }
            Event::ReplayPrompted => self.banners.push(text::REMATCH_PROMPT),
            Event::CardDealt { .. }
            | Event::PlayerHit { .. }
            | Event::DealerDrew { .. }
            | Event::DealerFinished { .. } => {}
        }
    }

    pub fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }

    pub fn next_hint(&self) -> &'static str {
        match self.prompt {
            Some(TurnPhase::PlayerTurn) => "h hit | s stand",
            Some(TurnPhase::ReplayPrompt) => "y play again | any other key quits",
            None => "dealing",
        }
    }

    pub fn seed_label(&self) -> String {
        self.seed
            .map(|seed| format!("{seed:#x}"))
            .unwrap_or_else(|| "random".to_string())
    }

    pub fn shoe_label(&self) -> &'static str {
        match self.shoe {
            ShoeKind::Infinite => "infinite",
            ShoeKind::Deck => "deck",
        }
    }

    /// Card labels with everything after the first card masked while the dealer hides.
    pub fn dealer_cards_label(&self) -> String {
        let Some(hand) = self.dealer.as_ref() else {
            return String::new();
        };
        let labels = hand.labels();
        if !self.dealer_hidden {
            return labels.join(" ");
        }
        labels
            .iter()
            .enumerate()
            .map(|(idx, label)| if idx == 0 { label.as_str() } else { "??" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn player_cards_label(&self) -> String {
        self.player
            .as_ref()
            .map(|hand| hand.labels().join(" "))
            .unwrap_or_default()
    }
}
