use crate::{Rank, RngState};
use serde::{Deserialize, Serialize};

/// Produces card values on demand. Drawing never fails.
pub trait CardSource {
    fn draw(&mut self) -> u8;

    /// Seed of the backing generator, if it has one and it has been resolved.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl<S: CardSource + ?Sized> CardSource for Box<S> {
    fn draw(&mut self) -> u8 {
        (**self).draw()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShoeKind {
    #[default]
    Infinite,
    Deck,
}

impl ShoeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "infinite" => Some(Self::Infinite),
            "deck" => Some(Self::Deck),
            _ => None,
        }
    }

    pub fn build(self, rng: RngState) -> Box<dyn CardSource> {
        match self {
            Self::Infinite => Box::new(InfiniteShoe::new(rng)),
            Self::Deck => Box::new(DeckShoe::new(rng)),
        }
    }
}

/// Every draw picks one of the 13 ranks with equal odds, independent of earlier draws.
#[derive(Debug, Clone, Default)]
pub struct InfiniteShoe {
    rng: RngState,
}

impl InfiniteShoe {
    pub fn new(rng: RngState) -> Self {
        Self { rng }
    }
}

impl CardSource for InfiniteShoe {
    fn draw(&mut self) -> u8 {
        let card = Rank::ALL[self.rng.index(Rank::ALL.len())].card();
        log::debug!("drew {} ({})", card.name, card.value);
        card.value
    }

    fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }
}

/// One 52-card deck without suits. Rebuilt and reshuffled once every card has been dealt.
#[derive(Debug, Clone, Default)]
pub struct DeckShoe {
    rng: RngState,
    draw: Vec<Rank>,
}

impl DeckShoe {
    pub const SIZE: usize = 52;

    pub fn new(rng: RngState) -> Self {
        Self {
            rng,
            draw: Vec::with_capacity(Self::SIZE),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }

    fn reshuffle(&mut self) {
        self.draw.clear();
        for _ in 0..4 {
            self.draw.extend_from_slice(&Rank::ALL);
        }
        self.rng.shuffle(&mut self.draw);
        log::debug!("deck reshuffled");
    }
}

impl CardSource for DeckShoe {
    fn draw(&mut self) -> u8 {
        if self.draw.is_empty() {
            self.reshuffle();
        }
        match self.draw.pop() {
            Some(rank) => {
                let card = rank.card();
                log::debug!("drew {} ({} left)", card.name, self.draw.len());
                card.value
            }
            None => Rank::Ace.value(),
        }
    }

    fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }
}

/// Returns a fixed sequence of values in order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct StackedShoe {
    values: Vec<u8>,
    next: usize,
}

impl StackedShoe {
    /// An empty sequence deals Aces.
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    pub fn dealt(&self) -> usize {
        self.next
    }
}

impl CardSource for StackedShoe {
    fn draw(&mut self) -> u8 {
        if self.values.is_empty() {
            return Rank::Ace.value();
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
