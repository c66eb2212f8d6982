//! Blackjack engine. Keep this crate free of terminal and file IO.

pub mod cards;
pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod events;
pub mod hand;
pub mod outcome;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod text;
pub mod turn;

pub use cards::*;
pub use config::*;
pub use console::*;
pub use deck::*;
pub use error::*;
pub use events::*;
pub use hand::*;
pub use outcome::*;
pub use rng::*;
pub use rules::*;
pub use scoring::*;
pub use session::*;
pub use turn::*;
