use crate::{CardSource, RngState, ShoeKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_LEVEL: &str = "info";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Fixed seed for the card source. `None` seeds from OS entropy on the first draw.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub shoe: ShoeKind,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shoe: ShoeKind::default(),
            log_level: default_log_level(),
        }
    }
}

impl TableConfig {
    pub fn rng(&self) -> RngState {
        match self.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        }
    }

    pub fn card_source(&self) -> Box<dyn CardSource> {
        self.shoe.build(self.rng())
    }
}
