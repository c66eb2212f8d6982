use std::io::{self, BufRead, Write};
use termjack_core::text::{self, display_score, outcome_messages, prompt_choices};
use termjack_core::{
    Console, Event, GameSession, Hand, Role, TableAction, TableConfig, TableError, TurnPhase,
};

/// Plain line console: one line per answer, everything printed in reading order.
struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<Option<String>, TableError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn render_hand(&mut self, role: Role, hand: &Hand, hidden: bool) -> Result<(), TableError> {
        let (name, cards) = match role {
            Role::Player => (text::PLAYER, hand.labels().join(" ")),
            Role::Dealer if hidden => {
                let labels = hand.labels();
                let shown = labels.first().cloned().unwrap_or_default();
                let masked = vec!["??"; labels.len().saturating_sub(1)];
                (text::DEALER, format!("{shown} {}", masked.join(" ")))
            }
            Role::Dealer => (text::DEALER, hand.labels().join(" ")),
        };
        writeln!(
            self.output,
            "{name:<7}{}   [{}]",
            display_score(hand, hidden),
            cards.trim_end()
        )?;
        Ok(())
    }

    fn notify(&mut self, event: &Event) -> Result<(), TableError> {
        match event {
            Event::RoundStarted { round } => writeln!(self.output, "\n--- round {round} ---")?,
            Event::PlayerTurnStarted => writeln!(self.output, "{}", text::YOUR_TURN)?,
            Event::DealerStands { .. } => writeln!(self.output, "{}", text::DEALER_STANDS)?,
            Event::RoundSettled { outcome, .. } => {
                for line in outcome_messages(*outcome) {
                    writeln!(self.output, "{line}")?;
                }
            }
            Event::ReplayPrompted => writeln!(self.output, "{}", text::REMATCH_PROMPT)?,
            Event::CardDealt { .. }
            | Event::PlayerHit { .. }
            | Event::PlayerStood { .. }
            | Event::PlayerBusted { .. }
            | Event::DealerDrew { .. }
            | Event::DealerFinished { .. } => {}
        }
        Ok(())
    }

    fn request_action(&mut self, phase: TurnPhase) -> Result<TableAction, TableError> {
        let [left, right] = prompt_choices(phase);
        write!(self.output, "{left}   {right} > ")?;
        self.output.flush()?;
        match self.read_line()? {
            Some(line) => Ok(parse_action(&line)),
            None if phase == TurnPhase::ReplayPrompt => Ok(TableAction::No),
            None => Err(TableError::InputClosed(phase)),
        }
    }
}

/// A line counts only when it is a single key character.
fn parse_action(line: &str) -> TableAction {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => TableAction::from_key(key),
        _ => TableAction::None,
    }
}

/// Default filter for `env_logger`; `RUST_LOG` still overrides it.
fn log_filter(config: &TableConfig) -> anyhow::Result<String> {
    let level = termjack_data::parse_level(&config.log_level)?;
    Ok(level.to_string().to_ascii_lowercase())
}

fn main() -> anyhow::Result<()> {
    let config = termjack_data::table_config_from_env()?;
    let filter = log_filter(&config)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    log::info!("starting with {config:?}");

    let mut session = GameSession::new(config.card_source());
    let stdin = io::stdin();
    let mut console = LineConsole::new(stdin.lock(), io::stdout());
    let tally = session.run(&mut console)?;

    if let Some(seed) = session.seed() {
        log::info!("session seed {seed:#x}");
    }
    println!(
        "rounds {}  won {}  lost {}  pushed {}",
        tally.rounds, tally.wins, tally.losses, tally.pushes
    );
    Ok(())
}
