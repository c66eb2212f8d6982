use crate::{
    evaluate, play_dealer, CardSource, Console, DealerPlay, Event, EventBus, Hand, Outcome,
    PlayerTurn, Role, TableAction, TableError, Tally, TurnPhase, INITIAL_CARDS,
};

/// Hands and bust flag of the round in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    pub player: Hand,
    pub dealer: Hand,
    pub player_busted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub player: Hand,
    pub dealer: Hand,
    /// `None` when the player busted and the dealer never played.
    pub dealer_play: Option<DealerPlay>,
    pub outcome: Outcome,
}

/// Runs rounds against a console until the player declines a replay.
pub struct GameSession<S: CardSource> {
    source: S,
    events: EventBus,
    round: u32,
    tally: Tally,
}

impl<S: CardSource> GameSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            events: EventBus::default(),
            round: 0,
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    pub fn seed(&self) -> Option<u64> {
        self.source.seed()
    }

    /// Plays rounds until the replay prompt gets anything but yes.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<Tally, TableError> {
        loop {
            self.play_round(console)?;
            self.events.push(Event::ReplayPrompted);
            self.flush(console)?;
            let answer = console.request_action(TurnPhase::ReplayPrompt)?;
            if answer != TableAction::Yes {
                log::info!("replay declined after {} round(s)", self.round);
                return Ok(self.tally);
            }
        }
    }

    pub fn play_round<C: Console>(&mut self, console: &mut C) -> Result<RoundReport, TableError> {
        self.round += 1;
        self.events.push(Event::RoundStarted { round: self.round });
        let mut state = self.deal();
        self.flush(console)?;

        console.render_hand(Role::Player, &state.player, false)?;
        console.render_hand(Role::Dealer, &state.dealer, true)?;

        state.player_busted = self.player_turn(&mut state.player, console)?;

        let dealer_play = if state.player_busted {
            None
        } else {
            Some(play_dealer(
                &mut state.dealer,
                &mut self.source,
                &mut self.events,
            ))
        };
        console.render_hand(Role::Dealer, &state.dealer, false)?;

        let outcome = evaluate(&state.player, &state.dealer, state.player_busted);
        self.tally.record(outcome);
        self.events.push(Event::RoundSettled {
            outcome,
            player: state.player.score(),
            dealer: state.dealer.score(),
        });
        self.flush(console)?;

        Ok(RoundReport {
            round: self.round,
            player: state.player,
            dealer: state.dealer,
            dealer_play,
            outcome,
        })
    }

    /// Two cards each, player first.
    pub fn deal(&mut self) -> RoundState {
        let mut state = RoundState::default();
        for (role, hand) in [
            (Role::Player, &mut state.player),
            (Role::Dealer, &mut state.dealer),
        ] {
            for _ in 0..INITIAL_CARDS {
                let value = self.source.draw();
                hand.push(value);
                self.events.push(Event::CardDealt { role, value });
            }
        }
        state
    }

    /// Returns whether the player busted.
    fn player_turn<C: Console>(
        &mut self,
        hand: &mut Hand,
        console: &mut C,
    ) -> Result<bool, TableError> {
        self.events.push(Event::PlayerTurnStarted);
        self.flush(console)?;

        let mut turn = PlayerTurn::Playing;
        while !turn.is_terminal() {
            let action = console.request_action(TurnPhase::PlayerTurn)?;
            turn = turn.step(action, hand, &mut self.source, &mut self.events);
            console.render_hand(Role::Player, hand, false)?;
            self.flush(console)?;
        }
        Ok(turn.is_busted())
    }

    fn flush<C: Console>(&mut self, console: &mut C) -> Result<(), TableError> {
        for event in self.events.drain() {
            log::info!("{event}");
            console.notify(&event)?;
        }
        Ok(())
    }
}
