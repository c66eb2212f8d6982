use std::collections::VecDeque;
use termjack_core::{
    Console, DealerPlay, Event, GameSession, Hand, Outcome, Role, StackedShoe, TableAction,
    TableError, TurnPhase,
};

#[derive(Default)]
struct ScriptedConsole {
    actions: VecDeque<TableAction>,
    renders: Vec<(Role, Vec<u8>, bool)>,
    events: Vec<Event>,
    prompts: Vec<TurnPhase>,
}

impl ScriptedConsole {
    fn with_actions(actions: &[TableAction]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn outcomes(&self) -> Vec<Outcome> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::RoundSettled { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect()
    }
}

impl Console for ScriptedConsole {
    fn render_hand(&mut self, role: Role, hand: &Hand, hidden: bool) -> Result<(), TableError> {
        self.renders.push((role, hand.cards().to_vec(), hidden));
        Ok(())
    }

    fn notify(&mut self, event: &Event) -> Result<(), TableError> {
        self.events.push(event.clone());
        Ok(())
    }

    fn request_action(&mut self, phase: TurnPhase) -> Result<TableAction, TableError> {
        self.prompts.push(phase);
        self.actions
            .pop_front()
            .ok_or(TableError::InputClosed(phase))
    }
}

#[test]
fn standing_nineteen_beats_dealer_seventeen() {
    // player 10 9, dealer 10 4, dealer draws 3
    let mut session = GameSession::new(StackedShoe::new(vec![10, 9, 10, 4, 3]));
    let mut console = ScriptedConsole::with_actions(&[TableAction::Stand]);
    let report = session.play_round(&mut console).expect("round");

    assert_eq!(report.outcome, Outcome::Win);
    assert_eq!(report.player.score(), 19);
    assert_eq!(report.dealer.cards(), &[10, 4, 3]);
    assert_eq!(report.dealer.score(), 17);
    assert_eq!(
        report.dealer_play,
        Some(DealerPlay::Drew {
            cards: 1,
            score: 17
        })
    );
    assert_eq!(session.tally().wins, 1);
}

#[test]
fn player_bust_loses_and_dealer_never_draws() {
    // player 10 10, dealer 10 6, player hits 5
    let mut session = GameSession::new(StackedShoe::new(vec![10, 10, 10, 6, 5, 10]));
    let mut console = ScriptedConsole::with_actions(&[TableAction::Hit]);
    let report = session.play_round(&mut console).expect("round");

    assert_eq!(report.outcome, Outcome::PlayerBustLose);
    assert_eq!(report.player.cards(), &[10, 10, 5]);
    assert_eq!(report.dealer.len(), 2);
    assert_eq!(report.dealer_play, None);
    assert!(console.events.contains(&Event::PlayerBusted { score: 25 }));
    assert!(!console
        .events
        .iter()
        .any(|event| matches!(event, Event::DealerDrew { .. } | Event::DealerStands { .. })));
}

#[test]
fn dealer_hand_is_masked_until_player_finishes() {
    let mut session = GameSession::new(StackedShoe::new(vec![10, 9, 10, 8]));
    let mut console = ScriptedConsole::with_actions(&[TableAction::Stand]);
    session.play_round(&mut console).expect("round");

    assert_eq!(
        console.renders,
        vec![
            (Role::Player, vec![10, 9], false),
            (Role::Dealer, vec![10, 8], true),
            (Role::Player, vec![10, 9], false),
            (Role::Dealer, vec![10, 8], false),
        ]
    );
    assert!(console.events.contains(&Event::DealerStands { score: 18 }));
}

#[test]
fn unrecognized_actions_keep_waiting() {
    let mut session = GameSession::new(StackedShoe::new(vec![10, 7, 10, 7]));
    let mut console = ScriptedConsole::with_actions(&[
        TableAction::None,
        TableAction::Yes,
        TableAction::No,
        TableAction::Stand,
    ]);
    let report = session.play_round(&mut console).expect("round");

    assert_eq!(report.outcome, Outcome::Push);
    assert_eq!(report.player.len(), 2);
    assert_eq!(report.dealer_play, Some(DealerPlay::Stood { score: 17 }));
    assert_eq!(console.prompts, vec![TurnPhase::PlayerTurn; 4]);
}

#[test]
fn replay_yes_plays_again_and_anything_else_stops() {
    let shoe = StackedShoe::new(vec![10, 9, 10, 7, 10, 6, 10, 8]);
    let mut session = GameSession::new(shoe);
    let mut console = ScriptedConsole::with_actions(&[
        TableAction::Stand,
        TableAction::Yes,
        TableAction::Stand,
        TableAction::Hit,
    ]);
    let tally = session.run(&mut console).expect("session");

    assert_eq!(session.rounds_played(), 2);
    assert_eq!(tally.rounds, 2);
    assert_eq!(console.outcomes(), vec![Outcome::Win, Outcome::Lose]);
    assert_eq!(
        console.prompts,
        vec![
            TurnPhase::PlayerTurn,
            TurnPhase::ReplayPrompt,
            TurnPhase::PlayerTurn,
            TurnPhase::ReplayPrompt,
        ]
    );
}

#[test]
fn replay_no_ends_after_one_round() {
    let mut session = GameSession::new(StackedShoe::new(vec![10, 10, 10, 10]));
    let mut console = ScriptedConsole::with_actions(&[TableAction::Stand, TableAction::No]);
    let tally = session.run(&mut console).expect("session");
    assert_eq!(tally.pushes, 1);
    assert_eq!(console.events.last(), Some(&Event::ReplayPrompted));
}

#[test]
fn closed_input_surfaces_as_error() {
    let mut session = GameSession::new(StackedShoe::new(vec![10, 2, 10, 7]));
    let mut console = ScriptedConsole::default();
    let err = session.play_round(&mut console).expect_err("no input");
    assert!(matches!(err, TableError::InputClosed(TurnPhase::PlayerTurn)));
}

#[test]
fn deal_gives_two_cards_each_in_order() {
    let mut session = GameSession::new(StackedShoe::new(vec![2, 3, 4, 5]));
    let state = session.deal();
    assert_eq!(state.player.cards(), &[2, 3]);
    assert_eq!(state.dealer.cards(), &[4, 5]);
    assert!(!state.player_busted);
}

#[test]
fn events_arrive_in_round_order() {
    let mut session = GameSession::new(StackedShoe::new(vec![10, 9, 2, 3, 10, 4]));
    let mut console = ScriptedConsole::with_actions(&[TableAction::Stand]);
    session.play_round(&mut console).expect("round");

    assert_eq!(
        console.events,
        vec![
            Event::RoundStarted { round: 1 },
            Event::CardDealt { role: Role::Player, value: 10 },
            Event::CardDealt { role: Role::Player, value: 9 },
            Event::CardDealt { role: Role::Dealer, value: 2 },
            Event::CardDealt { role: Role::Dealer, value: 3 },
            Event::PlayerTurnStarted,
            Event::PlayerStood { score: 19 },
            Event::DealerDrew { value: 10, score: 15 },
            Event::DealerDrew { value: 4, score: 19 },
            Event::DealerFinished { score: 19 },
            Event::RoundSettled {
                outcome: Outcome::Push,
                player: 19,
                dealer: 19
            },
        ]
    );
}
