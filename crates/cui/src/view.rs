use crate::app::Board;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Line, Stylize};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use termjack_core::text::{self, display_score, prompt_choices};

pub const BOARD_WIDTH: u16 = 48;
pub const BOARD_HEIGHT: u16 = 16;

pub fn draw(frame: &mut Frame, board: &Board) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(BOARD_HEIGHT + 1),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], board);

    let table = centered_rect(BOARD_WIDTH, BOARD_HEIGHT + 1, root[1]);
    let table_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BOARD_HEIGHT), Constraint::Length(1)])
        .split(table);
    draw_table(frame, table_rows[0], board);
    draw_prompt(frame, table_rows[1], board);

    draw_events(frame, root[2], board);
}

fn draw_header(frame: &mut Frame, area: Rect, board: &Board) {
    let title = format!(
        "termjack | Round {} | Hint: {}",
        board.round,
        board.next_hint()
    );
    let summary = format!(
        "Seed {} | Shoe {} | Won {}  Lost {}  Pushed {}",
        board.seed_label(),
        board.shoe_label(),
        board.tally.wins,
        board.tally.losses,
        board.tally.pushes
    );
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph =
        Paragraph::new(vec![Line::from(title.bold()), Line::from(summary)]).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_table(frame: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(text::DEALER).centered())
        .title_bottom(Line::from(text::PLAYER).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner);

    let mut dealer = Vec::new();
    if let Some(hand) = board.dealer.as_ref() {
        dealer.push(Line::from(display_score(hand, board.dealer_hidden)));
        dealer.push(Line::from(board.dealer_cards_label()));
    }
    if let Some(note) = board.dealer_note {
        dealer.push(Line::from(note.italic()));
    }
    frame.render_widget(
        Paragraph::new(dealer).alignment(Alignment::Center),
        rows[0],
    );

    let mut middle: Vec<Line> = Vec::new();
    let padding = (rows[1].height as usize).saturating_sub(board.banners.len()) / 2;
    middle.extend(std::iter::repeat(Line::from("")).take(padding));
    middle.extend(board.banners.iter().map(|banner| Line::from((*banner).bold())));
    frame.render_widget(
        Paragraph::new(middle).alignment(Alignment::Center),
        rows[1],
    );

    let mut player = Vec::new();
    if let Some(note) = board.turn_note {
        player.push(Line::from(note.italic()));
    }
    if let Some(hand) = board.player.as_ref() {
        player.push(Line::from(board.player_cards_label()));
        player.push(Line::from(display_score(hand, false)));
    }
    frame.render_widget(
        Paragraph::new(player).alignment(Alignment::Center),
        rows[2],
    );
}

fn draw_prompt(frame: &mut Frame, area: Rect, board: &Board) {
    let Some(phase) = board.prompt else {
        return;
    };
    let [left, right] = prompt_choices(phase);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    frame.render_widget(Paragraph::new(left), halves[0]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}

fn draw_events(frame: &mut Frame, area: Rect, board: &Board) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = board.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = board
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
