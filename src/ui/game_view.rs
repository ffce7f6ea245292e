use crate::config::DisplayConfig;
use crate::game::{Board, Game, Player, Status, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game: &Game,
    config: &DisplayConfig,
    cursor: (usize, usize),
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + history
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(28)])
        .split(chunks[1]);

    render_header(frame, game, config, chunks[0]);
    render_board(frame, game, config, cursor, columns[0]);
    render_history(frame, game, columns[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_label(config: &DisplayConfig, player: Player) -> String {
    match player {
        Player::Red => config.red_label.clone(),
        Player::Blue => config.blue_label.clone(),
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Blue => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, game: &Game, config: &DisplayConfig, area: Rect) {
    let view = game.current_view();

    let (status, color) = match view.status {
        Status::InProgress(player) => (
            format!("Next player: {}", player_label(config, player)),
            player_color(player),
        ),
        Status::Won(player) => (
            format!("Winner: {}", player_label(config, player)),
            player_color(player),
        ),
        Status::Draw => ("Draw.".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game: &Game,
    config: &DisplayConfig,
    cursor: (usize, usize),
    area: Rect,
) {
    let view = game.current_view();
    let mut lines = Vec::new();

    // Top border
    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let index = Board::index(row, col);
            let cell = view.board.cell(index);

            let (symbol, color) = match cell.player() {
                None => (" . ", Color::DarkGray),
                Some(player) => (" ● ", player_color(player)),
            };

            let mut style = Style::default().fg(color);
            if config.highlight_wins
                && view
                    .winning_cells
                    .is_some_and(|cells| cells.contains(&index))
            {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            if (row, col) == cursor {
                style = style.bg(Color::DarkGray);
            }

            spans.push(Span::styled(symbol, style));
        }

        spans.push(Span::raw("║"));
        lines.push(Line::from(spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚═════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_history(frame: &mut Frame, game: &Game, area: Rect) {
    let items: Vec<ListItem> = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| {
            // Same labels as the move list the game always had:
            // one-based coordinates of the move that made each step
            let label = match snapshot.last_move() {
                Some(mv) => format!("Go to move ({}, {})", mv.row() + 1, mv.col() + 1),
                None => "Go to game start".to_string(),
            };

            let style = if step == game.step() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::styled(format!("{step:>2}. {label}"), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Time Machine"),
    );

    frame.render_widget(list, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "Arrows: Select  |  Enter: Place  |  [ / ]: Back / Forward  |  R: Restart  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
