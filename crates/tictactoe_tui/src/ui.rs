//! Stateless UI rendering for the game screen and the names dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::{Position, Token};

use crate::app::{App, Mode};
use crate::dialog::{NameField, NamesDialog};

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Players
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status and notice
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let (one, two) = app.game().players();
    let players = Paragraph::new(Line::from(vec![
        Span::styled(one.to_string(), token_style(one.token())),
        Span::raw("  vs  "),
        Span::styled(two.to_string(), token_style(two.token())),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(players, chunks[1]);

    draw_board(frame, chunks[2], app);

    let mut status = vec![Line::from(app.status_line())];
    if let Some(notice) = app.notice() {
        status.push(Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("←↑↓→: Move | Enter/1-9: Play | r: New round | n: Names | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Mode::EditingNames(dialog) = app.mode() {
        draw_names_dialog(frame, area, app, dialog);
    }
}

fn token_style(token: Token) -> Style {
    let color = match token {
        Token::X => Color::Blue,
        Token::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let playable = app.playable();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, &playable, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, playable: &[Position], row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, playable.contains(&pos), pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, playable: bool, pos: Position) {
    let board = app.game().board();
    let winning = app
        .game()
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    // Empty cells only show their number while they can be played.
    let (symbol, base_style) = match board.get(pos) {
        None if playable => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
        Some(token) => (format!(" {} ", token), token_style(token)),
    };

    let style = if pos == *app.cursor() && matches!(app.mode(), Mode::Playing) {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_names_dialog(frame: &mut Frame, area: Rect, app: &App, dialog: &NamesDialog) {
    let popup = center_rect(area, 44, 10);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Player names")
        .style(Style::default().fg(Color::White));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let (one, two) = app.game().players();
    let fields = [
        (NameField::One, format!("Player One ({})", one.token()), dialog.name_one()),
        (NameField::Two, format!("Player Two ({})", two.token()), dialog.name_two()),
    ];
    for (chunk, (field, label, value)) in chunks.iter().zip(fields) {
        let style = if *dialog.focus() == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(value.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(input, *chunk);
    }

    let help = Paragraph::new("Tab: Switch | Enter: Confirm | Esc: Cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
