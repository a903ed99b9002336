//! Stateless UI rendering for the board and the move list.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_tictactoe::{Player, Position, Square, Status};

const TITLE: &str = "Strictly Time Travel";

const HELP: &str = "arrows move · enter play/jump · 1-9 play · tab switch · [ ] step · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(4), // Status
            Constraint::Min(13),   // Board + moves
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(24)])
        .split(chunks[2]);
    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.game().status();
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::NextPlayer(_) => Color::Yellow,
    };

    let mut lines = vec![Line::from(Span::styled(
        status.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

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

    for (row, chunk) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, chunk);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
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

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], app, *pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let square = app.game().current_board().get(pos);

    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if app
        .game()
        .winning_line()
        .is_some_and(|line| line.contains(&pos))
    {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad vertically so the mark sits in the middle of a 3-line cell
    let symbol = format!(" {} ", square.symbol());
    let lines = vec![
        Line::from(Span::styled(" ".repeat(12), style)),
        Line::from(Span::styled(format!("{:^12}", symbol), style)),
        Line::from(Span::styled(" ".repeat(12), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .into_iter()
        .map(|entry| {
            let mut spans = vec![Span::raw(entry.label)];
            if app.show_locations()
                && let Some((player, pos)) = entry.played
            {
                let (col, row) = pos.location();
                spans.push(Span::styled(
                    format!("  {} ({}, {})", player, col, row),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let style = if entry.current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let border = if app.focus() == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Moves"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("» ");

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_new_game_screen() {
        let text = render(&App::new(true));
        assert!(text.lines().next().is_some_and(|l| l.contains("Strictly Time Travel")));
        assert!(!text.contains("Strictly Games"));
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to game start"));
        assert!(!text.contains("Go to move #1"));
    }

    #[test]
    fn test_moves_and_locations_rendered() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('3'));

        let text = render(&app);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to move #1  X (2, 2)"));
        assert!(text.contains("Go to move #2  O (3, 1)"));
    }

    #[test]
    fn test_winner_and_notice_rendered() {
        let mut app = App::new(false);
        for key in ['1', '2', '4', '3', '7', '9'] {
            app.handle_key(KeyCode::Char(key));
        }

        let text = render(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Game is already won by X"));
        assert!(text.contains("Go to move #5"));
        assert!(!text.contains("Go to move #6"));
        assert!(!text.contains("(1, 3)"));
    }
}
