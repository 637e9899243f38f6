//! Stateless UI rendering for the game and its move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use time_travel_tictactoe::{GameStatus, Player, Position, Square};

use super::app::{App, Focus};

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, main[0], app);
    draw_moves(frame, main[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(
        "1-9/arrows+enter: play  tab: board/moves  s: sort  r: restart  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Board;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
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

    let winning = app.session().winning_line();
    for (row, rect) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, rect, app, row, winning.as_ref(), focused);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    row: usize,
    winning: Option<&[Position; 3]>,
    focused: bool,
) {
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

    for (col, rect) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            let in_line = winning.is_some_and(|line| line.contains(&pos));
            let has_cursor = focused && pos == app.cursor();
            draw_cell(frame, rect, app.session().current_board().get(pos), pos, in_line, has_cursor);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    in_winning_line: bool,
    has_cursor: bool,
) {
    let (symbol, base_style) = match square {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Only the three cells of the completed line are highlighted; the cursor
    // underlines a winning cell instead of repainting it.
    let style = match (in_winning_line, has_cursor) {
        (true, true) => base_style
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base_style.bg(Color::Green).fg(Color::Black),
        (false, true) => base_style.bg(Color::White).fg(Color::Black),
        (false, false) => base_style,
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Moves ({})", app.sort_order()))
        .border_style(border_style(focused));

    let items: Vec<ListItem> = app
        .move_list()
        .into_iter()
        .map(|row| {
            let style = if row.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(row.label, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_row()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.session().status();
    let color = match status {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress(_) => Color::Yellow,
    };

    let mut spans = vec![Span::styled(status.to_string(), Style::default().fg(color))];
    if let Some(message) = app.message() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
    }

    let status_text = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
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
    use time_travel_tictactoe::TuiConfig;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(&TuiConfig::default());
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("You are at move #1"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(&TuiConfig::default());
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(render(&app).contains("Winner: X"));
    }

    #[test]
    fn test_highlights_exactly_the_winning_line() {
        let mut app = App::new(&TuiConfig::default());
        // X: 1, 2, 9, 3 (top row); O: 4, 5, 7. The X on 9 is off the line.
        for key in ['1', '4', '2', '5', '9', '7', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.session().status(), GameStatus::Won(Player::X));

        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();

        let board_x: Vec<_> = buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X")
            .filter(|cell| cell.bg == Color::Green || cell.fg == Color::Blue)
            .collect();
        let highlighted = board_x.iter().filter(|c| c.bg == Color::Green).count();
        let plain = board_x.iter().filter(|c| c.bg != Color::Green).count();
        assert_eq!(highlighted, 3);
        assert_eq!(plain, 1);

        // The cursor sits on the last cell played and stays green.
        let underlined = board_x
            .iter()
            .filter(|c| c.bg == Color::Green && c.modifier.contains(Modifier::UNDERLINED))
            .count();
        assert_eq!(underlined, 1);
    }
}
