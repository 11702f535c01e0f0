use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Board, Cell, Player};

use super::app::Match;

const CIRCLE_COLOR: Color = Color::Blue;
const CROSS_COLOR: Color = Color::Red;
const LAST_MOVE_COLOR: Color = Color::Yellow;

pub fn render(frame: &mut Frame, game: &Match) {
    let board_height = game.state.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_height),
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, chunks[1]);
    render_message(frame, &game.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Match, area: ratatui::layout::Rect) {
    let current = game.state.current_player();
    let color = player_color(current);

    let status = if game.state.is_terminal() {
        format!("Game Over  |  {}", game.mode.label())
    } else {
        format!(
            "Current Player: {} ({})  |  {}  |  Connect {}",
            current.name(),
            current.symbol(),
            game.mode.label(),
            game.state.rules().win_length()
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect-N"));

    frame.render_widget(header, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Circle => CIRCLE_COLOR,
        Player::Cross => CROSS_COLOR,
    }
}

fn cell_span(board: &Board, row: usize, col: usize, last_move: Option<(usize, usize)>) -> Span<'static> {
    let cell = board.get(row, col);
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Circle => (" O ", CIRCLE_COLOR),
        Cell::Cross => (" X ", CROSS_COLOR),
    };
    // The most recent drop is highlighted
    let color = if last_move == Some((row, col)) {
        LAST_MOVE_COLOR
    } else {
        color
    };
    Span::styled(symbol, Style::default().fg(color))
}

fn render_board(frame: &mut Frame, game: &Match, area: ratatui::layout::Rect) {
    let board = game.state.board();
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == game.selected_column {
            col_line.push(Span::styled(
                format!("{:^3}", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!("{:^3}", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(cols * 3))));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            row_spans.push(cell_span(board, row, col, game.state.last_move()));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(cols * 3))));

    // Selection indicator under the board
    let mut indicator = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == game.selected_column {
            indicator.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
