use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{SetupField, SetupForm};

pub fn render(frame: &mut Frame, form: &SetupForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),   // Form
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new("New Match")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect-N"));
    frame.render_widget(header, chunks[0]);

    let rows = [
        (SetupField::Rows, "Rows", form.rows.to_string()),
        (SetupField::Cols, "Columns", form.cols.to_string()),
        (
            SetupField::WinLength,
            "Win length",
            format!("{} (max {})", form.win_length, form.max_win_length()),
        ),
        (SetupField::Mode, "Mode", form.mode.label().to_string()),
        (
            SetupField::Difficulty,
            "AI difficulty",
            form.difficulty.name().to_string(),
        ),
    ];

    let mut lines = vec![Line::from("")];
    for (field, label, value) in rows {
        let selected = field == form.field;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{label:<14}"), style),
            Span::styled(format!("< {value} >"), style),
        ]));
    }

    let form_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    frame.render_widget(form_widget, chunks[1]);

    let controls = Paragraph::new(vec![
        Line::from("↑/↓: Select field  |  ←/→: Change value"),
        Line::from("Enter: Start game  |  Q: Quit"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}
