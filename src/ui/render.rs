use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HELP: &str = "↑/↓ set-point   +/- prediction variance   q quit";

/// Columns taken by the label, brackets, value and panel border around a bar.
pub const GAUGE_CHROME: u16 = 26;

pub fn draw_ui(f: &mut Frame, gauge_lines: Vec<String>, hud_info: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Min(0),    // Plant panel
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    let hud = Paragraph::new(Span::styled(
        hud_info,
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    let text: Vec<Line> = gauge_lines
        .into_iter()
        .map(|s| Line::from(Span::raw(s)))
        .collect();
    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" plant "))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(panel, chunks[1]);

    let help = Paragraph::new(Span::styled(HELP, Style::default().fg(Color::DarkGray)));
    f.render_widget(help, chunks[2]);
}
