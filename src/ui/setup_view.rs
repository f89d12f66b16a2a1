use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::label_color;

/// The two color fields shown before a match.
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub colors: [String; 2],
    pub focus: usize,
    pub error: Option<String>,
}

impl SetupForm {
    pub fn new(first_color: &str, second_color: &str) -> Self {
        SetupForm {
            colors: [first_color.to_string(), second_color.to_string()],
            focus: 0,
            error: None,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = 1 - self.focus;
    }

    pub fn push(&mut self, c: char) {
        self.error = None;
        self.colors[self.focus].push(c);
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.colors[self.focus].pop();
    }
}

pub fn render(frame: &mut Frame, form: &SetupForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Player 1
            Constraint::Length(3), // Player 2
            Constraint::Length(3), // Error
            Constraint::Min(3),    // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Choose player colors")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(title, chunks[0]);

    for (i, area) in [chunks[1], chunks[2]].into_iter().enumerate() {
        render_field(frame, form, i, area);
    }

    let error = Paragraph::new(form.error.as_deref().unwrap_or(""))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(error, chunks[3]);

    let controls = Paragraph::new("Tab/↑/↓: Switch field  |  Enter: Start  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[4]);
}

fn render_field(frame: &mut Frame, form: &SetupForm, index: usize, area: Rect) {
    let value = &form.colors[index];
    let focused = form.focus == index;

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(label_color(value))),
        Span::raw(value.clone()),
    ];
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Player {} color", index + 1)),
    );

    frame.render_widget(field, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = SetupForm::new("red", "");
        form.toggle_focus();
        for c in "blue".chars() {
            form.push(c);
        }
        form.backspace();
        assert_eq!(form.colors, ["red".to_string(), "blu".to_string()]);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = SetupForm::new("red", "red");
        form.error = Some("players must pick different colors".to_string());
        form.backspace();
        assert!(form.error.is_none());
    }
}
