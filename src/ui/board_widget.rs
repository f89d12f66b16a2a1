use crate::game::{Cell, GameState, Placement, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal color for a player's label; unknown labels fall back to white.
pub fn player_color(player: &Player) -> Color {
    label_color(player.color())
}

pub fn label_color(label: &str) -> Color {
    label.trim().parse::<Color>().unwrap_or(Color::White)
}

/// Board lines: column numbers, framed grid, selection indicator.
pub fn board_lines(
    game: &GameState,
    selected_column: usize,
    last_placed: Option<Placement>,
) -> Vec<Line<'static>> {
    let board = game.board();
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    // 3 chars of padding to match "  ║"
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            let span = match board.get(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(seat) => {
                    let mut style = Style::default().fg(player_color(game.player(seat)));
                    if last_placed == Some(Placement { row, col }) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_color_parses_names_and_hex() {
        assert_eq!(label_color("red"), Color::Red);
        assert_eq!(label_color(" yellow "), Color::Yellow);
        assert_eq!(label_color("#ff8800"), Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(label_color("not a color"), Color::White);
    }

    #[test]
    fn test_board_lines_frame_every_row() {
        let game = GameState::new("red", "yellow", 5, 4);
        let lines = board_lines(&game, 0, None);
        assert_eq!(lines.len(), 4 + 4);
        let top: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(top, format!("  ╔{}╗", "═".repeat(16)));
    }

    #[test]
    fn test_board_lines_show_pieces() {
        let mut game = GameState::standard("red", "yellow");
        game.apply_move(2).unwrap();
        let lines = board_lines(&game, 2, Some(Placement { row: 5, col: 2 }));
        // Header line and top border come before the six rows.
        let bottom_row = &lines[2 + 5];
        let piece = &bottom_row.spans[1 + 2];
        assert_eq!(piece.content.as_ref(), " ● ");
        assert_eq!(piece.style.fg, Some(Color::Red));
        assert!(piece.style.add_modifier.contains(Modifier::REVERSED));
    }
}
