use crate::game::{Placement, Player, Renderer};

/// What the game screen shows besides the board itself. Fed by the
/// controller through [`Renderer`]; read back each frame.
#[derive(Debug, Default)]
pub struct Display {
    last_placed: Option<Placement>,
    announcement: Option<String>,
    notice: Option<String>,
}

impl Display {
    pub fn last_placed(&self) -> Option<Placement> {
        self.last_placed
    }

    /// End-of-game announcement wins over a transient notice
    pub fn message(&self) -> Option<&str> {
        self.announcement.as_deref().or(self.notice.as_deref())
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

impl Renderer for Display {
    fn place_piece(&mut self, _player: &Player, placement: Placement) {
        self.last_placed = Some(placement);
    }

    fn announce_end(&mut self, message: &str) {
        self.announcement = Some(message.to_string());
    }

    fn clear_board(&mut self) {
        self.last_placed = None;
        self.announcement = None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;

    #[test]
    fn test_announcement_outlives_notice_changes() {
        let mut display = Display::default();
        display.set_notice("hello");
        display.announce_end("Tie!");
        display.clear_notice();
        assert_eq!(display.message(), Some("Tie!"));
    }

    #[test]
    fn test_clear_board_resets_everything() {
        let mut display = Display::default();
        let player = Player::new(Seat::First, "red");
        display.place_piece(&player, Placement { row: 5, col: 0 });
        display.announce_end("Player red won!");
        display.clear_board();
        assert_eq!(display.last_placed(), None);
        assert_eq!(display.message(), None);
    }
}
