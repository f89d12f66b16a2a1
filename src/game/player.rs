use std::fmt;

/// Which of the two players a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A competitor identified by seat and labelled with a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    color: String,
}

impl Player {
    pub fn new(seat: Seat, color: impl Into<String>) -> Self {
        Player {
            seat,
            color: color.into(),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Color label as entered on the setup screen
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.color)
    }
}
