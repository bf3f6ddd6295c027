//! Parsing of the console commands understood by [`super::Engine`].

use itertools::Itertools;

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    /// `move <from> <to>` or `move <from><to>`. The squares are not validated
    /// here: malformed notation is just another illegal move.
    Move {
        from: String,
        to: String,
    },
    /// `moves`: list the legal moves of the side to move.
    Moves,
    /// `d`: dump the board.
    Display,
    State,
    Turn,
    /// `position startpos` or `position fen <placement> <side>`.
    SetPosition {
        fen: Option<String>,
    },
    NewGame,
    Quit,
    Unknown(String),
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts = input.split_whitespace().collect_vec();
        match parts.as_slice() {
            ["move", from, to] => Self::Move {
                from: (*from).to_string(),
                to: (*to).to_string(),
            },
            ["move", squares] => match (squares.get(..2), squares.get(2..)) {
                (Some(from), Some(to)) => Self::Move {
                    from: from.to_string(),
                    to: to.to_string(),
                },
                _ => Self::Unknown(parts.join(" ")),
            },
            ["moves"] => Self::Moves,
            ["d"] => Self::Display,
            ["state"] => Self::State,
            ["turn"] => Self::Turn,
            ["position", "startpos"] => Self::SetPosition { fen: None },
            ["position", "fen", fen @ ..] if !fen.is_empty() => Self::SetPosition {
                fen: Some(fen.join(" ")),
            },
            ["new"] => Self::NewGame,
            ["quit"] => Self::Quit,
            _ => Self::Unknown(parts.join(" ")),
        }
    }
}
