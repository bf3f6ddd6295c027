//! The game itself: board, side to move and the result. [`Game::make_move`]
//! is the only way to change it.
//!
//! Both kings start on the first rank and race towards the eighth one. The
//! first king to get there wins, except that Black, who always moves second,
//! gets one more move to answer White's arrival if its own king is a single
//! step away from the finish: reaching the eighth rank on that move ties the
//! game. There is no check: kings can move next to enemy pieces, but no king
//! can ever be captured.

use std::fmt;

use anyhow::{bail, Context};

use crate::chess::board::Board;
use crate::chess::core::{
    File,
    Move,
    MoveList,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
    BOARD_WIDTH,
};

/// Reaching this rank with the king finishes the race.
const FINISH_RANK: Rank = Rank::Eight;
/// A black king standing here when White finishes can still force a tie.
const LAST_STEP_RANK: Rank = Rank::Seven;

/// Status of the game. Everything except [`GameState::Unfinished`] is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum GameState {
    Unfinished,
    WhiteWon,
    BlackWon,
    Tie,
}

impl GameState {
    /// Whether the game is over and no more moves are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Unfinished)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unfinished => "UNFINISHED",
            Self::WhiteWon => "WHITE_WON",
            Self::BlackWon => "BLACK_WON",
            Self::Tie => "TIE",
        })
    }
}

/// A single match. Each instance is independent: there is no shared state
/// between games, and cloning a game forks it.
///
/// ```
/// use kingrace::chess::core::Player;
/// use kingrace::chess::game::{Game, GameState};
///
/// let mut game = Game::new();
/// // The king can not capture its own rook.
/// assert!(!game.make_move("a1", "a2"));
/// assert!(game.make_move("a2", "a7"));
/// assert_eq!(game.turn(), Player::Black);
/// assert_eq!(game.state(), GameState::Unfinished);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
    side_to_move: Player,
    white_finished: bool,
    black_finished: bool,
}

impl Game {
    /// Creates a game in the initial position with White to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            board: Board::empty(),
            state: GameState::Unfinished,
            side_to_move: Player::White,
            white_finished: false,
            black_finished: false,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Player whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.side_to_move
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the player's king has reached the eighth rank.
    #[must_use]
    pub const fn has_finished(&self, player: Player) -> bool {
        match player {
            Player::White => self.white_finished,
            Player::Black => self.black_finished,
        }
    }

    /// Looks up the piece on a square given in algebraic notation. Malformed
    /// notation addresses no square and yields [`None`].
    #[must_use]
    pub fn piece_at(&self, square: &str) -> Option<Piece> {
        Square::try_from(square)
            .ok()
            .and_then(|square| self.board.at(square))
    }

    /// Moves the piece standing on `from` to `to`, both given in algebraic
    /// notation ("a1" to "h8").
    ///
    /// Returns `true` if the move was made. Any problem (malformed notation,
    /// empty source square, wrong turn, illegal move or a finished game)
    /// results in `false` and leaves the game untouched. Use [`Game::play`] to
    /// learn why a move was rejected.
    #[must_use]
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        match (Square::try_from(from), Square::try_from(to)) {
            (Ok(from), Ok(to)) => self.play(Move::new(from, to)).is_ok(),
            _ => false,
        }
    }

    /// Makes the move if it is legal and updates the game state.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was rejected. The game is not modified in
    /// that case.
    pub fn play(&mut self, next_move: Move) -> anyhow::Result<()> {
        let piece = self.check_move(next_move)?;
        let captured = self.board.relocate(next_move.from, next_move.to);
        debug_assert!(
            !matches!(captured, Some(Piece { kind: PieceKind::King, .. })),
            "Kings can not be captured"
        );
        self.update_state(piece, next_move.to);
        Ok(())
    }

    /// Lists all moves [`Game::play`] would accept in the current position.
    /// The list is empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.state.is_terminal() {
            return moves;
        }
        for piece in self
            .board
            .pieces()
            .filter(|piece| piece.owner == self.side_to_move)
        {
            for to in Square::iter() {
                let candidate = Move::new(piece.square(), to);
                if self.check_move(candidate).is_ok() {
                    moves.push(candidate);
                }
            }
        }
        moves
    }

    /// Validates the move against everything except the resulting state and
    /// returns the piece that would be moved.
    fn check_move(&self, next_move: Move) -> anyhow::Result<Piece> {
        let Move { from, to } = next_move;
        if self.state.is_terminal() {
            bail!("the game is over: {}", self.state);
        }
        if from == to {
            bail!("{from} is both the source and the destination");
        }
        let Some(piece) = self.board.at(from) else {
            bail!("there is no piece on {from}");
        };
        if piece.owner != self.side_to_move {
            bail!(
                "it is {}'s turn, {from} holds a {} piece",
                self.side_to_move.name(),
                piece.owner.name()
            );
        }
        if let Some(target) = self.board.at(to) {
            if target.owner == piece.owner {
                bail!("{to} is occupied by own {}", target.kind.name());
            }
            if target.kind == PieceKind::King {
                bail!("kings can not be captured");
            }
        }
        if !piece.kind.is_legal(from, to, &self.board) {
            bail!("{} can not move from {from} to {to}", piece.kind.name());
        }
        Ok(piece)
    }

    /// Records a king reaching the finish and decides the outcome, then passes
    /// the turn. `mover` is the piece as it was before the move.
    fn update_state(&mut self, mover: Piece, to: Square) {
        if mover.kind == PieceKind::King && to.rank() == FINISH_RANK {
            match mover.owner {
                Player::White => self.white_finished = true,
                Player::Black => self.black_finished = true,
            }
        }
        self.state = match (self.white_finished, self.black_finished, mover.owner) {
            // Black gets one more move only if its king can finish with it.
            (true, false, Player::White) => {
                if self.board.has_king_on(Player::Black, LAST_STEP_RANK) {
                    GameState::Unfinished
                } else {
                    GameState::WhiteWon
                }
            },
            // Black spent its last move without finishing.
            (true, false, Player::Black) => GameState::WhiteWon,
            (false, true, Player::Black) => GameState::BlackWon,
            (true, true, Player::Black) => GameState::Tie,
            _ => GameState::Unfinished,
        };
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Parses a reduced [Forsyth-Edwards Notation]: piece placement and side to
    /// move, e.g. `8/8/8/8/8/8/RBN2nbr/KBN2nbk w` for the initial position.
    ///
    /// Pieces are `K`, `R`, `B`, `N` for White and `k`, `r`, `b`, `n` for
    /// Black. Each player needs exactly one king, can not have more pieces of
    /// any kind than in the initial position and can not start with the king
    /// already on the finish rank.
    ///
    /// NOTE: This expects properly-formatted inputs: no extra symbols or
    /// additional whitespace. Use [`Game::try_from`] for cleaning up the input
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found in the input.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_fen(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split(' ');
        let mut result = Self::empty();
        let placement = match parts.next() {
            Some(placement) if !placement.is_empty() => placement,
            _ => bail!("incorrect FEN: missing pieces placement"),
        };
        let mut rank_id = BOARD_WIDTH;
        for rank_fen in placement.split('/') {
            if rank_id == 0 {
                bail!("incorrect FEN: expected 8 ranks, got {placement}");
            }
            rank_id -= 1;
            let rank = Rank::try_from(rank_id)?;
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if file >= BOARD_WIDTH {
                    bail!("incorrect FEN: rank {rank} is longer than {BOARD_WIDTH} squares");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        file += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let square = Square::new(File::try_from(file)?, rank);
                result.board.put(
                    Piece::from_symbol(symbol, square)
                        .with_context(|| format!("incorrect FEN: rank {rank}"))?,
                );
                file += 1;
            }
            if file != BOARD_WIDTH {
                bail!("incorrect FEN: rank size should be exactly {BOARD_WIDTH}, got {rank_fen} of length {file}");
            }
        }
        if rank_id != 0 {
            bail!("incorrect FEN: there should be 8 ranks, got {placement}");
        }
        result.side_to_move = match parts.next() {
            Some(value) => value.try_into()?,
            None => bail!("incorrect FEN: missing side to move"),
        };
        if parts.next().is_some() {
            bail!("trailing symbols are not allowed in FEN");
        }
        result.validate()?;
        result.white_finished = result.board.has_king_on(Player::White, FINISH_RANK);
        Ok(result)
    }

    /// Checks that the position could arise in a game.
    fn validate(&self) -> anyhow::Result<()> {
        for player in [Player::White, Player::Black] {
            let kings = self.board.count(player, PieceKind::King);
            if kings != 1 {
                bail!("expected 1 {} king, got {kings}", player.name());
            }
            for kind in [PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
                let limit = kind.starting_count();
                let count = self.board.count(player, kind);
                if count > limit {
                    bail!(
                        "expected <= {limit} {} {}s, got {count}",
                        player.name(),
                        kind.name()
                    );
                }
            }
            // White may already be on the finish rank while Black makes its
            // last move.
            let awaiting_black = player == Player::White
                && self.side_to_move == Player::Black
                && self.board.has_king_on(Player::Black, LAST_STEP_RANK);
            if self.board.has_king_on(player, FINISH_RANK) && !awaiting_black {
                bail!(
                    "{} king can not start on the finish rank",
                    player.name()
                );
            }
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&str> for Game {
    type Error = anyhow::Error;

    /// Trims the input and strips an optional "fen " prefix before parsing it
    /// with [`Game::from_fen`].
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        Self::from_fen(input.strip_prefix("fen ").unwrap_or(input))
    }
}

impl fmt::Display for Game {
    /// Prints the position in the reduced FEN accepted by [`Game::from_fen`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", &self.board, &self.side_to_move)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", &self.board)?;
        writeln!(f, "Player to move: {:?}", &self.side_to_move)?;
        writeln!(f, "State: {}", &self.state)?;
        writeln!(f, "FEN: {self}")?;
        Ok(())
    }
}
