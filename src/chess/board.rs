//! Square-centric ("mailbox") board representation. The armies are tiny (at
//! most 12 pieces), so a flat array of optional pieces indexed by [`Square`]
//! answers "what stands here" in constant time and is the single source of
//! truth for piece placement.

use std::fmt::{self, Write};

use crate::chess::core::{File, Piece, PieceKind, Player, Rank, Square, BOARD_SIZE};

/// Initial placement of both armies: kings in the corners of the first rank
/// with rooks above them, bishops and knights next to them.
#[rustfmt::skip]
const STARTING_PIECES: [(Player, PieceKind, Square); 12] = [
    (Player::White, PieceKind::King, Square::A1),
    (Player::White, PieceKind::Rook, Square::A2),
    (Player::White, PieceKind::Bishop, Square::B1),
    (Player::White, PieceKind::Bishop, Square::B2),
    (Player::White, PieceKind::Knight, Square::C1),
    (Player::White, PieceKind::Knight, Square::C2),
    (Player::Black, PieceKind::King, Square::H1),
    (Player::Black, PieceKind::Rook, Square::H2),
    (Player::Black, PieceKind::Bishop, Square::G1),
    (Player::Black, PieceKind::Bishop, Square::G2),
    (Player::Black, PieceKind::Knight, Square::F1),
    (Player::Black, PieceKind::Knight, Square::F2),
];

/// 8x8 grid of cells, each holding at most one [`Piece`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the board with the fixed initial placement.
    ///
    /// ```
    /// use kingrace::chess::board::Board;
    ///
    /// assert_eq!(Board::starting().to_string(), "8/8/8/8/8/8/RBN2nbr/KBN2nbk");
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (owner, kind, square) in STARTING_PIECES {
            board.put(Piece::new(owner, kind, square));
        }
        board
    }

    /// Returns the piece standing on the square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn is_occupied(&self, square: Square) -> bool {
        self.at(square).is_some()
    }

    /// Iterates over the pieces on the board in square order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    /// Counts pieces of given kind owned by the player.
    #[must_use]
    pub fn count(&self, owner: Player, kind: PieceKind) -> usize {
        self.pieces()
            .filter(|piece| piece.owner == owner && piece.kind == kind)
            .count()
    }

    /// Checks whether the player's king stands anywhere on the rank.
    #[must_use]
    pub fn has_king_on(&self, owner: Player, rank: Rank) -> bool {
        File::iter().any(|file| {
            matches!(
                self.at(Square::new(file, rank)),
                Some(Piece { owner: piece_owner, kind: PieceKind::King, .. }) if piece_owner == owner
            )
        })
    }

    /// Places the piece on the square it refers to. Only used during setup:
    /// pieces are never added once the game started.
    pub(super) fn put(&mut self, piece: Piece) {
        debug_assert!(
            !self.is_occupied(piece.square),
            "Can't put piece to already occupied square"
        );
        self.squares[piece.square as usize] = Some(piece);
    }

    /// Moves the piece from one square to another, overwriting (capturing)
    /// whatever stood on the destination. Keeps the square stored in the
    /// piece in sync with its cell. Returns the captured piece.
    pub(super) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        debug_assert!(
            self.is_occupied(from),
            "Can't move a piece from an empty square"
        );
        let mut piece = self.squares[from as usize].take()?;
        piece.square = to;
        self.squares[to as usize].replace(piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    /// Prints piece placement in the Forsyth-Edwards Notation: ranks from 8 to
    /// 1 separated by '/', digits for runs of empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut empty_squares = 0;
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank != Rank::One {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    write!(f, "{SQUARE_SEPARATOR}")?;
                }
            }
            if rank != Rank::One {
                write!(f, "{LINE_SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
