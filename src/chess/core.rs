//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::mem;

use anyhow::bail;
use arrayvec::ArrayVec;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Upper bound for the number of moves available to one side: a king has at
/// most 8 destinations, a rook 14, each bishop 13 and each knight 8.
pub const MAX_MOVES: usize = 64;

/// Moves available to the side to move. The bound is exact for the fixed army
/// of the variant, so the list never allocates.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Represents a move of a single piece from one square to another. A move is
/// the only way to mutate [`crate::chess::game::Game`] and change the board
/// state. There are no special moves in this variant: capturing is simply
/// moving onto a square occupied by an opponent's piece.
///
/// The textual form is the same as in UCI: source and destination squares
/// concatenated.
///
/// ```
/// use kingrace::chess::core::{Move, Square};
///
/// let rook_lift = Move::from_uci("a2a7").unwrap();
/// assert_eq!(rook_lift, Move::new(Square::A2, Square::A7));
/// assert_eq!(rook_lift.to_string(), "a2a7");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// Square the piece is leaving.
    pub from: Square,
    /// Square the piece lands on.
    pub to: Square,
}

impl Move {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parses a move from the concatenated source and destination squares.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly two valid squares.
    pub fn from_uci(input: &str) -> anyhow::Result<Self> {
        let (from, to) = match (input.get(..2), input.get(2..)) {
            (Some(from), Some(to)) if input.len() == 4 => (from, to),
            _ => bail!("move should be two squares (e.g. a2a7), got '{input}'"),
        };
        Ok(Self::new(from.try_into()?, to.try_into()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use kingrace::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use kingrace::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Returns the square located `file_delta` columns to the right and
    /// `rank_delta` rows up, or [`None`] if it is off the board.
    #[must_use]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = u8::try_from(self.file() as i8 + file_delta).ok()?;
        let rank = u8::try_from(self.rank() as i8 + rank_delta).ok()?;
        Some(Self::new(
            File::try_from(file).ok()?,
            Rank::try_from(rank).ok()?,
        ))
    }

    /// Iterates over all squares, rank by rank, starting from [`Square::A1`].
    pub fn iter() -> impl Iterator<Item = Self> {
        Rank::iter().flat_map(|rank| File::iter().map(move |file| Self::new(file, rank)))
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        // Exclusive range patterns are not allowed:
        // https://github.com/rust-lang/rust/issues/37854
        const MAX_INDEX: u8 = BOARD_SIZE - 1;
        match square_index {
            0..=MAX_INDEX => Ok(unsafe { mem::transmute::<u8, Self>(square_index) }),
            _ => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses algebraic notation: lowercase file letter followed by the rank
    /// digit. Anything else (including uppercase files and surrounding
    /// whitespace) is rejected.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got '{square}' with {} chars",
                square.chars().count()
            ),
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// Iterates over files from [`File::A`] to [`File::H`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute::<u8, Self>(file as u8 - b'a') }),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match column {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(column) }),
            _ => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
///
/// Both kings start on [`Rank::One`] and race towards [`Rank::Eight`].
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    /// Iterates over ranks from [`Rank::One`] to [`Rank::Eight`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute::<u8, Self>(rank as u8 - b'1') }),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match row {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(row) }),
            _ => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// The game is played between two players: White (having the advantage of the
/// first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Human-readable color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Pieces of the variant. Each player has one king, one rook, two bishops and
/// two knights; there are no queens and no pawns.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    /// Number of pieces of this kind each player starts with. A position can
    /// never have more, because pieces are only ever removed from the board.
    #[must_use]
    pub const fn starting_count(self) -> usize {
        match self {
            Self::King | Self::Rook => 1,
            Self::Bishop | Self::Knight => 2,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
        })
    }
}

/// Represents a specific piece owned by a player and the square it stands on.
///
/// The board is the source of truth for piece placement: the square stored
/// here mirrors the cell holding the piece and is updated whenever the piece
/// moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
    pub(super) square: Square,
}

impl Piece {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(owner: Player, kind: PieceKind, square: Square) -> Self {
        Self {
            owner,
            kind,
            square,
        }
    }

    /// Square the piece currently stands on.
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    /// Creates a piece from its FEN symbol: uppercase for White, lowercase for
    /// Black.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is not one of "KRBNkrbn".
    pub fn from_symbol(symbol: char, square: Square) -> anyhow::Result<Self> {
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            _ => bail!("piece symbol should be within \"KRBNkrbn\", got '{symbol}'"),
        };
        Ok(Self::new(owner, kind, square))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.owner {
            // White player: uppercase symbols.
            Player::White => f.write_str(&symbol.to_ascii_uppercase()),
            // Black player: lowercase symbols.
            Player::Black => f.write_str(&symbol),
        }
    }
}
