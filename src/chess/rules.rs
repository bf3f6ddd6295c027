//! Movement patterns of the individual piece kinds.
//!
//! The checks here are purely geometric: they answer whether a piece of the
//! given kind can travel between two squares on the given board, taking
//! obstruction into account for the sliding pieces. Whose turn it is and what
//! stands on the destination square is decided by
//! [`crate::chess::game::Game`].

use crate::chess::board::Board;
use crate::chess::core::{PieceKind, Square};

impl PieceKind {
    /// Checks whether a piece of this kind can move from `from` to `to`.
    ///
    /// - King steps to any adjacent square.
    /// - Knight jumps in an "L": two squares along one axis and one along the
    ///   other. It is never blocked.
    /// - Bishop slides diagonally, Rook slides along a rank or a file. Neither
    ///   can pass over an occupied square, no matter who owns it.
    ///
    /// A zero-length move is geometrically legal only for the King; the game
    /// rejects it before consulting the piece.
    ///
    /// ```
    /// use kingrace::chess::board::Board;
    /// use kingrace::chess::core::{PieceKind, Square};
    ///
    /// let board = Board::starting();
    /// // The rook on a2 has a clear file in front of it.
    /// assert!(PieceKind::Rook.is_legal(Square::A2, Square::A8, &board));
    /// // The bishop on b1 is hemmed in by the knight on c2.
    /// assert!(!PieceKind::Bishop.is_legal(Square::B1, Square::D3, &board));
    /// ```
    #[must_use]
    pub fn is_legal(self, from: Square, to: Square, board: &Board) -> bool {
        let file_delta = to.file() as i8 - from.file() as i8;
        let rank_delta = to.rank() as i8 - from.rank() as i8;
        match self {
            Self::King => file_delta.abs() <= 1 && rank_delta.abs() <= 1,
            Self::Knight => matches!(
                (file_delta.abs(), rank_delta.abs()),
                (1, 2) | (2, 1)
            ),
            Self::Bishop => {
                file_delta != 0
                    && file_delta.abs() == rank_delta.abs()
                    && is_path_clear(from, to, board)
            },
            Self::Rook => (file_delta == 0) != (rank_delta == 0) && is_path_clear(from, to, board),
        }
    }
}

/// Returns the squares strictly between `from` and `to` when they share a
/// rank, a file or a diagonal; both ends are excluded. For any other pair of
/// squares (and for adjacent or equal squares) nothing is returned.
pub fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let file_delta = to.file() as i8 - from.file() as i8;
    let rank_delta = to.rank() as i8 - from.rank() as i8;
    let aligned =
        file_delta == 0 || rank_delta == 0 || file_delta.abs() == rank_delta.abs();
    let distance = if aligned {
        file_delta.abs().max(rank_delta.abs())
    } else {
        0
    };
    let (file_step, rank_step) = (file_delta.signum(), rank_delta.signum());
    (1..distance).filter_map(move |step| from.offset(file_step * step, rank_step * step))
}

fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    between(from, to).all(|square| !board.is_occupied(square))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::{Piece, Player};

    const ALL_KINDS: [PieceKind; 4] = [
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    fn deltas(from: Square, to: Square) -> (i8, i8) {
        (
            to.file() as i8 - from.file() as i8,
            to.rank() as i8 - from.rank() as i8,
        )
    }

    fn board_with(squares: &[Square]) -> Board {
        let mut board = Board::empty();
        for &square in squares {
            board.put(Piece::new(Player::Black, PieceKind::Knight, square));
        }
        board
    }

    fn destinations(kind: PieceKind, from: Square, board: &Board) -> Vec<String> {
        Square::iter()
            .filter(|&to| to != from && kind.is_legal(from, to, board))
            .map(|to| to.to_string())
            .collect()
    }

    #[test]
    fn between_squares() {
        assert_eq!(
            between(Square::A1, Square::A5).collect::<Vec<_>>(),
            vec![Square::A2, Square::A3, Square::A4]
        );
        assert_eq!(
            between(Square::H8, Square::E5).collect::<Vec<_>>(),
            vec![Square::G7, Square::F6]
        );
        assert_eq!(
            between(Square::C3, Square::F3).collect::<Vec<_>>(),
            vec![Square::D3, Square::E3]
        );
        assert_eq!(
            between(Square::B2, Square::A3).collect::<Vec<_>>(),
            Vec::<Square>::new()
        );
        assert_eq!(between(Square::B2, Square::B2).count(), 0);
        // Not on one line.
        assert_eq!(between(Square::A1, Square::B3).count(), 0);
        assert_eq!(between(Square::A1, Square::H7).count(), 0);
    }

    #[test]
    fn king_steps() {
        let board = Board::empty();
        assert_eq!(
            destinations(PieceKind::King, Square::E4, &board),
            vec!["d3", "e3", "f3", "d4", "f4", "d5", "e5", "f5"]
        );
        assert_eq!(
            destinations(PieceKind::King, Square::A1, &board),
            vec!["b1", "a2", "b2"]
        );
        // Only the engine forbids standing still.
        assert!(PieceKind::King.is_legal(Square::E4, Square::E4, &board));
        assert!(!PieceKind::King.is_legal(Square::E4, Square::E6, &board));
    }

    #[test]
    fn knight_jumps() {
        // Knights jump over anything.
        let board = board_with(&[
            Square::D3,
            Square::D4,
            Square::D5,
            Square::E3,
            Square::E5,
            Square::F3,
            Square::F4,
            Square::F5,
        ]);
        assert_eq!(
            destinations(PieceKind::Knight, Square::E4, &board),
            vec!["d2", "f2", "c3", "g3", "c5", "g5", "d6", "f6"]
        );
        assert_eq!(
            destinations(PieceKind::Knight, Square::H8, &Board::empty()),
            vec!["g6", "f7"]
        );
    }

    #[test]
    fn geometry_on_empty_board() {
        let board = Board::empty();
        for from in Square::iter() {
            for to in Square::iter() {
                let (file_delta, rank_delta) = deltas(from, to);
                let (file_distance, rank_distance) = (file_delta.abs(), rank_delta.abs());
                assert_eq!(
                    PieceKind::Bishop.is_legal(from, to, &board),
                    file_distance == rank_distance && file_distance != 0,
                    "bishop {from}{to}"
                );
                assert_eq!(
                    PieceKind::Rook.is_legal(from, to, &board),
                    (file_distance == 0) != (rank_distance == 0),
                    "rook {from}{to}"
                );
                assert_eq!(
                    PieceKind::Knight.is_legal(from, to, &board),
                    file_distance * rank_distance == 2,
                    "knight {from}{to}"
                );
                assert_eq!(
                    PieceKind::King.is_legal(from, to, &board),
                    file_distance.max(rank_distance) <= 1,
                    "king {from}{to}"
                );
            }
        }
    }

    #[test]
    fn sliders_are_blocked() {
        // Any single piece strictly between the ends of a line blocks it, and
        // pieces standing on the ends themselves never do.
        for kind in [PieceKind::Bishop, PieceKind::Rook] {
            for from in Square::iter() {
                for to in Square::iter() {
                    if !kind.is_legal(from, to, &Board::empty()) {
                        continue;
                    }
                    assert!(kind.is_legal(from, to, &board_with(&[from, to])));
                    for blocker in between(from, to) {
                        assert!(
                            !kind.is_legal(from, to, &board_with(&[blocker])),
                            "{kind:?} {from}{to} over {blocker}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sliders_in_starting_position() {
        // Occupied destinations are still reachable: landing on own pieces is
        // rejected by the game, not by the geometry.
        let board = Board::starting();
        assert_eq!(
            destinations(PieceKind::Rook, Square::A2, &board),
            vec!["a1", "b2", "a3", "a4", "a5", "a6", "a7", "a8"]
        );
        assert_eq!(
            destinations(PieceKind::Rook, Square::H2, &board),
            vec!["h1", "g2", "h3", "h4", "h5", "h6", "h7", "h8"]
        );
        assert_eq!(
            destinations(PieceKind::Bishop, Square::B2, &board),
            vec!["a1", "c1", "a3", "c3", "d4", "e5", "f6", "g7", "h8"]
        );
        assert_eq!(
            destinations(PieceKind::Bishop, Square::G1, &board),
            vec!["f2", "h2"]
        );
    }

    #[test]
    fn only_king_stands_still() {
        let board = Board::starting();
        for kind in ALL_KINDS {
            for square in Square::iter() {
                assert_eq!(
                    kind.is_legal(square, square, &board),
                    kind == PieceKind::King
                );
            }
        }
    }
}
