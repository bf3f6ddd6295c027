//! Rules engine for a chess variant where both kings race to the far side of
//! the board. For more information, see [README].
//!
//! Each side has a king, a rook, two bishops and two knights placed on the
//! first two ranks. Pieces move as in standard chess (without check, castling
//! or any other special rules) and capture by moving onto an opponent's piece,
//! except that kings can never be captured. The first king to reach the eighth
//! rank wins, and Black can tie by reaching it on the very next move.
//!
//! ```
//! use kingrace::chess::game::{Game, GameState};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("a2", "a7"));
//! assert!(!game.make_move("a7", "a8"), "it is Black's turn");
//! assert_eq!(game.state(), GameState::Unfinished);
//! ```
//!
//! [README]: https://github.com/kirillbobyrev/kingrace/blob/main/README.md

pub mod chess;

mod engine;
pub use engine::Engine;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints informations about the engine version, author and GitHub repository
/// on engine startup.
pub fn print_engine_info() {
    println!("Kingrace {}", engine_version());
    println!("<https://github.com/kirillbobyrev/kingrace>");
}

/// Prints the build type and whether the build is clean on engine startup.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
