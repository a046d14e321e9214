//! Board and match engine for a two-player game on a chessboard.
//!
//! [`boardgame`] provides the game-agnostic board: grid addressing, piece
//! placement and removal. [`chess`] builds the chess pieces and their movement
//! rules on top of it, together with [`chess::ChessMatch`] which validates and
//! executes moves. [`shell`] is a small interactive front-end used by the
//! binary.

pub mod boardgame;
pub mod chess;
pub mod shell;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the version, build type and whether the build is clean on startup.
pub fn print_system_info() {
    println!("Chess system {}", version());
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
