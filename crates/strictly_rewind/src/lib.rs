//! Strictly Rewind - tic-tac-toe with time travel
//!
//! A [`GameSession`] records every board position of a game and lets the
//! caller move a cursor back to any of them. Playing from an earlier
//! position discards the moves that followed it.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a single [`BoardSnapshot`]
//! - **Session**: history, cursor, derived status and move-list entries
//! - **Invariants**: history properties checked in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameSession, GameStatus, Mark, Position};
//!
//! let mut session = GameSession::new();
//! session.play(Position::TopLeft);
//! session.play(Position::Center);
//! assert_eq!(session.status(), GameStatus::NextPlayer(Mark::X));
//!
//! session.jump_to(1).unwrap();
//! assert_eq!(session.status().to_string(), "Next Player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod moves;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{BoardSnapshot, Cell, Mark};

// Crate-level exports - Rules
pub use rules::{WINNING_LINES, WinResult, detect};

// Crate-level exports - Session
pub use error::{IllegalMove, PlayOutcome, SessionError};
pub use moves::{MoveControl, MoveDescriptor, SortOrder};
pub use session::{GameSession, GameStatus};

// Crate-level exports - Invariants
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SessionInvariants};
