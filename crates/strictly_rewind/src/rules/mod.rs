//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`BoardSnapshot`](crate::BoardSnapshot).
//! Rules never look at history; the session decides which snapshot to ask
//! about.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinResult, detect};
