//! Move-list entries for navigating history.

use super::position::Position;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the move list should offer for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveControl {
    /// The entry is the displayed position; render it as inert text.
    Label,
    /// Selecting the entry jumps to this move index.
    Jump(usize),
}

/// Description of one history entry, derived from the session on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveDescriptor {
    /// Index into history (0 is the game start).
    move_index: usize,
    /// Square played by this move, `None` for the game start.
    target: Option<Position>,
    /// Whether this entry is the one currently displayed.
    is_current: bool,
}

impl MoveDescriptor {
    /// Zero-based (row, col) of the square played.
    pub fn row_col(&self) -> Option<(usize, usize)> {
        self.target.map(|pos| (pos.row(), pos.col()))
    }

    /// Control to render for this entry.
    pub fn control(&self) -> MoveControl {
        if self.is_current {
            MoveControl::Label
        } else {
            MoveControl::Jump(self.move_index)
        }
    }

    /// Text for the move list.
    ///
    /// ```
    /// use strictly_rewind::{MoveDescriptor, Position};
    ///
    /// let entry = MoveDescriptor::new(2, Some(Position::MiddleRight), false);
    /// assert_eq!(entry.label(), "Go to move #2 (1,2)");
    /// ```
    #[instrument(skip(self), fields(move_index = self.move_index))]
    pub fn label(&self) -> String {
        let coords = self
            .row_col()
            .map(|(row, col)| format!(" ({},{})", row, col))
            .unwrap_or_default();

        if self.is_current {
            format!("You are at move #{}{}", self.move_index, coords)
        } else if self.move_index > 0 {
            format!("Go to move #{}{}", self.move_index, coords)
        } else {
            "Go to game start".to_string()
        }
    }
}

/// Display order for the move list.
///
/// This is a caller-held preference; it never touches the history itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the toggle control, naming the order it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Show moves in descending order",
            Self::Descending => "Show moves in ascending order",
        }
    }
}
