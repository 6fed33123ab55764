//! Plain data types exchanged with the collaborators that surround this crate
//! (parsing, CLI, bindings, reporting) — see spec §3 / §6.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type StudentId = u64;

/// A student sitting exactly one exam. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub exam: String,
}

/// A rectangular grid of seats, optionally skipping every other row and/or column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Room {
    pub id: String,
    pub rows: u32,
    pub cols: u32,
    #[serde(default)]
    pub skip_rows: bool,
    #[serde(default)]
    pub skip_cols: bool,
}

/// A `(row, col)` coordinate inside a room's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    /// True iff `self` and `other` are at Manhattan distance exactly 1.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// Maps an exam name to the room ids its students may sit in. An absent key
/// means any room is allowed; a present key with an empty list means no room
/// is allowed (see spec §3, §9).
pub type Restrictions = HashMap<String, Vec<String>>;

/// One student's final placement. Only ever produced on a FEASIBLE/OPTIMAL
/// solver response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Assignment {
    pub student_id: StudentId,
    pub room_id: String,
    pub row: u32,
    pub col: u32,
}
