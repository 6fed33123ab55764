//! Position Enumerator (spec §2 component 2, §4.1).

use std::collections::HashMap;

use crate::types::{Position, Room};

/// Usable positions of a single room, row-major, plus the adjacency list
/// among them. `adjacent_pairs` holds each unordered pair once, `i < j`,
/// indexing into `positions`.
#[derive(Debug, Clone)]
pub struct RoomPositions {
    pub positions: Vec<Position>,
    pub adjacent_pairs: Vec<(usize, usize)>,
}

/// Emit the ordered usable positions of `room` (row outer, col inner,
/// honoring `skip_rows`/`skip_cols`) and their Manhattan-1 adjacency.
///
/// Adjacency is found by looking up each kept position's right and down
/// neighbor in an index map rather than comparing every pair, so this stays
/// linear in the number of usable seats instead of quadratic.
pub fn enumerate_positions(room: &Room) -> RoomPositions {
    let mut positions = Vec::new();
    for row in 0..room.rows {
        if room.skip_rows && row % 2 != 0 {
            continue;
        }
        for col in 0..room.cols {
            if room.skip_cols && col % 2 != 0 {
                continue;
            }
            positions.push(Position { row, col });
        }
    }

    let index_of: HashMap<(u32, u32), usize> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| ((p.row, p.col), i))
        .collect();

    let mut adjacent_pairs = Vec::new();
    for (i, p) in positions.iter().enumerate() {
        if let Some(&j) = index_of.get(&(p.row + 1, p.col)) {
            adjacent_pairs.push((i, j));
        }
        if let Some(&j) = index_of.get(&(p.row, p.col + 1)) {
            adjacent_pairs.push((i, j));
        }
    }

    RoomPositions {
        positions,
        adjacent_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(rows: u32, cols: u32, skip_rows: bool, skip_cols: bool) -> Room {
        Room {
            id: "R".into(),
            rows,
            cols,
            skip_rows,
            skip_cols,
        }
    }

    #[test]
    fn no_skip_is_full_grid() {
        let rp = enumerate_positions(&room(2, 3, false, false));
        assert_eq!(rp.positions.len(), 6);
    }

    #[test]
    fn skip_cols_keeps_even_columns_only() {
        let rp = enumerate_positions(&room(1, 5, false, true));
        assert_eq!(
            rp.positions,
            vec![
                Position { row: 0, col: 0 },
                Position { row: 0, col: 2 },
                Position { row: 0, col: 4 },
            ]
        );
        assert!(rp.adjacent_pairs.is_empty(), "kept seats are distance >= 2 apart");
    }

    #[test]
    fn adjacency_counts_each_edge_once() {
        let rp = enumerate_positions(&room(2, 2, false, false));
        assert_eq!(rp.positions.len(), 4);
        // A 2x2 grid has 4 orthogonal edges: (0,0)-(0,1), (0,0)-(1,0), (0,1)-(1,1), (1,0)-(1,1)
        assert_eq!(rp.adjacent_pairs.len(), 4);
    }

    #[test]
    fn one_by_three_row_has_two_adjacent_pairs() {
        let rp = enumerate_positions(&room(1, 3, false, false));
        assert_eq!(rp.adjacent_pairs.len(), 2);
    }
}
