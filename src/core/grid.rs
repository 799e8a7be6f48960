use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::{Position, TileKind};

/// Row-major tile matrix. Rows may have different lengths; anything past the
/// end of a row reads as `Void`. The shape never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<TileKind>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<TileKind>>) -> Self {
        Grid { rows }
    }

    pub fn rows(&self) -> &[Vec<TileKind>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn dimensions(&self) -> (usize, Vec<usize>) {
        (self.rows.len(), self.rows.iter().map(Vec::len).collect())
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    pub fn get(&self, pos: Position) -> TileKind {
        match self.index_of(pos) {
            Some((i, j)) => self.rows[i][j],
            None => TileKind::Void,
        }
    }

    pub fn set(&mut self, pos: Position, kind: TileKind) -> Result<()> {
        let (i, j) = self.index_of(pos).ok_or(EngineError::OutOfBounds { pos })?;
        self.rows[i][j] = kind;
        Ok(())
    }

    pub fn count_tiles_matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(TileKind) -> bool,
    {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| predicate(c))
            .count()
    }

    pub fn find<F>(&self, predicate: F) -> Option<Position>
    where
        F: Fn(TileKind) -> bool,
    {
        self.iter().find(|&(_, c)| predicate(c)).map(|(pos, _)| pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, TileKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &c)| (Position::new(i as i32, j as i32), c))
        })
    }

    fn index_of(&self, pos: Position) -> Option<(usize, usize)> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (i, j) = (pos.row as usize, pos.col as usize);
        let row = self.rows.get(i)?;
        if j < row.len() { Some((i, j)) } else { None }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::TileKind::*;

    fn jagged() -> Grid {
        Grid::from_rows(vec![
            vec![Wall, Wall, Wall],
            vec![Wall, Floor, Goal, Wall, Wall],
            vec![Wall],
        ])
    }

    #[test]
    fn get_past_end_of_short_row_reads_void() {
        let grid = jagged();
        assert_eq!(grid.get(Position::new(2, 0)), Wall);
        assert_eq!(grid.get(Position::new(2, 3)), Void);
        assert_eq!(grid.get(Position::new(1, 4)), Wall);
        assert_eq!(grid.get(Position::new(-1, 0)), Void);
        assert_eq!(grid.get(Position::new(3, 0)), Void);
        assert_eq!(grid.get(Position::NONE), Void);
    }

    #[test]
    fn set_outside_rows_fails_and_leaves_grid_alone() {
        let mut grid = jagged();
        let before = grid.clone();

        let err = grid.set(Position::new(2, 1), Box).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { pos } if pos == Position::new(2, 1)));
        assert!(grid.set(Position::new(5, 0), Box).is_err());
        assert!(grid.set(Position::new(0, -1), Box).is_err());
        assert_eq!(before, grid);
    }

    #[test]
    fn set_overwrites_without_checking_legality() {
        let mut grid = jagged();
        grid.set(Position::new(0, 0), Player).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Player);
    }

    #[test]
    fn dimensions_reports_each_row_length() {
        assert_eq!(jagged().dimensions(), (3, vec![3, 5, 1]));
        assert_eq!(jagged().width(), 5);
    }

    #[test]
    fn count_and_find_scan_in_row_major_order() {
        let grid = jagged();
        assert_eq!(grid.count_tiles_matching(|c| c == Wall), 7);
        assert_eq!(grid.count_tiles_matching(TileKind::is_goal), 1);
        assert_eq!(grid.find(|c| c == Floor), Some(Position::new(1, 1)));
        assert_eq!(grid.find(TileKind::is_player), None);
    }
}
