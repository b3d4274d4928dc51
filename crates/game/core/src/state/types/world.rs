use crate::env::{RngOracle, mix_seed};
use crate::state::MazeError;

use super::Position;

/// Canonical cell classes of the maze grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CellKind {
    Passage,
    Wall,
    Fire,
    /// Walkable cell that does not count toward retreat tracking.
    ExtraPassage,
    /// Exit guarded by the golem; only a key holder gets through.
    End,
}

/// A single grid cell. Its kind changes while hazards burn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub kind: CellKind,
}

impl Cell {
    pub const fn new(position: Position, kind: CellKind) -> Self {
        Self { position, kind }
    }
}

/// Row-major maze grid plus the cells set on fire for the current round.
///
/// # Invariants
///
/// - the grid is non-empty and every row has the same length
/// - `cells[y][x].position == (x, y)`
/// - `burning` only holds cells that were passages when ignited, and is empty
///   between rounds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
    burning: Vec<Position>,
}

impl Maze {
    /// Builds a maze from parsed rows, validating its shape.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        Self::validate(&rows)?;
        Ok(Self {
            cells: rows,
            burning: Vec::new(),
        })
    }

    /// Builds a maze from bare cell kinds, deriving each cell's position from
    /// its slot.
    pub fn from_kinds(rows: Vec<Vec<CellKind>>) -> Result<Self, MazeError> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(x, kind)| Cell::new(Position::new(x as i32, y as i32), kind))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Replaces the grid with freshly parsed rows and resets hazard tracking.
    ///
    /// On error the current grid is left untouched.
    pub fn load(&mut self, rows: Vec<Vec<Cell>>) -> Result<(), MazeError> {
        Self::validate(&rows)?;
        self.cells = rows;
        self.burning.clear();
        Ok(())
    }

    fn validate(rows: &[Vec<Cell>]) -> Result<(), MazeError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(MazeError::Empty);
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            for (x, cell) in row.iter().enumerate() {
                let slot = Position::new(x as i32, y as i32);
                if cell.position != slot {
                    return Err(MazeError::MisplacedCell {
                        expected: slot,
                        found: cell.position,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn width(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// The "is in map" check guarding every grid access.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width()
            && (position.y as usize) < self.height()
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if !self.contains(position) {
            return None;
        }
        self.cells
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if !self.contains(position) {
            return None;
        }
        self.cells
            .get_mut(position.y as usize)
            .and_then(|row| row.get_mut(position.x as usize))
    }

    /// Cell kind at `position`; anything outside the grid counts as wall.
    pub fn cell_kind_at(&self, position: Position) -> CellKind {
        self.cell(position)
            .map(|cell| cell.kind)
            .unwrap_or(CellKind::Wall)
    }

    pub fn passage_count(&self) -> usize {
        self.passages().count()
    }

    fn passages(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.kind == CellKind::Passage)
            .map(|cell| cell.position)
    }

    /// Cells currently on fire, in ignition order.
    pub fn burning_cells(&self) -> &[Position] {
        &self.burning
    }

    /// Sets `count` distinct passage cells on fire.
    ///
    /// Cells are drawn uniformly without replacement through a partial
    /// Fisher-Yates shuffle driven by `rng`, so the same `seed` always picks
    /// the same cells.
    pub fn ignite_random_hazards(
        &mut self,
        count: usize,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Result<&[Position], MazeError> {
        if !self.burning.is_empty() {
            return Err(MazeError::HazardsStillBurning(self.burning.len()));
        }

        let mut candidates: Vec<Position> = self.passages().collect();
        if candidates.len() < count {
            return Err(MazeError::NotEnoughPassages {
                required: count,
                available: candidates.len(),
            });
        }

        for i in 0..count {
            let remaining = (candidates.len() - 1 - i) as u32;
            let offset = rng.range(mix_seed(seed, i as u64), 0, remaining);
            candidates.swap(i, i + offset as usize);
        }
        candidates.truncate(count);

        for &position in &candidates {
            if let Some(cell) = self.cell_mut(position) {
                cell.kind = CellKind::Fire;
            }
        }
        self.burning = candidates;

        Ok(&self.burning)
    }

    /// Reverts every burning cell to a passage and returns their positions.
    pub fn extinguish_hazards(&mut self) -> Vec<Position> {
        let burning = std::mem::take(&mut self.burning);
        for &position in &burning {
            if let Some(cell) = self.cell_mut(position) {
                cell.kind = CellKind::Passage;
            }
        }
        burning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use CellKind::*;

    fn sample_maze() -> Maze {
        Maze::from_kinds(vec![
            vec![Passage, Wall, Passage, Passage],
            vec![Passage, ExtraPassage, Passage, End],
            vec![Fire, Passage, Passage, Wall],
        ])
        .unwrap()
    }

    #[test]
    fn dimensions_come_from_the_grid() {
        let maze = sample_maze();
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.passage_count(), 7);
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let maze = sample_maze();
        assert_eq!(maze.cell_kind_at(Position::new(-1, 0)), Wall);
        assert_eq!(maze.cell_kind_at(Position::new(0, -1)), Wall);
        assert_eq!(maze.cell_kind_at(Position::new(4, 0)), Wall);
        assert_eq!(maze.cell_kind_at(Position::new(0, 3)), Wall);
        assert!(maze.cell(Position::new(4, 0)).is_none());
        assert_eq!(maze.cell_kind_at(Position::new(3, 1)), End);
    }

    #[test]
    fn rejects_ragged_and_empty_grids() {
        assert_eq!(Maze::from_kinds(vec![]), Err(MazeError::Empty));
        assert_eq!(
            Maze::from_kinds(vec![vec![Passage, Passage], vec![Passage]]),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_cells_with_mismatched_coordinates() {
        let rows = vec![vec![
            Cell::new(Position::new(0, 0), Passage),
            Cell::new(Position::new(5, 0), Passage),
        ]];
        assert!(matches!(
            Maze::from_rows(rows),
            Err(MazeError::MisplacedCell { .. })
        ));
    }

    #[test]
    fn load_resets_hazard_tracking() {
        let mut maze = sample_maze();
        maze.ignite_random_hazards(2, &PcgRng, 7).unwrap();
        let fresh = Maze::from_kinds(vec![vec![Passage, Wall]]).unwrap();
        maze.load(fresh.rows().to_vec()).unwrap();
        assert!(maze.burning_cells().is_empty());
        assert_eq!(maze.width(), 2);
    }

    #[test]
    fn ignition_picks_distinct_passages() {
        for seed in 0..32 {
            let mut maze = sample_maze();
            let burning = maze.ignite_random_hazards(4, &PcgRng, seed).unwrap().to_vec();

            assert_eq!(burning.len(), 4);
            let mut unique = burning.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 4, "seed {seed} picked a cell twice");

            for position in &burning {
                assert_eq!(sample_maze().cell_kind_at(*position), Passage);
                assert_eq!(maze.cell_kind_at(*position), Fire);
            }
            assert_eq!(maze.passage_count(), 3);
        }
    }

    #[test]
    fn ignition_is_deterministic_per_seed() {
        let mut first = sample_maze();
        let mut second = sample_maze();
        assert_eq!(
            first.ignite_random_hazards(3, &PcgRng, 99).unwrap(),
            second.ignite_random_hazards(3, &PcgRng, 99).unwrap()
        );
    }

    #[test]
    fn extinguish_restores_passages() {
        let mut maze = sample_maze();
        let lit = maze.ignite_random_hazards(4, &PcgRng, 3).unwrap().to_vec();
        let extinguished = maze.extinguish_hazards();

        assert_eq!(lit, extinguished);
        assert!(maze.burning_cells().is_empty());
        assert_eq!(maze, sample_maze());
    }

    #[test]
    fn static_fire_survives_extinguish() {
        let mut maze = sample_maze();
        maze.ignite_random_hazards(1, &PcgRng, 0).unwrap();
        maze.extinguish_hazards();
        assert_eq!(maze.cell_kind_at(Position::new(0, 2)), Fire);
    }

    #[test]
    fn ignition_requires_enough_passages() {
        let mut maze = sample_maze();
        assert_eq!(
            maze.ignite_random_hazards(8, &PcgRng, 0),
            Err(MazeError::NotEnoughPassages {
                required: 8,
                available: 7
            })
        );
        assert!(maze.burning_cells().is_empty());
    }

    #[test]
    fn ignition_refuses_to_stack() {
        let mut maze = sample_maze();
        maze.ignite_random_hazards(2, &PcgRng, 0).unwrap();
        assert_eq!(
            maze.ignite_random_hazards(2, &PcgRng, 1),
            Err(MazeError::HazardsStillBurning(2))
        );
    }

    #[test]
    fn zero_hazards_is_a_no_op() {
        let mut maze = sample_maze();
        assert!(maze.ignite_random_hazards(0, &PcgRng, 0).unwrap().is_empty());
        assert_eq!(maze, sample_maze());
    }

    #[test]
    fn cell_kinds_use_snake_case_names() {
        assert_eq!(ExtraPassage.to_string(), "extra_passage");
        assert_eq!("extra_passage".parse::<CellKind>().unwrap(), ExtraPassage);
        assert_eq!("END".parse::<CellKind>().unwrap(), End);
    }
}
