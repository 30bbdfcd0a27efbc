//! Maze grid and route scoring.

use std::sync::OnceLock;

/// One cell of a maze grid.
///
/// The numeric codes (0 = empty, 1 = wall, 2 = start, 3 = route, 4 = goal)
/// are the conventional encoding used by collaborator-supplied grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Wall,
    Start,
    /// A cell on the correct path. Scoring rewards each route cell once.
    Route,
    Goal,
}

impl Cell {
    /// Decodes a numeric cell code.
    ///
    /// # Panics
    /// Panics on codes outside 0..=4.
    pub fn from_code(code: i32) -> Cell {
        match code {
            0 => Cell::Empty,
            1 => Cell::Wall,
            2 => Cell::Start,
            3 => Cell::Route,
            4 => Cell::Goal,
            _ => panic!("unknown maze cell code {code}"),
        }
    }
}

/// An immutable rectangular grid through which a robot navigates.
///
/// Coordinates are `(x, y)` with `x` as the column and `y` as the row;
/// `(0, 0)` is the top-left corner. Anything off the grid reads as a wall.
#[derive(Debug)]
pub struct Maze {
    grid: Vec<Vec<Cell>>,
    start: OnceLock<(i32, i32)>,
}

impl Maze {
    /// Wraps a grid of cells.
    ///
    /// # Panics
    /// Panics if the grid is empty or its rows have unequal lengths.
    pub fn new(grid: Vec<Vec<Cell>>) -> Maze {
        assert!(
            !grid.is_empty() && !grid[0].is_empty(),
            "maze grid must be non-empty"
        );
        let width = grid[0].len();
        assert!(
            grid.iter().all(|row| row.len() == width),
            "maze grid rows must have equal length"
        );
        Maze {
            grid,
            start: OnceLock::new(),
        }
    }

    /// Builds a maze from rows of numeric cell codes.
    ///
    /// # Panics
    /// Panics on unknown codes or a malformed grid.
    pub fn from_codes(rows: &[Vec<i32>]) -> Maze {
        Maze::new(
            rows.iter()
                .map(|row| row.iter().map(|&code| Cell::from_code(code)).collect())
                .collect(),
        )
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.grid[0].len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Largest valid x coordinate.
    pub fn max_x(&self) -> i32 {
        self.width() as i32 - 1
    }

    /// Largest valid y coordinate.
    pub fn max_y(&self) -> i32 {
        self.height() as i32 - 1
    }

    /// Cell at `(x, y)`; off-grid positions read as [`Cell::Wall`].
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x > self.max_x() || y > self.max_y() {
            return Cell::Wall;
        }
        self.grid[y as usize][x as usize]
    }

    /// Whether `(x, y)` is a wall (off-grid counts as wall).
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Cell::Wall
    }

    /// The start cell, found on first use and cached. A grid without a
    /// start cell yields `(0, 0)`.
    pub fn start_position(&self) -> (i32, i32) {
        *self.start.get_or_init(|| {
            for (y, row) in self.grid.iter().enumerate() {
                for (x, &cell) in row.iter().enumerate() {
                    if cell == Cell::Start {
                        return (x as i32, y as i32);
                    }
                }
            }
            (0, 0)
        })
    }

    /// Scores a route: one point per distinct [`Cell::Route`] cell visited.
    ///
    /// Each route cell is rewarded at most once, so oscillating back and
    /// forth over the same correct cell cannot farm score.
    pub fn score_route(&self, route: &[(i32, i32)]) -> u32 {
        let mut visited = vec![vec![false; self.width()]; self.height()];
        let mut score = 0;

        for &(x, y) in route {
            if self.cell(x, y) == Cell::Route && !visited[y as usize][x as usize] {
                score += 1;
                visited[y as usize][x as usize] = true;
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_maze() -> Maze {
        Maze::from_codes(&[
            vec![2, 3, 0],
            vec![1, 3, 1],
            vec![0, 3, 4],
        ])
    }

    #[test]
    fn test_start_position_found_and_cached() {
        let maze = small_maze();
        assert_eq!(maze.start_position(), (0, 0));
        assert_eq!(maze.start_position(), (0, 0));
    }

    #[test]
    fn test_start_position_defaults_to_origin() {
        let maze = Maze::from_codes(&[vec![0, 0], vec![0, 4]]);
        assert_eq!(maze.start_position(), (0, 0));
    }

    #[test]
    fn test_off_grid_reads_as_wall() {
        let maze = small_maze();
        assert!(maze.is_wall(-1, 0));
        assert!(maze.is_wall(0, -1));
        assert!(maze.is_wall(3, 0));
        assert!(maze.is_wall(0, 3));
        assert!(!maze.is_wall(0, 0));
    }

    #[test]
    fn test_non_square_bounds() {
        // Wider than tall: x and y limits must not be mixed up.
        let maze = Maze::from_codes(&[vec![0, 0, 0, 0, 4]]);
        assert_eq!(maze.max_x(), 4);
        assert_eq!(maze.max_y(), 0);
        assert_eq!(maze.cell(4, 0), Cell::Goal);
        assert!(maze.is_wall(0, 1));
    }

    #[test]
    fn test_score_counts_distinct_route_cells() {
        let maze = small_maze();
        let route = vec![(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)];
        assert_eq!(maze.score_route(&route), 3);
    }

    #[test]
    fn test_revisited_route_cell_scores_once() {
        let maze = small_maze();
        let route = vec![(1, 0), (1, 1), (1, 0), (1, 1), (1, 0)];
        assert_eq!(maze.score_route(&route), 2);
    }

    #[test]
    fn test_non_route_cells_score_nothing() {
        let maze = small_maze();
        let route = vec![(0, 0), (2, 0), (2, 2), (-1, -1)];
        assert_eq!(maze.score_route(&route), 0);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_ragged_grid_panics() {
        Maze::from_codes(&[vec![0, 0], vec![0]]);
    }

    #[test]
    #[should_panic(expected = "unknown maze cell code")]
    fn test_unknown_code_panics() {
        Cell::from_code(9);
    }
}
