//! Grid world: positions, walls, and neighbour enumeration.
//!
//! The grid is the space the search strategies are usually run on. It knows
//! nothing about searching; it only answers which cells are free and which
//! cells can be reached from a given cell in one step.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::problem::Navigable;

/// A cell coordinate. `x` grows to the east, `y` grows to the south.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_euclidean(&self, other: &GridPos) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Number of 4-connected steps to `other` on an empty grid.
    pub fn distance_manhattan(&self, other: &GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbours. Order: North, South, East, West.
    pub fn neighbors(&self) -> [GridPos; 4] {
        [
            GridPos::new(self.x, self.y - 1),
            GridPos::new(self.x, self.y + 1),
            GridPos::new(self.x + 1, self.y),
            GridPos::new(self.x - 1, self.y),
        ]
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Errors raised while reading an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("map is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell '{glyph}' at {pos}")]
    UnknownCell { glyph: char, pos: GridPos },

    #[error("more than one '{glyph}' marker (second at {pos})")]
    DuplicateMarker { glyph: char, pos: GridPos },
}

/// A rectangular grid with wall cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    walls: HashSet<GridPos>,
    /// Cell marked `S` in the parsed map, if any
    pub start: Option<GridPos>,
    /// Cell marked `G` in the parsed map, if any
    pub goal: Option<GridPos>,
}

impl Grid {
    /// An open grid without any wall. Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            walls: HashSet::new(),
            start: None,
            goal: None,
        }
    }

    /// A grid whose outermost ring of cells is wall.
    pub fn with_border(width: i32, height: i32) -> Self {
        let mut grid = Self::new(width, height);
        for x in 0..width {
            grid.add_wall(GridPos::new(x, 0));
            grid.add_wall(GridPos::new(x, height - 1));
        }
        for y in 0..height {
            grid.add_wall(GridPos::new(0, y));
            grid.add_wall(GridPos::new(width - 1, y));
        }
        grid
    }

    /// Parse an ASCII map: `#` wall, `.` floor, `S` start, `G` goal.
    ///
    /// Leading and trailing blank lines are ignored; every remaining row must
    /// have the same width.
    pub fn parse(map: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows: Vec<&str> = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => return Err(GridError::Empty),
        };

        let width = rows[0].chars().count();
        let mut grid = Self::new(width as i32, rows.len() as i32);

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let pos = GridPos::new(x as i32, y as i32);
                match glyph {
                    '#' => grid.add_wall(pos),
                    '.' => {}
                    'S' => Self::mark(&mut grid.start, glyph, pos)?,
                    'G' => Self::mark(&mut grid.goal, glyph, pos)?,
                    _ => return Err(GridError::UnknownCell { glyph, pos }),
                }
            }
        }

        Ok(grid)
    }

    fn mark(slot: &mut Option<GridPos>, glyph: char, pos: GridPos) -> Result<(), GridError> {
        if slot.is_some() {
            return Err(GridError::DuplicateMarker { glyph, pos });
        }
        *slot = Some(pos);
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn add_wall(&mut self, pos: GridPos) {
        self.walls.insert(pos);
    }

    pub fn is_wall(&self, pos: &GridPos) -> bool {
        self.walls.contains(pos)
    }

    /// Inside the grid and not a wall.
    pub fn is_valid_position(&self, pos: &GridPos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y) && !self.is_wall(pos)
    }

    /// Free neighbours of `pos`, in [`GridPos::neighbors`] order.
    pub fn reachable_positions(&self, pos: &GridPos) -> Vec<GridPos> {
        pos.neighbors()
            .into_iter()
            .filter(|n| self.is_valid_position(n))
            .collect()
    }

    /// Render the grid with `path` drawn as `*`, `S` on its first cell and
    /// `G` on its last.
    pub fn render_path(&self, path: &[GridPos]) -> String {
        let on_path: HashSet<&GridPos> = path.iter().collect();
        let cells = usize::try_from((self.width + 1) * self.height).unwrap_or(0);
        let mut out = String::with_capacity(cells);
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = GridPos::new(x, y);
                let ch = if path.first() == Some(&pos) {
                    'S'
                } else if path.last() == Some(&pos) {
                    'G'
                } else if on_path.contains(&pos) {
                    '*'
                } else if self.is_wall(&pos) {
                    '#'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl Navigable for Grid {
    type State = GridPos;

    fn reachable(&self, state: &GridPos) -> Vec<GridPos> {
        self.reachable_positions(state)
    }

    fn estimate(&self, from: &GridPos, to: &GridPos) -> f64 {
        f64::from(from.distance_manhattan(to))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = GridPos::new(x, y);
                let ch = if self.start == Some(pos) {
                    'S'
                } else if self.goal == Some(pos) {
                    'G'
                } else if self.is_wall(&pos) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances() {
        let a = GridPos::new(1, 1);
        let b = GridPos::new(4, 5);
        assert_eq!(a.distance_manhattan(&b), 7);
        assert_eq!(b.distance_manhattan(&a), 7);
        assert!((a.distance_euclidean(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_border_grid_neighbors() {
        let grid = Grid::with_border(5, 5);
        assert!(grid.is_wall(&GridPos::new(0, 2)));
        assert!(grid.is_wall(&GridPos::new(4, 4)));
        assert!(!grid.is_wall(&GridPos::new(2, 2)));

        // Corner cell of the free area has two free neighbours: South and East
        let reachable = grid.reachable_positions(&GridPos::new(1, 1));
        assert_eq!(reachable, vec![GridPos::new(1, 2), GridPos::new(2, 1)]);

        // Centre cell has all four
        assert_eq!(grid.reachable_positions(&GridPos::new(2, 2)).len(), 4);
    }

    #[test]
    fn test_out_of_bounds_is_invalid() {
        let grid = Grid::new(3, 3);
        assert!(grid.is_valid_position(&GridPos::new(0, 0)));
        assert!(!grid.is_valid_position(&GridPos::new(-1, 0)));
        assert!(!grid.is_valid_position(&GridPos::new(3, 0)));
        assert!(!grid.is_valid_position(&GridPos::new(0, 3)));
    }

    #[test]
    fn test_parse_map() {
        let grid = Grid::parse(
            "
#####
#S..#
#.#.#
#..G#
#####
",
        )
        .unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.start, Some(GridPos::new(1, 1)));
        assert_eq!(grid.goal, Some(GridPos::new(3, 3)));
        assert!(grid.is_wall(&GridPos::new(2, 2)));
        assert!(!grid.is_wall(&GridPos::new(1, 2)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Grid::parse("\n\n"), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("###\n##\n"),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse("#x#"),
            Err(GridError::UnknownCell {
                glyph: 'x',
                pos: GridPos::new(1, 0)
            })
        );
        assert!(matches!(
            Grid::parse("SS"),
            Err(GridError::DuplicateMarker { glyph: 'S', .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let map = "####\n#SG#\n####\n";
        let grid = Grid::parse(map).unwrap();
        assert_eq!(grid.to_string(), map);
    }

    #[test]
    fn test_negative_size_is_empty() {
        let grid = Grid::new(-3, 4);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 4);
        assert!(!grid.is_valid_position(&GridPos::new(0, 0)));
        assert_eq!(grid.render_path(&[]), "\n\n\n\n");
        assert_eq!(Grid::new(-2, -2).render_path(&[]), "");
    }

    #[test]
    fn test_render_path() {
        let grid = Grid::with_border(5, 3);
        let path = [GridPos::new(1, 1), GridPos::new(2, 1), GridPos::new(3, 1)];
        assert_eq!(grid.render_path(&path), "#####\n#S*G#\n#####\n");
    }
}
