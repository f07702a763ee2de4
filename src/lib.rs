//! Generate perfect mazes with randomized Kruskal's algorithm
//!
//! A maze of `size`×`size` rooms is drawn on a square grid of side
//! `2 * size + 1`, where every cell is either a wall (`#`) or a passage
//! (`.`). Rooms sit at odd rows and columns; the walls between them are
//! carved until the rooms form a spanning tree.
//!
//! # Examples
//! ```
//! use kruskal_maze::maze_generator::MazeGenerator;
//!
//! let mut gen = MazeGenerator::new(Some(1));
//! let maze = gen.generate(2).unwrap();
//! println!("{maze}");
//!
//! let report = maze.analyze();
//! assert_eq!(report.passages, 3);
//! assert!(report.is_perfect());
//! ```
//!
//! ## Checking a maze from text
//! ```
//! use kruskal_maze::Maze;
//!
//! let maze_text = "
//! ########
//! #.....#
//! ######.#
//! #.....#
//! #.#####
//! #.....#
//! ########";
//! let maze = Maze::parse(maze_text.trim()).unwrap();
//! let report = maze.analyze();
//! report.print_report();
//! assert!(report.is_perfect());
//! ```

use std::fmt;

use anyhow::{anyhow, bail};
use itertools::Itertools;

pub mod disjoint_set;
pub mod error;
pub mod grid;
pub mod maze_generator;

use disjoint_set::DisjointSet;
pub use error::MazeError;
use grid::{room_index, Room};

/// Single square of the rendered maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Passage,
}

impl Cell {
    const S_WALL: char = '#';
    const S_PASSAGE: char = '.';

    /// Text symbol of the cell
    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => Self::S_WALL,
            Cell::Passage => Self::S_PASSAGE,
        }
    }
}

/// Rendered maze
///
/// Rows are indexed first: `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// Number of rooms per side
    size: usize,
    /// Square grid with side `2 * size + 1`
    cells: Vec<Vec<Cell>>,
}

/// Structural summary of a maze
///
/// Rooms are graph nodes, and every open wall cell between two rooms is an
/// edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeReport {
    /// Number of rooms
    pub rooms: usize,
    /// Number of open walls between rooms
    pub passages: usize,
    /// Number of connected groups of rooms
    pub components: usize,
    /// Number of independent loops
    pub cycles: usize,
    /// Outer rows and columns are all walls
    pub border_intact: bool,
    /// Every room cell is a passage
    pub rooms_open: bool,
    /// Every cell at an even row and even column is a wall
    pub pillars_closed: bool,
}

impl Maze {
    /// Parse maze from its text form.
    ///
    /// - `text`: Rows of `#` and `.`, separated by newlines.
    ///
    /// Returns error, if the text contains unknown characters, or if the
    /// rows do not form a square with odd side of at least 3.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let cells = text
            .lines()
            .enumerate()
            .map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .map(|(x, c)| match c {
                        Cell::S_WALL => Ok(Cell::Wall),
                        Cell::S_PASSAGE => Ok(Cell::Passage),
                        val => Err(anyhow!("Unexpected character `{}` at y={}, x={}", val, y, x)),
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let side = cells.len();
        if let Some((y, row)) = cells.iter().find_position(|row| row.len() != side) {
            bail!(
                "Maze is not square: row {} has {} cells, expected {}",
                y,
                row.len(),
                side
            );
        }
        if side < 3 || side % 2 == 0 {
            bail!("Maze side must be odd and at least 3, got {}", side);
        }

        Ok(Maze {
            size: (side - 1) / 2,
            cells,
        })
    }

    /// Number of rooms per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells per side, `2 * size + 1`
    pub fn side(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `row`, `col`, or `None` if outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_passage(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Cell::Passage)
    }

    /// All rows of the grid
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Count rooms, passages, connected components and loops.
    pub fn analyze(&self) -> MazeReport {
        let size = self.size;
        let last = self.side() - 1;
        let mut rooms = DisjointSet::new(size * size);
        let mut passages = 0;
        let mut cycles = 0;

        for y in 0..size {
            for x in 0..size {
                // Look right and down only, each wall is seen once
                let (row, col) = Room::new(x, y).cell();
                for (dx, dy) in [(1, 0), (0, 1)] {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < size && ny < size && self.is_passage(row + dy, col + dx) {
                        passages += 1;
                        if !rooms.union(room_index(x, y, size), room_index(nx, ny, size)) {
                            cycles += 1;
                        }
                    }
                }
            }
        }

        let border_intact = (0..=last).all(|i| {
            [(0, i), (last, i), (i, 0), (i, last)]
                .iter()
                .all(|&(row, col)| !self.is_passage(row, col))
        });
        let rooms_open = (0..size)
            .cartesian_product(0..size)
            .all(|(x, y)| {
                let (row, col) = Room::new(x, y).cell();
                self.is_passage(row, col)
            });
        // Even row and even column: corner cells, touching no room
        let pillars_closed = (0..=last)
            .step_by(2)
            .cartesian_product((0..=last).step_by(2))
            .all(|(row, col)| !self.is_passage(row, col));

        MazeReport {
            rooms: rooms.len(),
            passages,
            components: rooms.set_count(),
            cycles,
            border_intact,
            rooms_open,
            pillars_closed,
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .iter()
            .map(|row| row.iter().map(Cell::symbol).join(""))
            .join("\n");
        f.write_str(&text)
    }
}

impl MazeReport {
    /// Whether the maze is a spanning tree of its rooms, enclosed by walls
    pub fn is_perfect(&self) -> bool {
        self.border_intact
            && self.rooms_open
            && self.pillars_closed
            && self.components == 1
            && self.cycles == 0
    }

    /// Print report
    pub fn print_report(&self) {
        println!(
            "{} rooms, {} passages, {} connected components, {} loops.",
            self.rooms, self.passages, self.components, self.cycles
        );
        if !self.border_intact {
            println!("The outer wall is broken.");
        }
        if !self.rooms_open {
            println!("Some rooms are walled in.");
        }
        if !self.pillars_closed {
            println!("Some corners between walls are open.");
        }
        if self.is_perfect() {
            println!("The maze is perfect.");
        } else {
            println!("The maze is not perfect.");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, Maze};

    #[test]
    fn parse_maze_input() {
        let text = "
#####
#...#
###.#
#...#
#####"
            .trim();
        let maze = Maze::parse(text).unwrap();

        assert_eq!(maze.size(), 2);
        assert_eq!(maze.side(), 5);
        assert_eq!(maze.cell(1, 2), Some(Cell::Passage));
        assert_eq!(maze.cell(2, 1), Some(Cell::Wall));
        assert_eq!(maze.cell(5, 0), None);
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Maze::parse("###\n#x#\n###").is_err());
        assert!(Maze::parse("###\n#.#").is_err());
        assert!(Maze::parse("####\n#..#\n#..#\n####").is_err());
        assert!(Maze::parse("#").is_err());
        assert!(Maze::parse("").is_err());
    }

    #[test]
    fn analyze_perfect_maze() {
        let maze = Maze::parse(
            "
#####
#...#
###.#
#...#
#####"
                .trim(),
        )
        .unwrap();
        let report = maze.analyze();

        assert_eq!(report.rooms, 4);
        assert_eq!(report.passages, 3);
        assert_eq!(report.components, 1);
        assert_eq!(report.cycles, 0);
        assert!(report.is_perfect());
    }

    #[test]
    fn analyze_detects_loop() {
        let maze = Maze::parse(
            "
#####
#...#
#.#.#
#...#
#####"
                .trim(),
        )
        .unwrap();
        let report = maze.analyze();

        assert_eq!(report.passages, 4);
        assert_eq!(report.cycles, 1);
        assert!(!report.is_perfect());
    }

    #[test]
    fn analyze_detects_disconnected_rooms() {
        let maze = Maze::parse(
            "
#####
#.#.#
#.#.#
#.#.#
#####"
                .trim(),
        )
        .unwrap();
        let report = maze.analyze();

        assert_eq!(report.passages, 2);
        assert_eq!(report.components, 2);
        assert!(!report.is_perfect());
    }

    #[test]
    fn analyze_detects_broken_border_and_closed_room() {
        let report = Maze::parse(".##\n#.#\n###").unwrap().analyze();
        assert!(!report.border_intact);
        assert!(report.rooms_open);
        assert!(!report.is_perfect());

        let report = Maze::parse("###\n###\n###").unwrap().analyze();
        assert!(report.border_intact);
        assert!(!report.rooms_open);
        assert!(!report.is_perfect());
    }

    #[test]
    fn analyze_detects_open_pillar() {
        let text = "
#####
#...#
#...#
#.#.#
#####"
            .trim();
        let report = Maze::parse(text).unwrap().analyze();

        assert_eq!(report.passages, 3);
        assert_eq!(report.components, 1);
        assert_eq!(report.cycles, 0);
        assert!(report.border_intact);
        assert!(report.rooms_open);
        assert!(!report.pillars_closed);
        assert!(!report.is_perfect());
    }
}
