//! Rooms, walls and the render grid
//!
//! Rooms of a `size`×`size` maze live at odd rows and columns of a render
//! grid with side `2 * size + 1`. Every other cell is either a wall between
//! two rooms or part of the outer boundary.

use crate::error::{MazeError, Result};
use crate::{Cell, Maze};

/// Room of the logical maze, at column `x` and row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Room {
    pub x: usize,
    pub y: usize,
}

impl Room {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Flat index of this room, see [room_index]
    pub fn index(&self, size: usize) -> usize {
        room_index(self.x, self.y, size)
    }

    /// Position `(row, col)` of this room in the render grid
    pub fn cell(&self) -> (usize, usize) {
        (2 * self.y + 1, 2 * self.x + 1)
    }
}

/// Candidate wall between two adjacent rooms
///
/// `x` and `y` are the column and row that the wall occupies in the render
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub x: usize,
    pub y: usize,
    pub room1: Room,
    pub room2: Room,
}

/// Map room coordinates to the flat index space of the disjoint set.
///
/// ```
/// use kruskal_maze::grid::room_index;
/// assert_eq!(room_index(2, 1, 4), 6);
/// ```
pub fn room_index(x: usize, y: usize, size: usize) -> usize {
    y * size + x
}

/// Number of walls between adjacent rooms, `2 * size * (size - 1)`
///
/// `None` if the count overflows.
pub fn wall_count(size: usize) -> Option<usize> {
    size.checked_mul(size.saturating_sub(1))?.checked_mul(2)
}

/// Side length of the render grid, `2 * size + 1`
///
/// Fails if `size` is zero, or if the grid or the room count would overflow.
pub fn grid_side(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(MazeError::InvalidSize(size));
    }
    let side = size
        .checked_mul(2)
        .and_then(|s| s.checked_add(1))
        .ok_or(MazeError::TooLarge(size))?;
    side.checked_mul(side).ok_or(MazeError::TooLarge(size))?;
    Ok(side)
}

/// Enumerate every wall between adjacent rooms exactly once.
///
/// Walls between vertically adjacent rooms come first, then walls between
/// horizontally adjacent rooms, both in row-major order.
pub fn generate_walls(size: usize) -> Result<Vec<Wall>> {
    grid_side(size)?;
    let count = wall_count(size).ok_or(MazeError::TooLarge(size))?;
    let mut walls = Vec::new();
    walls.try_reserve_exact(count)?;

    for y in 0..size.saturating_sub(1) {
        for x in 0..size {
            walls.push(Wall {
                x: 2 * x + 1,
                y: 2 * y + 2,
                room1: Room::new(x, y),
                room2: Room::new(x, y + 1),
            });
        }
    }
    for y in 0..size {
        for x in 0..size.saturating_sub(1) {
            walls.push(Wall {
                x: 2 * x + 2,
                y: 2 * y + 1,
                room1: Room::new(x, y),
                room2: Room::new(x + 1, y),
            });
        }
    }

    debug_assert_eq!(walls.len(), count);
    Ok(walls)
}

/// Allocate the render grid: all walls, except open rooms.
pub fn init_grid(size: usize) -> Result<Maze> {
    let side = grid_side(size)?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(side)?;
    for _ in 0..side {
        let mut row = Vec::new();
        row.try_reserve_exact(side)?;
        row.resize(side, Cell::Wall);
        cells.push(row);
    }

    for y in 0..size {
        for x in 0..size {
            let (row, col) = Room::new(x, y).cell();
            cells[row][col] = Cell::Passage;
        }
    }

    Ok(Maze { size, cells })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::iproduct;

    use super::*;

    #[test]
    fn room_index_is_bijection() {
        for size in 1..8 {
            let indices: HashSet<usize> = iproduct!(0..size, 0..size)
                .map(|(x, y)| room_index(x, y, size))
                .collect();
            assert_eq!(indices, (0..size * size).collect());
        }
        assert_eq!(Room::new(3, 2).index(5), 13);
    }

    #[test]
    fn wall_count_matches_formula() {
        assert_eq!(wall_count(0), Some(0));
        assert_eq!(wall_count(1), Some(0));
        assert_eq!(wall_count(2), Some(4));
        assert_eq!(wall_count(6), Some(60));
        assert_eq!(wall_count(usize::MAX), None);
        for size in 1..12 {
            assert_eq!(Some(generate_walls(size).unwrap().len()), wall_count(size));
        }
    }

    #[test]
    fn generate_walls_rejects_bad_sizes() {
        assert!(matches!(generate_walls(0), Err(MazeError::InvalidSize(0))));
        assert!(matches!(
            generate_walls(usize::MAX),
            Err(MazeError::TooLarge(_))
        ));
    }

    #[test]
    fn walls_join_distinct_adjacent_rooms() {
        let size = 5;
        let walls = generate_walls(size).unwrap();

        let pairs: HashSet<(Room, Room)> = walls
            .iter()
            .map(|w| (w.room1.min(w.room2), w.room1.max(w.room2)))
            .collect();
        assert_eq!(pairs.len(), walls.len());

        for wall in &walls {
            let (a, b) = (wall.room1, wall.room2);
            assert!(a.x < size && a.y < size && b.x < size && b.y < size);
            assert_eq!(a.x.abs_diff(b.x) + a.y.abs_diff(b.y), 1);

            // The wall sits halfway between the two room cells
            let (r1, c1) = a.cell();
            let (r2, c2) = b.cell();
            assert_eq!((wall.y, wall.x), ((r1 + r2) / 2, (c1 + c2) / 2));
        }
    }

    #[test]
    fn vertical_walls_come_first() {
        let walls = generate_walls(3).unwrap();
        assert_eq!(
            walls[0],
            Wall {
                x: 1,
                y: 2,
                room1: Room::new(0, 0),
                room2: Room::new(0, 1)
            }
        );
        assert!(walls[..6].iter().all(|w| w.room1.x == w.room2.x));
        assert!(walls[6..].iter().all(|w| w.room1.y == w.room2.y));
        assert_eq!(
            walls[6],
            Wall {
                x: 2,
                y: 1,
                room1: Room::new(0, 0),
                room2: Room::new(1, 0)
            }
        );
    }

    #[test]
    fn init_grid_opens_only_rooms() {
        let size = 4;
        let maze = init_grid(size).unwrap();
        assert_eq!(maze.side(), 9);
        for (row, cells) in maze.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let is_room = row % 2 == 1 && col % 2 == 1;
                assert_eq!(*cell == Cell::Passage, is_room, "row={row}, col={col}");
            }
        }
    }

    #[test]
    fn grid_side_rejects_bad_sizes() {
        assert!(matches!(grid_side(0), Err(MazeError::InvalidSize(0))));
        assert!(matches!(init_grid(0), Err(MazeError::InvalidSize(0))));
        assert!(matches!(
            grid_side(usize::MAX / 2),
            Err(MazeError::TooLarge(_))
        ));
        assert_eq!(grid_side(1).unwrap(), 3);
    }
}
