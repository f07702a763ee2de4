//! Maze generation with randomized Kruskal's algorithm

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::disjoint_set::DisjointSet;
use crate::error::{MazeError, Result};
use crate::grid::{self, Wall};
use crate::{Cell, Maze};

/// Share of the non-tree walls kept standing by a conventional braided maze
pub const REFERENCE_KEEP_RATIO: f64 = 0.15;

/// Perfect-maze generator.
///
/// All randomness comes from the owned random source, which is used only to
/// shuffle the candidate walls. Two generators seeded alike produce identical
/// mazes.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Create generator with a fixed seed, or seeded from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Use a caller-provided random source
    pub fn from_rng(random: R) -> Self {
        Self { random }
    }

    /// Generate a perfect maze with `size`×`size` rooms.
    ///
    /// # Examples
    /// ```
    /// use kruskal_maze::maze_generator::MazeGenerator;
    ///
    /// let mut gen = MazeGenerator::new(Some(7));
    /// let maze = gen.generate(5).unwrap();
    /// assert_eq!(maze.side(), 11);
    /// assert!(maze.analyze().is_perfect());
    /// ```
    pub fn generate(&mut self, size: usize) -> Result<Maze> {
        let (maze, _) = self.build(size, false)?;
        Ok(maze)
    }

    /// Generate a maze with loops.
    ///
    /// First builds the same perfect maze as [Self::generate], then carves
    /// `floor(ratio * k)` more walls, where `k` is the number of walls that
    /// are not part of the spanning tree. `ratio` must be within `[0, 1]`.
    pub fn generate_braided(&mut self, size: usize, ratio: f64) -> Result<Maze> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(MazeError::InvalidBraidRatio(ratio));
        }
        let (mut maze, standing) = self.build(size, true)?;

        let extra = (ratio * standing.len() as f64).floor() as usize;
        for wall in standing.iter().take(extra) {
            maze.cells[wall.y][wall.x] = Cell::Passage;
        }
        log::debug!(
            "Braided {}x{} maze: carved {} of {} standing walls",
            size,
            size,
            extra,
            standing.len()
        );
        Ok(maze)
    }

    /// Run randomized Kruskal.
    ///
    /// Returns the maze and, if `keep_standing` is set, the walls left
    /// standing in shuffled order. Otherwise the returned list is empty.
    fn build(&mut self, size: usize, keep_standing: bool) -> Result<(Maze, Vec<Wall>)> {
        // Validates size before anything is allocated
        grid::grid_side(size)?;

        let mut walls = grid::generate_walls(size)?;
        shuffle_walls(&mut walls, &mut self.random);

        let mut maze = grid::init_grid(size)?;
        let mut rooms = DisjointSet::try_new(size * size)?;

        let total = walls.len();
        let target = size * size - 1;
        let mut carved = 0;
        let mut standing = Vec::new();
        if keep_standing {
            standing.try_reserve_exact(total - target)?;
        }

        let mut remaining = walls.into_iter();
        while carved < target {
            let Some(wall) = remaining.next() else {
                break;
            };
            let room1 = wall.room1.index(size);
            let room2 = wall.room2.index(size);
            if rooms.union(room1, room2) {
                maze.cells[wall.y][wall.x] = Cell::Passage;
                carved += 1;
                log::trace!("Carved wall at x={}, y={}", wall.x, wall.y);
            } else if keep_standing {
                // Rooms already connected, carving would close a loop
                standing.push(wall);
            }
        }
        if keep_standing {
            standing.extend(remaining);
        }

        debug_assert_eq!(rooms.set_count(), 1);
        log::debug!(
            "Generated {}x{} maze: carved {} passages, {} walls standing",
            size,
            size,
            carved,
            total - carved
        );
        Ok((maze, standing))
    }
}

/// Fisher-Yates shuffle: for `i` from the end down to 1, swap wall `i` with a
/// uniformly chosen wall in `0..=i`.
pub fn shuffle_walls<R: Rng + ?Sized>(walls: &mut [Wall], random: &mut R) {
    for i in (1..walls.len()).rev() {
        let j = random.gen_range(0..=i);
        walls.swap(i, j);
    }
}
