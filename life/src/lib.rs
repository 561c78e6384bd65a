// lib.rs - Conway's Game of Life engine: toroidal universe, row coroutines

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

pub mod patterns;

pub use patterns::{PATTERNS, Pattern};

/// One grid unit, dead or alive.
///
/// `repr(u8)` so a universe's cell buffer reads as one byte per cell.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    fn toggle(&mut self) {
        *self = match *self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern `{name}` ({rows}x{cols}) does not fit a {width}x{height} universe")]
    TooBig {
        name: &'static str,
        rows: u32,
        cols: u32,
        width: u32,
        height: u32,
    },
}

/// A fixed-size grid of cells stored row-major, wrapping around at every
/// edge (a torus).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

/// Row coroutine that computes one row of the next generation from an
/// immutable snapshot of the universe.
async fn process_row(row: u32, snapshot: Arc<Universe>) -> (u32, Vec<Cell>) {
    let mut row_result = Vec::with_capacity(snapshot.width as usize);
    for col in 0..snapshot.width {
        row_result.push(snapshot.next_cell(row, col));

        tokio::task::yield_now().await; // Cooperative yielding!
    }
    (row, row_result) // Return (row_id, completed_row)
}

impl Universe {
    /// All-dead universe of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Universe {
            width,
            height,
            cells: vec![Cell::Dead; (width * height) as usize],
        }
    }

    /// Empty universe with `pattern` centered in it.
    ///
    /// # Errors
    ///
    /// if the pattern's bounding box exceeds either dimension
    pub fn from_pattern(width: u32, height: u32, pattern: &Pattern) -> Result<Self, PatternError> {
        let (rows, cols) = pattern.extent();
        if rows > height || cols > width {
            return Err(PatternError::TooBig {
                name: pattern.name,
                rows,
                cols,
                width,
                height,
            });
        }

        let mut univ = Universe::new(width, height);
        let (start_row, start_col) = ((height - rows) / 2, (width - cols) / 2);
        for &(row, col) in pattern.cells {
            let idx = univ.get_index(start_row + row, start_col + col);
            univ.cells[idx] = Cell::Alive;
        }
        Ok(univ)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrowed view of the live cell buffer, one byte per cell. Callers
    /// render straight from this slice; it is never copied out.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Alive)
            .count()
    }

    fn get_index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let mut sum = 0;

        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }

                let neighbor_row = (row + delta_row) % self.height;
                let neighbor_col = (col + delta_col) % self.width;
                let idx = self.get_index(neighbor_row, neighbor_col);
                sum += self.cells[idx] as u8;
            }
        }
        sum
    }

    fn next_cell(&self, row: u32, col: u32) -> Cell {
        let cell = self.cells[self.get_index(row, col)];
        let live_neighbors = self.live_neighbor_count(row, col);

        match (cell, live_neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive, // Survival
            (Cell::Dead, 3) => Cell::Alive,      // Birth
            _ => Cell::Dead,                     // Death or stays dead
        }
    }

    /// Advance one generation in place.
    pub fn tick(&mut self) {
        let mut next = self.cells.clone();

        for row in 0..self.height {
            for col in 0..self.width {
                next[self.get_index(row, col)] = self.next_cell(row, col);
            }
        }

        self.cells = next;
    }

    /// Advance one generation on `runtime`, one spawned task per row.
    /// Produces exactly the same grid as [`Universe::tick`].
    pub fn tick_on(&mut self, runtime: &tokio::runtime::Runtime) {
        let snapshot = Arc::new(self.clone());
        let width = self.width as usize;

        runtime.block_on(async {
            // Spawn all row coroutines simultaneously for time-slicing
            let mut handles = Vec::with_capacity(self.height as usize);
            for row in 0..self.height {
                handles.push(tokio::spawn(process_row(row, Arc::clone(&snapshot))));
            }

            // Wait for all coroutines and commit results with row identification
            for handle in handles {
                let (row, completed_row) = handle.await.unwrap();
                let start = row as usize * width;
                self.cells[start..start + width].copy_from_slice(&completed_row);
            }
        });

        log::debug!("advanced one generation across {} row tasks", self.height);
    }

    /// Flips the cell at (`row`, `col`).
    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        let idx = self.get_index(row, col);
        self.cells[idx].toggle();
    }
}

impl std::ops::Index<(u32, u32)> for Universe {
    type Output = Cell;

    fn index(&self, (row, col): (u32, u32)) -> &Self::Output {
        &self.cells[self.get_index(row, col)]
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╭{}╮", "─".repeat(self.width as usize * 2))?;
        for line in self.cells.as_slice().chunks(self.width as usize) {
            write!(f, "│")?;
            for &cell in line {
                let symbol = if cell == Cell::Dead { ' ' } else { '◼' };
                write!(f, "{symbol} ")?;
            }
            writeln!(f, "│")?;
        }
        writeln!(f, "╰{}╯", "─".repeat(self.width as usize * 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe_from(rows: &[&str]) -> Universe {
        let mut univ = Universe::new(rows[0].len() as u32, rows.len() as u32);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    univ.toggle_cell(row as u32, col as u32);
                }
            }
        }
        univ
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut univ = universe_from(&[
            "_____", //
            "_____",
            "_###_",
            "_____",
            "_____",
        ]);
        let horizontal = univ.clone();

        univ.tick();
        let vertical = universe_from(&[
            "_____", //
            "__#__",
            "__#__",
            "__#__",
            "_____",
        ]);
        assert_eq!(univ, vertical);

        univ.tick();
        assert_eq!(univ, horizontal);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut univ = universe_from(&[
            "____", //
            "_##_",
            "_##_",
            "____",
        ]);
        let before = univ.clone();
        univ.tick();
        assert_eq!(univ, before);
    }

    #[test]
    fn neighbor_count_wraps_around_edges() {
        let mut univ = Universe::new(3, 3);
        univ.toggle_cell(0, 0);

        // (2, 2) touches (0, 0) diagonally across both edges of the torus
        assert_eq!(univ.live_neighbor_count(2, 2), 1);
        assert_eq!(univ.live_neighbor_count(0, 2), 1);
        assert_eq!(univ.live_neighbor_count(2, 0), 1);
        assert_eq!(univ.live_neighbor_count(1, 1), 1);
    }

    #[test]
    fn blinker_wraps_across_the_seam() {
        // a lone row of three on the top edge reads its third neighbor row
        // from the bottom edge
        let mut univ = universe_from(&[
            "_###_", //
            "_____",
            "_____",
            "_____",
            "_____",
        ]);
        univ.tick();

        assert_eq!(univ[(4, 2)], Cell::Alive);
        assert_eq!(univ[(0, 2)], Cell::Alive);
        assert_eq!(univ[(1, 2)], Cell::Alive);
    }

    #[test]
    fn toggle_flips_exactly_one_cell() {
        let mut univ = Universe::new(8, 8);
        assert_eq!(univ.population(), 0);

        univ.toggle_cell(3, 5);
        assert_eq!(univ.population(), 1);
        assert_eq!(univ[(3, 5)], Cell::Alive);

        univ.toggle_cell(3, 5);
        assert_eq!(univ.population(), 0);
    }

    #[test]
    fn tick_on_matches_tick() {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let mut reference = Universe::new(16, 16);
        patterns::randomize(&mut reference, 7);
        let mut parallel = reference.clone();

        for _ in 0..4 {
            reference.tick();
            parallel.tick_on(&runtime);
            assert_eq!(reference, parallel);
        }
    }

    #[test]
    fn cell_buffer_is_row_major_and_sized() {
        let mut univ = Universe::new(6, 4);
        assert_eq!(univ.cells().len(), 24);

        univ.toggle_cell(1, 2);
        assert_eq!(univ.cells()[8], Cell::Alive);
    }
}
