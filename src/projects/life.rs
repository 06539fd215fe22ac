#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::io::{self, Write};

use log::{info, trace};

use crate::auxiliary::console::{write_frame, FRAME_DELAY};
use crate::auxiliary::randomizer::{generate_seed, unit_f32};
use crate::projects::driver::run;
use crate::traits_and_structs::automata_trait::CellAutomata;
use crate::traits_and_structs::cell::Cell;

pub fn run_life() -> io::Result<()> {
    let seed = generate_seed()?;
    info!("seeding grid with {:?}", seed);
    let mut grid = Grid::new_random(seed);
    info!("{}", Grid::describe());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut grid, &mut out, FRAME_DELAY, |_| false)?;
    Ok(())
}

pub const GRID_WIDTH: usize = 40;
pub const GRID_HEIGHT: usize = 30;

/// Probability that a cell starts out alive.
const INITIAL_FILL: f32 = 0.1;

const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// One generation of the toroidal Game of Life board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    pub fn new_empty() -> Self {
        Self {
            cells: [Cell::default(); CELL_COUNT],
        }
    }

    pub fn new_random(seed: (u64, u64)) -> Self {
        let mut result = Self::new_empty();
        result.randomize(seed);
        result
    }

    /// Build a grid with exactly the listed `(x, y)` cells alive.
    /// Coordinates wrap, so patterns may straddle an edge.
    #[cfg(test)]
    pub fn from_live_cells(live: &[(isize, isize)]) -> Self {
        let mut result = Self::new_empty();
        for &(x, y) in live {
            let idx = Self::wrapped_idx(x, y);
            result.cells[idx] = Cell::Alive;
        }
        result
    }

    pub fn randomize(&mut self, seed: (u64, u64)) {
        let mut rng: randomize::PCG32 = seed.into();
        for c in self.cells.iter_mut() {
            *c = Cell::new(unit_f32(&mut rng) < INITIAL_FILL);
        }
    }

    /// Cell at `(x, y)` with both coordinates taken modulo the board size.
    pub fn wrapped(&self, x: isize, y: isize) -> Cell {
        self.cells[Self::wrapped_idx(x, y)]
    }

    /// Live cells in the 3x3 block centred on `(x, y)`, the centre included.
    fn block_population(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as isize, y as isize);
        let mut n = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if self.wrapped(x + dx, y + dy).is_alive() {
                    n += 1;
                }
            }
        }
        n
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut n = self.block_population(x, y);
        if self.wrapped(x as isize, y as isize).is_alive() {
            n -= 1;
        }
        n
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        self.cells
            .chunks_exact(GRID_WIDTH)
            .map(|row| row.iter().map(|c| c.is_alive()))
    }

    fn wrapped_idx(x: isize, y: isize) -> usize {
        let x = x.rem_euclid(GRID_WIDTH as isize) as usize;
        let y = y.rem_euclid(GRID_HEIGHT as isize) as usize;
        x + y * GRID_WIDTH
    }
}

/// Compute the next generation. Every read comes from `current`.
pub fn evolve(current: &Grid) -> Grid {
    let mut next = Grid::new_empty();
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let idx = x + y * GRID_WIDTH;
            next.cells[idx] = current.cells[idx].next_state(current.live_neighbors(x, y));
        }
    }
    next
}

impl CellAutomata for Grid {
    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_frame(out, self.rows())
    }

    fn update(&mut self) {
        *self = evolve(self);
        trace!("grid advanced, {} alive", self.population());
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn describe() -> String {
        format!(
            "Conway's Game of Life (B3/S23) on a {}x{} torus",
            GRID_WIDTH, GRID_HEIGHT
        )
    }
}
