use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{debug, error};

use crate::traits_and_structs::automata_trait::CellAutomata;

/// Render, advance and pace until `stop` returns true for the number of
/// generations rendered so far. Returns that number.
pub fn run<A, W, F>(automata: &mut A, out: &mut W, delay: Duration, mut stop: F) -> io::Result<u64>
where
    A: CellAutomata,
    W: Write,
    F: FnMut(u64) -> bool,
{
    let mut generation = 0;
    while !stop(generation) {
        automata
            .draw(out)
            .map_err(|e| {
                error!("render failed at generation {}: {}", generation, e);
                e
            })?;
        automata.update();
        generation += 1;
        debug!("generation {}: {} alive", generation, automata.population());
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::life::{evolve, Grid, GRID_HEIGHT};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn stops_after_requested_generations() {
        let mut grid = Grid::from_live_cells(&[(20, 14), (20, 15), (20, 16)]);
        let start = grid;
        let mut out = Vec::new();
        let n = run(&mut grid, &mut out, Duration::ZERO, |g| g == 3).unwrap();
        assert_eq!(n, 3);
        assert_eq!(grid, evolve(&start));
        // three frames of H rows plus a separator each
        let lines = out.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(lines, 3 * (GRID_HEIGHT + 1));
    }

    #[test]
    fn first_frame_is_the_initial_state() {
        let mut grid = Grid::new_random((4, 4));
        let mut expected = Vec::new();
        grid.draw(&mut expected).unwrap();
        let mut out = Vec::new();
        run(&mut grid, &mut out, Duration::ZERO, |g| g == 1).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn immediate_stop_renders_nothing() {
        let mut grid = Grid::new_random((1, 1));
        let start = grid;
        let mut out = Vec::new();
        assert_eq!(run(&mut grid, &mut out, Duration::ZERO, |_| true).unwrap(), 0);
        assert!(out.is_empty());
        assert_eq!(grid, start);
    }

    #[test]
    fn write_errors_propagate() {
        let mut grid = Grid::new_empty();
        let err = run(&mut grid, &mut BrokenPipe, Duration::ZERO, |_| false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
