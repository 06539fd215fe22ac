/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// B3/S23. `neighbors` counts live cells around this one, not itself.
    #[must_use]
    pub fn next_state(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) => Cell::Alive,
            (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
