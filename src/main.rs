// Game of Life on a 40x30 torus, rendered as text.

use std::io;

mod auxiliary;
mod projects;
mod traits_and_structs;

fn main() -> Result<(), io::Error> {
    env_logger::init();
    projects::life::run_life()
}
