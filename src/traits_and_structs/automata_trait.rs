use std::io::{self, Write};

pub trait CellAutomata {
    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()>;
    fn update(&mut self);
    fn population(&self) -> usize;
    fn describe() -> String;
}
