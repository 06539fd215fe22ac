pub mod automata_trait;
pub mod cell;
