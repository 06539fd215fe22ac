pub mod console;
pub mod randomizer;
