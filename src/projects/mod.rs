pub mod driver;
pub mod life;
