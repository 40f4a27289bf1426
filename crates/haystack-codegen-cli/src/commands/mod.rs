pub mod generate;
pub mod kinds;
