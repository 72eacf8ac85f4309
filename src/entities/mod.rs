pub mod food;
pub mod order;

pub use food::*;
pub use order::*;
