pub mod config;
pub mod events;
pub mod flavor;
pub mod selection;

pub use config::*;
pub use events::*;
pub use flavor::*;
pub use selection::*;
