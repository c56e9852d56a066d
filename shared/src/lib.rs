pub mod directory;
pub mod models;

pub use directory::*;
pub use models::*;
