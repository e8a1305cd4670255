pub mod entities;
pub mod hf;
pub mod span;

pub use entities::*;
pub use hf::*;
pub use span::*;
