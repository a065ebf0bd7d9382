pub mod documents;
pub mod engine;
pub mod product;

pub use documents::*;
pub use engine::*;
pub use product::*;
