pub mod fixer;
pub mod store;
pub mod types;

pub use fixer::*;
pub use store::*;
pub use types::*;
