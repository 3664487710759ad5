pub mod record;
pub mod writer;

pub use record::*;
pub use writer::*;
