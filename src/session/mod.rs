//! Session glue: draws words for successive rounds and owns the live board.

mod driver;

pub use driver::Session;
