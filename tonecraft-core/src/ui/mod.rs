//! Terminal output helpers: the loading spinner and styled messages

pub mod spinner;
pub mod styled;

pub use spinner::*;
pub use styled::*;
