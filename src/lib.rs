// src/lib.rs

pub mod table;

pub use classes::{Class, NUM_CLASSES};
pub use error::{CharmapError, ClassError};
