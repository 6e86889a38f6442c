pub mod error;

mod de;
pub mod model;

pub use crate::error::Error;
