pub mod common;
pub mod destination;
pub mod error;
pub mod plan;
pub mod trip;

pub use common::*;
pub use destination::*;
pub use error::*;
pub use plan::*;
pub use trip::*;
