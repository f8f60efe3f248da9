//! Type definitions

pub mod messages;
pub mod order;
pub mod prediction;
pub mod zone;

pub use messages::*;
pub use order::*;
pub use prediction::*;
pub use zone::*;
