//! The navigation session: the key-driven state machine between the
//! terminal, the library and the player.

mod model;
mod traversal;

pub use model::*;
pub use traversal::Traversal;
