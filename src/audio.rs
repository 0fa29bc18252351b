//! Audio playback behind the `Player` capability.
//!
//! `RodioPlayer` decodes on the calling thread so an unsupported file is
//! reported by `Player::play` itself; rodio mixes on its own output thread.

mod player;
mod sink;
mod types;

pub use player::{Player, RodioPlayer};
pub use types::PlaybackState;
