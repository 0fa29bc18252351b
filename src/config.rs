//! Settings for the library location, now-playing text, audio volume and logging.
//!
//! Values come from an optional TOML file overridden by `CLI_AUDIO__*`
//! environment variables; see `Settings::load`.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
