#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod service;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use protocol::*;
#[cfg(feature = "std")]
pub use service::InMemoryMatches;
