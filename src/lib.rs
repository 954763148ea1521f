//! Library exports for embedding the scratchpad drawing surface.
//!
//! A host constructs a [`Draw`] from [`config::DrawOptions`], feeds it pointer
//! events, and reads back the live [`draw::Surface`] for display or export.
//! Configuration data structures are exposed alongside so tools can share
//! validation and serialization code with the main binary.

pub mod board;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod input;
pub mod loader;
pub mod util;

pub use board::Draw;
pub use config::Config;
pub use error::{DrawError, LoadError};
