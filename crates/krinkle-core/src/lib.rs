//! # Krinkle Core
//!
//! Core types and utilities shared by the Krinkle crates.
//! Provides the error taxonomy, shared constants, the mode tag and the
//! frame-driven timeline used to defer work by a tick.

pub mod constants;
pub mod error;
pub mod mode;
pub mod timeline;

pub use error::{GenerationError, ModeError};
pub use mode::TilingMode;
pub use timeline::{TimedEntity, Timeline};
