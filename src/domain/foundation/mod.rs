//! Foundation module - Shared domain primitives.
//!
//! Contains the closed enumerations, value objects and error types
//! that form the vocabulary of the lakehouse advisor domain.

mod component;
mod errors;
mod level;
mod scaling_factor;
mod technology;

pub use component::Component;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use level::{Level, Tone};
pub use scaling_factor::ScalingFactor;
pub use technology::{CloudProvider, Technology};
