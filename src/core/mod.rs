//! Core URI functionality.
//!
//! This module contains the main URI operations:
//! - Decomposing references into raw components
//! - Dot-segment removal and reference resolution
//! - Profiles with scheme-specific rules
//! - The immutable `UriValue` type

pub mod parser;
pub mod profile;
pub mod resolver;
pub mod value;

// Re-export main functionality
pub use parser::{split, split_authority, RawAuthority, RawReference};
pub use profile::{Generic, Profile, Web};
pub use resolver::{merge, remove_dot_segments, resolve};
pub use value::{Uri, UriValue, Url};
