//! Options system for typed, runtime configuration
//!
//! The options system provides:
//! - A fixed kind per key, checked on every mutation
//! - Lookup, mutation and sorted enumeration through one registry
//! - Rendering back into `set` directive syntax

pub mod builder;
pub mod print;
pub mod registrations;
pub mod registry;
pub mod types;

pub use builder::OptionDefBuilder;
pub use print::{dump, print, print_set};
pub use registry::OptionsRegistry;
pub use types::{normalize_key, OptionDefinition, OptionError, OptionKind, OptionValue};
