//! Core types for the zoo demos: two small animal hierarchies, their
//! configurable defaults, and the transcripts the `zoo` binary prints.
//!
//! Each derived animal embeds its base animal and forwards construction to
//! it. Nothing here allocates beyond owned strings, and every entity
//! operation is infallible.

/// Configurable default values for optional constructor and method arguments.
pub mod defaults;
/// Scripted demo runs and how their printed values are rendered.
pub mod demo;
/// Error types used throughout the crate.
pub mod error;
/// The panda hierarchy: [`Panda`] and [`GiantPanda`].
pub mod panda;
/// The pokemon hierarchy: [`Pokemon`] and [`BaddyPokemon`].
pub mod pokemon;

/// Re-export the configurable defaults.
pub use defaults::{DEFAULT_IS_FLUFFY, DEFAULT_PRIMARY_ATTACK, DEFAULT_SOUND, Defaults};
/// Re-export demo runners and rendering types.
pub use demo::{OutputFormat, Printed, panda_demo, pokemon_demo};
/// Re-export error types.
pub use error::{ZooError, ZooResult};
/// Re-export the panda hierarchy.
pub use panda::{GiantPanda, Panda};
/// Re-export the pokemon hierarchy.
pub use pokemon::{BaddyPokemon, Pokemon};
