//! Default values for arguments that callers may leave out.
//!
//! The constants are what the plain constructors use. A [`Defaults`] value
//! carries the sound and attack settings and can be loaded from a JSON
//! document such as `{"primary_attack": "tackle"}`; keys that are left out
//! keep their constant value. Fluffiness is not configurable: it only
//! applies through [`crate::Panda::new`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ZooError, ZooResult};
use crate::pokemon::BaddyPokemon;

/// What a pokemon says when no sound is given.
pub const DEFAULT_SOUND: &str = "rawr";

/// The attack a baddy pokemon gets when none is given.
pub const DEFAULT_PRIMARY_ATTACK: &str = "punch";

/// Whether a panda is fluffy when not stated.
pub const DEFAULT_IS_FLUFFY: bool = true;

/// A set of defaults for omitted arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Sound used by [`Defaults::sound`].
    pub sound: String,
    /// Attack given by [`Defaults::baddy_pokemon`].
    pub primary_attack: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            sound: DEFAULT_SOUND.to_string(),
            primary_attack: DEFAULT_PRIMARY_ATTACK.to_string(),
        }
    }
}

impl Defaults {
    /// Set the default sound.
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = sound.into();
        self
    }

    /// Set the default primary attack.
    pub fn with_primary_attack(mut self, primary_attack: impl Into<String>) -> Self {
        self.primary_attack = primary_attack.into();
        self
    }

    /// Parse defaults from a JSON document.
    pub fn from_json_str(json: &str) -> ZooResult<Self> {
        serde_json::from_str(json).map_err(ZooError::InvalidDefaults)
    }

    /// Read and parse a JSON defaults file.
    pub fn load(path: &Path) -> ZooResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ZooError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let defaults = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?defaults, "loaded defaults");
        Ok(defaults)
    }

    /// The default sound.
    pub fn sound(&self) -> &str {
        &self.sound
    }

    /// Create a baddy pokemon with the default primary attack.
    pub fn baddy_pokemon(
        &self,
        size: impl Into<String>,
        weight_class: impl Into<String>,
        habitat: impl Into<String>,
    ) -> BaddyPokemon {
        BaddyPokemon::with_attack(size, weight_class, habitat, self.primary_attack.as_str())
    }
}
