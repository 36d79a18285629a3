use std::fmt;

use serde::Serialize;

use crate::defaults::{DEFAULT_PRIMARY_ATTACK, DEFAULT_SOUND};

/// A pokemon described by three free-form categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    size: String,
    weight_class: String,
    habitat: String,
}

impl Pokemon {
    /// Create a pokemon. No category is validated.
    pub fn new(
        size: impl Into<String>,
        weight_class: impl Into<String>,
        habitat: impl Into<String>,
    ) -> Self {
        let pokemon = Self {
            size: size.into(),
            weight_class: weight_class.into(),
            habitat: habitat.into(),
        };
        tracing::debug!(
            size = %pokemon.size,
            weight_class = %pokemon.weight_class,
            habitat = %pokemon.habitat,
            "pokemon constructed"
        );
        pokemon
    }

    /// Size category, e.g. "small".
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Change the size category.
    pub fn set_size(&mut self, size: impl Into<String>) {
        self.size = size.into();
    }

    /// Weight category, e.g. "light".
    pub fn weight_class(&self) -> &str {
        &self.weight_class
    }

    /// Change the weight category.
    pub fn set_weight_class(&mut self, weight_class: impl Into<String>) {
        self.weight_class = weight_class.into();
    }

    /// Habitat category, e.g. "water".
    pub fn habitat(&self) -> &str {
        &self.habitat
    }

    /// Change the habitat category.
    pub fn set_habitat(&mut self, habitat: impl Into<String>) {
        self.habitat = habitat.into();
    }

    /// Say `sound`, or [`DEFAULT_SOUND`] when none is given.
    pub fn speak<'a>(&self, sound: Option<&'a str>) -> &'a str {
        self.speak_or(sound, DEFAULT_SOUND)
    }

    /// Say `sound`, or `fallback` when none is given.
    ///
    /// Lets callers holding a configured [`crate::Defaults`] substitute its
    /// sound for [`DEFAULT_SOUND`].
    pub fn speak_or<'a>(&self, sound: Option<&'a str>, fallback: &'a str) -> &'a str {
        sound.unwrap_or(fallback)
    }
}

/// A pokemon with a signature attack.
///
/// The attack is listed before the base categories in both the `Debug`
/// and the serialized form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct BaddyPokemon {
    primary_attack: String,
    #[serde(flatten)]
    base: Pokemon,
}

impl fmt::Debug for BaddyPokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaddyPokemon")
            .field("primary_attack", &self.primary_attack)
            .field("size", &self.base.size)
            .field("weight_class", &self.base.weight_class)
            .field("habitat", &self.base.habitat)
            .finish()
    }
}

impl BaddyPokemon {
    /// Create a baddy whose primary attack is [`DEFAULT_PRIMARY_ATTACK`].
    pub fn new(
        size: impl Into<String>,
        weight_class: impl Into<String>,
        habitat: impl Into<String>,
    ) -> Self {
        Self::with_attack(size, weight_class, habitat, DEFAULT_PRIMARY_ATTACK)
    }

    /// Create a baddy with an explicit primary attack.
    pub fn with_attack(
        size: impl Into<String>,
        weight_class: impl Into<String>,
        habitat: impl Into<String>,
        primary_attack: impl Into<String>,
    ) -> Self {
        Self {
            primary_attack: primary_attack.into(),
            base: Pokemon::new(size, weight_class, habitat),
        }
    }

    /// The embedded base pokemon.
    pub fn pokemon(&self) -> &Pokemon {
        &self.base
    }

    /// Mutable access to the embedded base pokemon.
    pub fn pokemon_mut(&mut self) -> &mut Pokemon {
        &mut self.base
    }

    /// The signature attack.
    pub fn primary_attack(&self) -> &str {
        &self.primary_attack
    }

    /// Change the signature attack.
    pub fn set_primary_attack(&mut self, primary_attack: impl Into<String>) {
        self.primary_attack = primary_attack.into();
    }

    /// Size category.
    pub fn size(&self) -> &str {
        self.base.size()
    }

    /// Change the size category.
    pub fn set_size(&mut self, size: impl Into<String>) {
        self.base.set_size(size);
    }

    /// Weight category.
    pub fn weight_class(&self) -> &str {
        self.base.weight_class()
    }

    /// Change the weight category.
    pub fn set_weight_class(&mut self, weight_class: impl Into<String>) {
        self.base.set_weight_class(weight_class);
    }

    /// Habitat category.
    pub fn habitat(&self) -> &str {
        self.base.habitat()
    }

    /// Change the habitat category.
    pub fn set_habitat(&mut self, habitat: impl Into<String>) {
        self.base.set_habitat(habitat);
    }

    /// See [`Pokemon::speak`].
    pub fn speak<'a>(&self, sound: Option<&'a str>) -> &'a str {
        self.base.speak(sound)
    }
}
