use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::defaults::Defaults;
use crate::error::{ZooError, ZooResult};
use crate::panda::GiantPanda;
use crate::pokemon::{BaddyPokemon, Pokemon};

/// How printed values are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Strings quoted, creatures in their `Debug` form (attack first).
    #[default]
    Text,
    /// One JSON value per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ZooError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One value printed by a demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Printed {
    /// A string result.
    Text(String),
    /// A freshly built creature.
    Creature(BaddyPokemon),
}

impl Printed {
    /// Render this value as a single line.
    pub fn render(&self, format: OutputFormat) -> ZooResult<String> {
        match format {
            OutputFormat::Text => Ok(match self {
                Self::Text(s) => format!("{s:?}"),
                Self::Creature(c) => format!("{c:?}"),
            }),
            OutputFormat::Json => serde_json::to_string(self).map_err(ZooError::Render),
        }
    }
}

impl From<String> for Printed {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Printed {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<BaddyPokemon> for Printed {
    fn from(c: BaddyPokemon) -> Self {
        Self::Creature(c)
    }
}

/// Build Randall the giant panda, rename him, and let him sneeze.
pub fn panda_demo() -> Vec<Printed> {
    tracing::debug!("running panda demo");
    let mut randall = GiantPanda::new("Randall", 20, true, 10.0);
    randall.set_name("Randle");

    vec![randall.name().into(), randall.make_noise().into()]
}

/// Let squirtle speak, then build two baddies: one with the configured
/// default attack and one with "watergun".
pub fn pokemon_demo(defaults: &Defaults) -> Vec<Printed> {
    tracing::debug!(primary_attack = %defaults.primary_attack, "running pokemon demo");
    let squirtle = Pokemon::new("small", "light", "water");

    vec![
        squirtle.speak(Some("squirtle squirt")).into(),
        defaults.baddy_pokemon("small", "light", "water").into(),
        BaddyPokemon::with_attack("small", "light", "water", "watergun").into(),
    ]
}
