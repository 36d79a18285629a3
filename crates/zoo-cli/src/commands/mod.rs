pub mod panda;
pub mod pokemon;
pub mod speak;

use std::path::Path;

use zoo_core::{Defaults, OutputFormat, Printed};

/// Options shared by every command.
pub struct Settings {
    pub defaults: Defaults,
    pub format: OutputFormat,
}

impl Settings {
    /// Resolve the defaults file and output format from the command line.
    pub fn load(defaults: Option<&Path>, format: &str) -> Result<Self, String> {
        let format = format.parse::<OutputFormat>().map_err(|e| e.to_string())?;
        let defaults = match defaults {
            Some(path) => Defaults::load(path).map_err(|e| e.to_string())?,
            None => Defaults::default(),
        };
        tracing::debug!(%format, "settings resolved");
        Ok(Self { defaults, format })
    }
}

/// Print each value on its own line.
fn print_all(values: &[Printed], format: OutputFormat) -> Result<(), String> {
    for value in values {
        let line = value.render(format).map_err(|e| e.to_string())?;
        println!("{line}");
    }
    Ok(())
}
