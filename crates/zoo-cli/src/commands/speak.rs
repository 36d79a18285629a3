use zoo_core::{Pokemon, Printed};

use super::Settings;

pub fn run(settings: &Settings, sound: Option<&str>) -> Result<(), String> {
    let squirtle = Pokemon::new("small", "light", "water");
    let said = squirtle.speak_or(sound, settings.defaults.sound());
    super::print_all(&[Printed::from(said)], settings.format)
}
