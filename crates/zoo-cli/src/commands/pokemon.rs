use super::Settings;

pub fn run(settings: &Settings) -> Result<(), String> {
    super::print_all(&zoo_core::pokemon_demo(&settings.defaults), settings.format)
}
