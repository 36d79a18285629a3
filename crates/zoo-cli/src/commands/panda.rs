use super::Settings;

pub fn run(settings: &Settings) -> Result<(), String> {
    super::print_all(&zoo_core::panda_demo(), settings.format)
}
