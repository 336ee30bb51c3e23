use inquire::{CustomType, MultiSelect, Select, Text};

use crate::export::DEFAULT_FILENAME;
use crate::generator::{CharClass, GeneratorConfig, MAX_LENGTH, MIN_LENGTH};

pub fn ask_menu_choice(options: Vec<&str>) -> anyhow::Result<&str> {
    Ok(Select::new("Choose an action", options).prompt()?)
}

pub fn ask_length(current: usize) -> anyhow::Result<usize> {
    let question = format!("Password length ({}-{})", MIN_LENGTH, MAX_LENGTH);
    let length = CustomType::<usize>::new(&question)
        .with_default(current)
        .with_error_message("Please enter a valid number")
        .with_help_message("Values outside the range are clamped")
        .prompt()?;
    Ok(length)
}

pub fn ask_classes(config: &GeneratorConfig) -> anyhow::Result<Vec<CharClass>> {
    let defaults: Vec<usize> = CharClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| config.is_enabled(**class))
        .map(|(index, _)| index)
        .collect();
    let chosen = MultiSelect::new("Character classes", CharClass::ALL.to_vec())
        .with_default(&defaults)
        .with_help_message("Selecting nothing falls back to lowercase letters")
        .prompt()?;
    Ok(chosen)
}

pub fn ask_save_path() -> anyhow::Result<String> {
    Ok(Text::new("Enter file path")
        .with_default(DEFAULT_FILENAME)
        .prompt()?)
}
