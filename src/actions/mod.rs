pub mod interactive;

use clap::{ArgMatches, Command};
use log::debug;
use std::io;

use crate::clip;
use crate::export;
use crate::generator::{CharClass, GeneratorConfig};
use crate::strength::Strength;

pub trait Action {
    fn run(&self) -> anyhow::Result<()>;
}

pub struct GeneratePasswordAction {
    config: GeneratorConfig,
    copy: bool,
    save_path: Option<String>,
}

impl GeneratePasswordAction {
    pub fn new(matches: &ArgMatches) -> GeneratePasswordAction {
        let mut config = GeneratorConfig::default();
        if let Some(length) = matches.get_one::<usize>("length") {
            config.set_length(*length);
        }
        let exclusions = [
            ("no-upper", CharClass::Upper),
            ("no-lower", CharClass::Lower),
            ("no-digits", CharClass::Digit),
            ("no-symbols", CharClass::Symbol),
        ];
        for (flag, class) in exclusions {
            if matches.get_one::<bool>(flag).map_or(false, |v| *v) {
                config.set_enabled(class, false);
            }
        }
        GeneratePasswordAction {
            config,
            copy: matches.get_one::<bool>("clipboard").map_or(false, |v| *v),
            save_path: matches.get_one::<String>("save").cloned(),
        }
    }
}

impl Action for GeneratePasswordAction {
    fn run(&self) -> anyhow::Result<()> {
        debug!(
            "generating with length {} and {} enabled classes",
            self.config.length(),
            self.config.enabled_count()
        );
        let password = self.config.generate();
        println!("{}", password);
        println!("{}", strength_line(&self.config));
        if self.copy {
            match clip::copy_to_clipboard(&password) {
                Ok(_) => println!("Password copied to clipboard"),
                Err(e) => println!("Failed to copy password: {}", e),
            }
        }
        if let Some(path) = &self.save_path {
            export::save_password(path, &password)?;
            println!("Password saved to '{}'", path);
        }
        Ok(())
    }
}

/// Run without any arguments: generate with the defaults and put the result
/// on the clipboard.
pub struct DefaultAction;

impl Action for DefaultAction {
    fn run(&self) -> anyhow::Result<()> {
        let config = GeneratorConfig::default();
        let password = config.generate();
        match clip::copy_to_clipboard(&password) {
            Ok(_) => println!("Password - also copied to clipboard: {}", password),
            Err(e) => {
                println!("{}", password);
                println!("Failed to copy password: {}", e);
            }
        }
        println!("{}", strength_line(&config));
        Ok(())
    }
}

fn strength_line(config: &GeneratorConfig) -> String {
    format!("Strength: {}", Strength::classify(config))
}

pub struct PrintHelpAction {
    cli: Command,
}

impl PrintHelpAction {
    pub fn new(cli: Command) -> PrintHelpAction {
        PrintHelpAction { cli }
    }
}

impl Action for PrintHelpAction {
    fn run(&self) -> anyhow::Result<()> {
        let mut out = io::stdout();
        self.cli.clone().write_help(&mut out)?;
        Ok(())
    }
}
