//! Interactive generation session.
//!
//! Keeps the session configuration and the two most recent passwords, and
//! re-renders them after every generation. Nothing survives the session.

use log::debug;

use crate::actions::Action;
use crate::clip;
use crate::export;
use crate::generator::GeneratorConfig;
use crate::history::History;
use crate::strength::Strength;
use crate::ui;

const GENERATE: &str = "Generate password";
const SET_LENGTH: &str = "Set length";
const TOGGLE_CLASSES: &str = "Toggle character classes";
const COPY_CURRENT: &str = "Copy current to clipboard";
const COPY_PREVIOUS: &str = "Copy previous to clipboard";
const SAVE: &str = "Save current to file";
const QUIT: &str = "Quit";

pub struct InteractiveAction;

impl Action for InteractiveAction {
    fn run(&self) -> anyhow::Result<()> {
        let mut config = GeneratorConfig::default();
        let mut history = History::new();

        loop {
            ui::output::show_config(&config);

            let mut options = vec![GENERATE, SET_LENGTH, TOGGLE_CLASSES];
            if history.current().is_some() {
                options.push(COPY_CURRENT);
                options.push(SAVE);
            }
            if history.previous().is_some() {
                options.push(COPY_PREVIOUS);
            }
            options.push(QUIT);

            match ui::input::ask_menu_choice(options)? {
                GENERATE => {
                    history.push(config.generate());
                    ui::output::show_history_table(&history, Strength::classify(&config));
                }
                SET_LENGTH => {
                    let length = ui::input::ask_length(config.length())?;
                    config.set_length(length);
                }
                TOGGLE_CLASSES => {
                    let classes = ui::input::ask_classes(&config)?;
                    config.set_classes(&classes);
                }
                COPY_CURRENT => copy(history.current()),
                COPY_PREVIOUS => copy(history.previous()),
                SAVE => {
                    if let Some(password) = history.current() {
                        let path = ui::input::ask_save_path()?;
                        match export::save_password(&path, password) {
                            Ok(_) => println!("Password saved to '{}'", path),
                            Err(e) => println!("Failed to save: {}", e),
                        }
                    }
                }
                _ => {
                    debug!("leaving interactive session");
                    break;
                }
            }
        }
        Ok(())
    }
}

fn copy(value: Option<&str>) {
    if let Some(password) = value {
        match clip::copy_to_clipboard(password) {
            Ok(_) => println!("Password copied to clipboard"),
            Err(e) => println!("Failed to copy password: {}", e),
        }
    }
}
