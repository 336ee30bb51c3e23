use clap::{arg, value_parser, ArgAction, Command};
use std::env;

use crate::actions::interactive::InteractiveAction;
use crate::actions::{Action, DefaultAction, GeneratePasswordAction, PrintHelpAction};

mod actions;
mod clip;
mod export;
mod generator;
mod history;
mod strength;
mod ui;

fn cli() -> Command {
    Command::new("passforge")
        .about("A password generator for the command line")
        .subcommand_required(false)
        .arg_required_else_help(false)
        .allow_external_subcommands(true)
        .subcommand(
            Command::new("generate")
                .about("Generates a password from the enabled character classes.")
                .arg(
                    arg!(-l --length <LENGTH> "Password length, clamped to 6-50.")
                        .value_parser(value_parser!(usize))
                        .required(false),
                )
                .arg(arg!(--"no-upper" "Leave out uppercase letters.").action(ArgAction::SetTrue))
                .arg(arg!(--"no-lower" "Leave out lowercase letters.").action(ArgAction::SetTrue))
                .arg(arg!(--"no-digits" "Leave out digits.").action(ArgAction::SetTrue))
                .arg(arg!(--"no-symbols" "Leave out symbols.").action(ArgAction::SetTrue))
                .arg(
                    arg!(-c --clipboard "Copy the password to the clipboard.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(-s --save <FILE_PATH> "Save the password to a plain text file.")
                        .required(false),
                ),
        )
        .subcommand(
            Command::new("interactive")
                .about("Starts an interactive session that keeps the two most recent passwords."),
        )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("generate", sub_matches)) => GeneratePasswordAction::new(sub_matches).run()?,
        Some(("interactive", _)) => InteractiveAction {}.run()?,
        _ => {
            if env::args().len() == 1 {
                DefaultAction {}.run()?
            } else {
                PrintHelpAction::new(cli()).run()?
            }
        }
    }
    Ok(())
}
