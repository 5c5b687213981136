use std::env;
use std::process;

mod modules;
mod utilities;

use utilities::error::{CommandError, EXIT_ERR};

struct CliCommand {
    name: &'static str,
    run: fn(&[String]) -> Result<(), CommandError>,
    help: &'static str,
}

static COMMANDS: &[CliCommand] = &[
    CliCommand {
        name: "help",
        run: cmd_help,
        help: "Displays the list of available commands.\n\tNo options.",
    },
    CliCommand {
        name: "lifters",
        run: modules::lifters::run,
        help: "Controls the lifters.\n\tOptions: non-momentary:\n\t\"up\", \"down\"\n\tmomentary:\n\t\"stop\", \"1\", \"2\", \"3\", \"4\", \"set_upper_limit\", \"set_lower_limit\", \"clear_limits\"",
    },
    CliCommand {
        name: "relays",
        run: modules::relays::run,
        help: "Controls the relays.\n\tLocks lifter relays.\n\tOptions:\n\tno options: gets current position of relays.\n\trelay number and \"on\" or \"off\" turns the relay on or off.",
    },
    CliCommand {
        name: "mosfets",
        run: modules::mosfets::run,
        help: "Controls the mosfets.\n\tLocks heater mosfets.\n\tOptions:\n\tno options: gets current position of mosfets.\n\tmosfet number and \"on\" or \"off\" turns the mosfet on or off.",
    },
    CliCommand {
        name: "pwm",
        run: modules::pwm::run,
        help: "Produces a pwm signal on the desired mosfet.\n\tOptions:\n\t(float)percentage, (int)mosfet number.",
    },
    CliCommand {
        name: "read-tc",
        run: modules::thermocouple::run,
        help: "Reads a thermocouple channel.\n\tOptions:\n\t(int)board, (int)channel.",
    },
];

fn cmd_help(_options: &[String]) -> Result<(), CommandError> {
    println!("Available commands:\n");
    for command in COMMANDS {
        println!("\t\"{}\" - {}\n", command.name, command.help);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Incorrect usage. Use help command.");
        process::exit(EXIT_ERR);
    }

    let command = match COMMANDS.iter().find(|command| command.name == args[1]) {
        Some(command) => command,
        None => {
            let error = CommandError::CommandNotFound;
            eprintln!("{}", error);
            process::exit(error.exit_code());
        }
    };

    if let Err(error) = (command.run)(&args[2..]) {
        eprintln!("{}", error);
        process::exit(error.exit_code());
    }
}
