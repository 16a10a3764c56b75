use std::fmt::Display;

use colored::Colorize;

pub fn print_error(msg: impl Display) {
    eprintln!("{}: {}", "Error".red().bold(), msg);
}

pub fn print_warning(msg: impl Display) {
    eprintln!("{}: {}", "Warning".yellow().bold(), msg);
}
