// This file contains miscellaneous functions used by various parts of Plasmid Designer.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::path::Path;
use std::time::Duration;

use crate::error::PlasmidError;


pub fn load_file_lines(filename: &Path) -> Result<Vec<String>, PlasmidError> {
    let file = File::open(filename).map_err(|e| PlasmidError::read(filename, e))?;
    BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()
                        .map_err(|e| PlasmidError::read(filename, e))
}


pub fn check_if_file_exists(filename: &Path) {
    // Quits with an error if the given path is not an existing file.
    if !filename.exists() {
        quit_with_error(&format!("file does not exist: {}", filename.display()));
    }
    if !filename.is_file() {
        quit_with_error(&format!("{} is not a file", filename.display()));
    }
}


pub fn check_if_not_dir(filename: &Path) {
    // Quits with an error if the given path is an existing directory (not existing is okay).
    if filename.is_dir() {
        quit_with_error(&format!("{} is a directory", filename.display()));
    }
}


#[cfg(not(test))]
pub fn quit_with_error(text: &str) -> ! {
    // For friendly error messages, this function normally just prints the error and quits.
    eprintln!();
    eprintln!("Error: {}", text);
    std::process::exit(1);
}
#[cfg(test)]
pub fn quit_with_error(text: &str) -> ! {
    // But when running unit tests, this function instead panics so I can catch it for the test.
    panic!("{}", text);
}


pub fn format_duration(duration: Duration) -> String {
    let microseconds = duration.as_micros() % 1000000;
    let seconds =      duration.as_micros() / 1000000 % 60;
    let minutes =      duration.as_micros() / 1000000 / 60 % 60;
    let hours =        duration.as_micros() / 1000000 / 60 / 60;
    format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, microseconds)
}


pub fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}


pub fn spinner(message: &str) -> ProgressBar {
    if cfg!(test) {
        ProgressBar::hidden() // don't show a spinner during unit tests
    } else {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠚", "⠞", "⠖", "⠦", "⠴", "⠲", "⠳", "⠓"])
                .template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb
    }
}
