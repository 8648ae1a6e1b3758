// This file contains functions for printing section headers and explanations to stderr.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use chrono::prelude::*;
use colored::Colorize;


pub fn section_header(text: &str) {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let date = format!("({})", now);
    eprintln!();
    eprintln!("{} {}", text.bold().bright_yellow().underline(), date.dimmed());
}


pub fn explanation(text: &str) {
    let width = terminal_width();
    let wrapped = textwrap::fill(text, width);
    eprintln!("{}", wrapped.dimmed());
    eprintln!();
}


pub fn warning(text: &str) {
    eprintln!("{}", format!("WARNING: {}", text).yellow());
}


fn terminal_width() -> usize {
    // Uses the terminal width when stderr is a terminal, capped at 100 columns.
    let width = term_size::dimensions_stderr().map(|(w, _)| w).unwrap_or(80);
    width.clamp(40, 100)
}
