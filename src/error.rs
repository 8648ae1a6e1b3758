// This file defines the error type returned by the loading, parsing and ORI-finding code.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use std::io;
use std::path::Path;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum PlasmidError {
    #[error("cannot find an origin in an empty sequence")]
    EmptyInput,

    #[error("{path} line {line_number} does not have exactly two comma-separated fields: {line}")]
    MalformedDesignLine { path: String, line_number: usize, line: String },

    #[error("unable to read {path}\n{source}")]
    Read { path: String, #[source] source: io::Error },

    #[error("unable to write {path}\n{source}")]
    Write { path: String, #[source] source: io::Error },
}

impl PlasmidError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        PlasmidError::Read { path: path.display().to_string(), source }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        PlasmidError::Write { path: path.display().to_string(), source }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(PlasmidError::EmptyInput.to_string(),
                   "cannot find an origin in an empty sequence");
        let e = PlasmidError::MalformedDesignLine { path: "design.csv".to_string(), line_number: 3,
                                                    line: "a,b,c".to_string() };
        assert_eq!(e.to_string(),
                   "design.csv line 3 does not have exactly two comma-separated fields: a,b,c");
        let e = PlasmidError::read(Path::new("genome.fasta"),
                                   io::Error::new(io::ErrorKind::NotFound, "not found"));
        assert_eq!(e.to_string(), "unable to read genome.fasta\nnot found");
    }
}
