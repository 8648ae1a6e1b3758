// This file contains the code for writing a YAML summary of a plasmid construction run.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use crate::assembly::{Assembly, Insertion, SegmentKind};
use crate::error::PlasmidError;


#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct PlasmidMetrics {
    pub genome_length: usize,
    pub ori_position: usize,
    pub ori_skew: i64,
    pub ori_region_start: usize,
    pub ori_region_end: usize,
    pub markers_inserted: Vec<String>,
    pub enzymes_inserted: Vec<String>,
    pub skipped: Vec<String>,
    pub plasmid_length: usize,
}

impl PlasmidMetrics {
    pub fn new(genome_length: usize, ori_position: usize, ori_skew: i64,
               assembly: &Assembly) -> Self {
        let mut metrics = PlasmidMetrics {
            genome_length,
            ori_position,
            ori_skew,
            ori_region_start: assembly.ori_window.start,
            ori_region_end: assembly.ori_window.end,
            plasmid_length: assembly.len(),
            ..Default::default()
        };
        for insertion in &assembly.insertions {
            match insertion {
                Insertion::Inserted { kind: SegmentKind::Marker, name, .. } =>
                    metrics.markers_inserted.push(name.clone()),
                Insertion::Inserted { kind: SegmentKind::Enzyme, name, .. } =>
                    metrics.enzymes_inserted.push(name.clone()),
                Insertion::Skipped { .. } =>
                    metrics.skipped.push(insertion.to_string()),
            }
        }
        metrics
    }

    pub fn save_to_yaml(&self, filename: &Path) -> Result<(), PlasmidError> {
        save_yaml(filename, self).map_err(|e| PlasmidError::write(filename, e))
    }
}


fn save_yaml<T: Serialize>(yaml_filename: &Path, data: T) -> io::Result<()> {
    let yaml_string = serde_yaml::to_string(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut file = File::create(yaml_filename)?;
    file.write_all(yaml_string.as_bytes())?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use tempfile::tempdir;
    use super::*;
    use crate::assembly::{assemble, DEFAULT_FLANK};
    use crate::reference::{ReferenceTable, SPACER};

    fn test_assembly() -> Assembly {
        let enzymes = vec!["EcoRI".to_string(), "EcoRV".to_string()];
        let markers = vec!["Ampicillin".to_string()];
        assemble(b"GGGGCCCCCCAAAA", 9, DEFAULT_FLANK, &enzymes, &markers,
                 &ReferenceTable::restriction_sites(), &ReferenceTable::markers(), SPACER)
    }

    #[test]
    fn test_new() {
        let metrics = PlasmidMetrics::new(14, 9, -2, &test_assembly());
        assert_eq!(metrics.genome_length, 14);
        assert_eq!(metrics.ori_position, 9);
        assert_eq!(metrics.ori_skew, -2);
        assert_eq!(metrics.ori_region_start, 0);
        assert_eq!(metrics.ori_region_end, 14);
        assert_eq!(metrics.markers_inserted, vec!["Ampicillin"]);
        assert_eq!(metrics.enzymes_inserted, vec!["EcoRI"]);
        assert_eq!(metrics.skipped, vec!["Enzyme 'EcoRV' not found, skipped"]);
        assert_eq!(metrics.plasmid_length, 14 + 51 + 14);
    }

    #[test]
    fn test_save_to_yaml() {
        let dir = tempdir().unwrap();
        let yaml = dir.path().join("plasmid.yaml");
        let metrics = PlasmidMetrics::new(14, 9, -2, &test_assembly());
        metrics.save_to_yaml(&yaml).unwrap();
        let text = read_to_string(&yaml).unwrap();
        assert!(text.contains("ori_position: 9\n"));
        assert!(text.contains("plasmid_length: 79\n"));
        let loaded: PlasmidMetrics = serde_yaml::from_str(&text).unwrap();
        assert_eq!(loaded, metrics);
    }
}
