// This file contains the built-in restriction site and marker tables, the spacer sequence placed
// between inserted segments and the loader for user-supplied marker tables.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use fxhash::FxHashMap;
use std::path::Path;

use crate::error::PlasmidError;
use crate::misc::load_file_lines;


/// BioBrick scar, placed before every inserted marker and restriction site.
pub const SPACER: &str = "TACTAGAG";

pub const RESTRICTION_SITES: &[(&str, &str)] = &[
    ("EcoRI",   "GAATTC"),
    ("BamHI",   "GGATCC"),
    ("HindIII", "AAGCTT"),
    ("PstI",    "CTGCAG"),
    ("SphI",    "GCATGC"),
    ("SalI",    "GTCGAC"),
    ("XbaI",    "TCTAGA"),
    ("KpnI",    "GGTACC"),
    ("SacI",    "GAGCTC"),
    ("SmaI",    "CCCGGG"),
    ("NotI",    "GCGGCCGC"),
];

pub const MARKERS: &[(&str, &str)] = &[
    ("Ampicillin",           "ATGAGTATTCAACATTTCCGTGTCGCCCTTATTCCCTTTTTTG"),
    ("Kanamycin",            "ATGAGCCATATTCAACGGGAAACGTCTTGCTCGAGGCC"),
    ("Chloramphenicol",      "ATGGAGAAAAAAATCACTGGATATACCACCGTTGATATATCC"),
    ("Blue_White_Selection", "ATGACCATGATTACGCCAAGCTTGCATGCCTGCAGGTCGAC"),
];


/// A read-only name-to-sequence lookup. Once built for a run it is only ever queried.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceTable {
    entries: FxHashMap<String, String>,
}

impl ReferenceTable {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> ReferenceTable {
        ReferenceTable {
            entries: pairs.iter().map(|(n, s)| (n.to_string(), s.to_string())).collect(),
        }
    }

    pub fn restriction_sites() -> ReferenceTable {
        ReferenceTable::from_pairs(RESTRICTION_SITES)
    }

    pub fn markers() -> ReferenceTable {
        ReferenceTable::from_pairs(MARKERS)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn overlaid_with(mut self, other: ReferenceTable) -> ReferenceTable {
        // Entries from the other table are added, replacing any with the same name.
        self.entries.extend(other.entries);
        self
    }
}


pub fn load_table(filename: &Path) -> Result<ReferenceTable, PlasmidError> {
    let lines = load_file_lines(filename)?;
    Ok(parse_table_lines(&lines))
}


fn parse_table_lines(lines: &[String]) -> ReferenceTable {
    // Each usable line is a label and a value separated by the first comma, so the value can
    // itself contain commas. Lines without a comma are ignored.
    let mut entries = FxHashMap::default();
    for line in lines {
        let line = line.trim();
        if let Some((label, value)) = line.split_once(',') {
            entries.insert(label.trim().to_string(), value.trim().to_string());
        }
    }
    ReferenceTable { entries }
}


#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use super::*;
    use crate::tests::make_test_file;

    #[test]
    fn test_builtin_tables() {
        let sites = ReferenceTable::restriction_sites();
        assert_eq!(sites.len(), 11);
        assert_eq!(sites.get("EcoRI"), Some("GAATTC"));
        assert_eq!(sites.get("NotI"), Some("GCGGCCGC"));
        assert_eq!(sites.get("ecori"), None);

        let markers = ReferenceTable::markers();
        assert_eq!(markers.len(), 4);
        assert_eq!(markers.get("Kanamycin"), Some("ATGAGCCATATTCAACGGGAAACGTCTTGCTCGAGGCC"));
        assert_eq!(markers.get("Tetracycline"), None);
    }

    #[test]
    fn test_builtin_sequences_are_acgt() {
        for (_, seq) in RESTRICTION_SITES.iter().chain(MARKERS.iter()).chain([("", SPACER)].iter()) {
            assert!(seq.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
        }
    }

    #[test]
    fn test_parse_table_lines() {
        let lines: Vec<String> = ["Tetracycline, ATGAAATCTAACAATGCG",
                                  "",
                                  "no comma on this line",
                                  "  Note ,  free text, with commas  ",
                                  "Ampicillin,ATGAGT"].iter().map(|s| s.to_string()).collect();
        let table = parse_table_lines(&lines);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("Tetracycline"), Some("ATGAAATCTAACAATGCG"));
        assert_eq!(table.get("Note"), Some("free text, with commas"));
        assert_eq!(table.get("Ampicillin"), Some("ATGAGT"));
        assert_eq!(table.get("no comma on this line"), None);
    }

    #[test]
    fn test_later_entries_replace_earlier_ones() {
        let lines = vec!["a,AAAA".to_string(), "a,CCCC".to_string()];
        assert_eq!(parse_table_lines(&lines).get("a"), Some("CCCC"));
    }

    #[test]
    fn test_overlaid_with() {
        let user = ReferenceTable::from_pairs(&[("Ampicillin", "ATG"), ("Tetracycline", "GGG")]);
        let table = ReferenceTable::markers().overlaid_with(user);
        assert_eq!(table.len(), 5);
        assert_eq!(table.get("Ampicillin"), Some("ATG"));
        assert_eq!(table.get("Tetracycline"), Some("GGG"));
        assert_eq!(table.get("Kanamycin"), Some("ATGAGCCATATTCAACGGGAAACGTCTTGCTCGAGGCC"));
    }

    #[test]
    fn test_load_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markers.csv");
        make_test_file(&path, "label,value\nTetracycline,ATGAAATCT\n\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Tetracycline"), Some("ATGAAATCT"));

        let missing = dir.path().join("missing.csv");
        assert!(matches!(load_table(&missing), Err(PlasmidError::Read { .. })));
    }
}
