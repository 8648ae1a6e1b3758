// This file contains the parser for design request files, which list the restriction sites and
// markers to put in the plasmid.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use std::path::Path;

use crate::error::PlasmidError;
use crate::misc::load_file_lines;


/// The requested enzymes and markers, each in the order they appear in the design file.
/// Duplicates and unknown names are kept as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DesignRequest {
    pub enzymes: Vec<String>,
    pub markers: Vec<String>,
}

pub fn parse_design(filename: &Path) -> Result<DesignRequest, PlasmidError> {
    let lines = load_file_lines(filename)?;
    parse_design_lines(&lines, &filename.display().to_string())
}


fn parse_design_lines(lines: &[String], source: &str) -> Result<DesignRequest, PlasmidError> {
    // Every non-blank line must be exactly "label, value". Labels containing "site" (any case)
    // request a restriction site and everything else requests a marker.
    let mut request = DesignRequest::default();
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() { continue; }
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
        if fields.len() != 2 {
            return Err(PlasmidError::MalformedDesignLine { path: source.to_string(),
                                                           line_number: i + 1,
                                                           line: line.trim().to_string() });
        }
        let (label, value) = (fields[0], fields[1].to_string());
        if is_site_label(label) {
            request.enzymes.push(value);
        } else {
            request.markers.push(value);
        }
    }
    Ok(request)
}


fn is_site_label(label: &str) -> bool {
    label.to_lowercase().contains("site")
}


#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use super::*;
    use crate::tests::make_test_file;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_is_site_label() {
        assert!(is_site_label("Restriction_Site_1"));
        assert!(is_site_label("SITE"));
        assert!(is_site_label("multiple cloning site"));
        assert!(!is_site_label("Selection_Marker"));
        assert!(!is_site_label("Antibiotic"));
        assert!(!is_site_label("s i t e"));
    }

    #[test]
    fn test_parse_design_lines() {
        let text = "Restriction_Site_1, EcoRI\n\
                    Antibiotic_Marker, Ampicillin\n\
                    \n   \n\
                    restriction_site_2,BamHI\n\
                    Screen, Blue_White_Selection\n\
                    Restriction_Site_3, EcoRI\n";
        let request = parse_design_lines(&lines(text), "design.csv").unwrap();
        assert_eq!(request.enzymes, vec!["EcoRI", "BamHI", "EcoRI"]);
        assert_eq!(request.markers, vec!["Ampicillin", "Blue_White_Selection"]);
    }

    #[test]
    fn test_parse_design_lines_empty() {
        let request = parse_design_lines(&lines("\n\n"), "design.csv").unwrap();
        assert_eq!(request, DesignRequest::default());
    }

    #[test]
    fn test_too_many_fields() {
        let text = "Restriction_Site_1, EcoRI\nMarker, Ampicillin, Kanamycin\n";
        match parse_design_lines(&lines(text), "design.csv") {
            Err(PlasmidError::MalformedDesignLine { path, line_number, line }) => {
                assert_eq!(path, "design.csv");
                assert_eq!(line_number, 2);
                assert_eq!(line, "Marker, Ampicillin, Kanamycin");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_too_few_fields() {
        let text = "\nAmpicillin\n";
        assert!(matches!(parse_design_lines(&lines(text), "design.csv"),
                         Err(PlasmidError::MalformedDesignLine { line_number: 2, .. })));
    }

    #[test]
    fn test_parse_design() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("design.csv");
        make_test_file(&path, "Site_1, XbaI\nMarker_1, Kanamycin\n");
        let request = parse_design(&path).unwrap();
        assert_eq!(request.enzymes, vec!["XbaI"]);
        assert_eq!(request.markers, vec!["Kanamycin"]);

        let missing = dir.path().join("missing.csv");
        assert!(matches!(parse_design(&missing), Err(PlasmidError::Read { .. })));
    }
}
