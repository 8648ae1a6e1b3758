// This file contains the code that runs a plasmid construction: load the genome, find the ORI,
// read the design, assemble the plasmid and save it.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use colored::Colorize;
use std::fs::remove_file;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assembly::{assemble, Assembly, SegmentKind};
use crate::error::PlasmidError;
use crate::fasta::{load_genome, write_fasta};
use crate::log::{section_header, explanation, warning};
use crate::metrics::PlasmidMetrics;
use crate::misc::{check_if_file_exists, check_if_not_dir, format_duration, plural,
                  quit_with_error, spinner};
use crate::reference::{load_table, ReferenceTable, SPACER};
use crate::request::{parse_design, DesignRequest};
use crate::skew::{detect_origin, gc_skew_profile};


/// Everything the construct command needs, as given on the command line.
pub struct Settings {
    pub input: PathBuf,
    pub design: PathBuf,
    pub markers: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub flank: usize,
    pub line_width: usize,
    pub yaml: Option<PathBuf>,
}


pub fn construct(settings: Settings) {
    let start_time = Instant::now();
    check_settings(&settings);
    starting_message();
    print_settings(&settings);
    if let Err(e) = run(&settings) {
        quit_with_error(&e.to_string());
    }
    finished_message(&settings, start_time);
}


pub fn run(settings: &Settings) -> Result<(), PlasmidError> {
    let genome = load_genome_step(&settings.input)?;
    let (ori, ori_skew) = find_origin(&genome)?;
    let request = load_design(&settings.design)?;
    let marker_table = load_marker_table(&settings.markers)?;
    let enzyme_table = ReferenceTable::restriction_sites();
    let assembly = build_plasmid(&genome, ori, settings.flank, &request, &enzyme_table,
                                 &marker_table);
    let metrics = PlasmidMetrics::new(genome.len(), ori, ori_skew, &assembly);
    save_plasmid(settings, &assembly)?;
    if let Some(yaml) = &settings.yaml {
        if let Err(e) = metrics.save_to_yaml(yaml) {
            // A failed run leaves no plasmid file behind.
            let _ = remove_file(&settings.output);
            return Err(e);
        }
    }
    Ok(())
}


fn check_settings(settings: &Settings) {
    check_if_file_exists(&settings.input);
    check_if_file_exists(&settings.design);
    check_if_file_exists(&settings.markers);
    check_if_not_dir(&settings.output);
    if let Some(yaml) = &settings.yaml {
        check_if_not_dir(yaml);
    }
    if settings.line_width < 1 {
        quit_with_error("--line_width must be at least 1");
    }
    if settings.name.trim().is_empty() {
        quit_with_error("--name cannot be empty");
    }
    if settings.name.contains('\n') || settings.name.contains('\r') {
        quit_with_error("--name cannot contain newline characters");
    }
}


fn starting_message() {
    section_header("Starting plasmid_designer");
    explanation("This command finds the origin of replication in a bacterial genome using GC \
                 skew, then builds a plasmid from the region around the origin plus the \
                 selection markers and restriction sites listed in the design file.");
}


fn print_settings(settings: &Settings) {
    eprintln!("Settings:");
    eprintln!("  --input {}", settings.input.display());
    eprintln!("  --design {}", settings.design.display());
    eprintln!("  --markers {}", settings.markers.display());
    eprintln!("  --output {}", settings.output.display());
    eprintln!("  --name {}", settings.name);
    eprintln!("  --flank {}", settings.flank);
    eprintln!("  --line_width {}", settings.line_width);
    if let Some(yaml) = &settings.yaml {
        eprintln!("  --yaml {}", yaml.display());
    }
    eprintln!();
}


fn load_genome_step(input: &Path) -> Result<Vec<u8>, PlasmidError> {
    section_header("Loading genome");
    explanation("The genome is now loaded into memory. All sequence lines are joined together, \
                 so a multi-record file is treated as one sequence.");
    let pb = spinner("loading genome...");
    let genome = load_genome(input);
    pb.finish_and_clear();
    let genome = genome?;
    eprintln!("{}: {} bp", input.display(), genome.len());
    eprintln!();
    Ok(genome)
}


fn find_origin(genome: &[u8]) -> Result<(usize, i64), PlasmidError> {
    section_header("Finding origin of replication");
    explanation("The cumulative GC skew (G count minus C count) is calculated along the genome. \
                 The first position with the minimum skew is taken as the origin.");
    let ori = detect_origin(genome)?;
    let profile = gc_skew_profile(genome);
    let ori_skew = profile[ori];
    eprintln!("ORI position: {}", ori);
    eprintln!("Minimum skew: {}", ori_skew);
    eprintln!("Final skew: {}", profile.last().copied().unwrap_or(0));
    eprintln!();
    Ok((ori, ori_skew))
}


fn load_design(design: &Path) -> Result<DesignRequest, PlasmidError> {
    section_header("Loading design");
    explanation("The design file is now parsed. Lines with a label containing 'site' request a \
                 restriction site and all other lines request a marker.");
    let request = parse_design(design)?;
    eprintln!("Requested markers: {}", join_or_none(&request.markers));
    eprintln!("Requested restriction sites: {}", join_or_none(&request.enzymes));
    eprintln!();
    Ok(request)
}


fn load_marker_table(markers: &Path) -> Result<ReferenceTable, PlasmidError> {
    section_header("Loading marker table");
    explanation("User-supplied markers are added to the built-in marker table, replacing any \
                 built-in markers with the same name.");
    let user_table = load_table(markers)?;
    eprintln!("Markers in {}: {}", markers.display(), user_table.len());
    let table = ReferenceTable::markers().overlaid_with(user_table);
    eprintln!("Available markers: {}", table.len());
    eprintln!();
    Ok(table)
}


fn build_plasmid(genome: &[u8], ori: usize, flank: usize, request: &DesignRequest,
                 enzyme_table: &ReferenceTable, marker_table: &ReferenceTable) -> Assembly {
    section_header("Building plasmid");
    explanation("The region around the origin is extracted and each requested marker and then \
                 each requested restriction site is appended after a spacer sequence. Requested \
                 names that are not in a table are skipped.");
    let assembly = assemble(genome, ori, flank, &request.enzymes, &request.markers,
                            enzyme_table, marker_table, SPACER);
    eprintln!("ORI region: {}..{} ({} bp)", assembly.ori_window.start, assembly.ori_window.end,
              assembly.ori_window.len());
    for insertion in &assembly.insertions {
        if insertion.is_skipped() {
            warning(&insertion.to_string());
        } else {
            eprintln!("{}", insertion);
        }
    }
    eprintln!();
    eprintln!("{} inserted, {} inserted, {}",
              plural(assembly.inserted_count(SegmentKind::Marker), "marker"),
              plural(assembly.inserted_count(SegmentKind::Enzyme), "restriction site"),
              plural(assembly.warnings().len(), "warning"));
    eprintln!("Final length: {} bp", assembly.len());
    eprintln!();
    assembly
}


fn save_plasmid(settings: &Settings, assembly: &Assembly) -> Result<(), PlasmidError> {
    section_header("Saving plasmid");
    if let Err(e) = write_fasta(&settings.output, &settings.name, &assembly.sequence,
                                settings.line_width) {
        let _ = remove_file(&settings.output);
        return Err(e);
    }
    eprintln!("{}: {} bp", settings.output.display(), assembly.len());
    eprintln!();
    Ok(())
}


fn finished_message(settings: &Settings, start_time: Instant) {
    section_header("Finished!");
    eprintln!("Plasmid FASTA: {}", settings.output.display());
    if let Some(yaml) = &settings.yaml {
        eprintln!("Run summary: {}", yaml.display());
    }
    eprintln!("Time to run: {}", format_duration(start_time.elapsed()));
    eprintln!();
    eprintln!("{}", "Plasmid constructed successfully".green().bold());
    eprintln!();
}


fn join_or_none(names: &[String]) -> String {
    if names.is_empty() { "none".to_string() } else { names.join(", ") }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "none");
        assert_eq!(join_or_none(&["EcoRI".to_string()]), "EcoRI");
        assert_eq!(join_or_none(&["EcoRI".to_string(), "BamHI".to_string()]), "EcoRI, BamHI");
    }
}
