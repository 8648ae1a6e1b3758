// This file contains the code that builds the plasmid sequence: the genome region around the ORI
// followed by the requested markers and restriction sites, each preceded by the spacer.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use std::ops::Range;

use crate::reference::ReferenceTable;


pub const DEFAULT_FLANK: usize = 300;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Marker,
    Enzyme,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Marker => write!(f, "marker"),
            SegmentKind::Enzyme => write!(f, "enzyme"),
        }
    }
}


/// What happened to one requested marker or enzyme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    Inserted { kind: SegmentKind, name: String, length: usize },
    Skipped { kind: SegmentKind, name: String, reason: String },
}

impl Insertion {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Insertion::Skipped { .. })
    }
}

impl fmt::Display for Insertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insertion::Inserted { kind, name, length } =>
                write!(f, "{} '{}' inserted ({} bp)", capitalise(&kind.to_string()), name, length),
            Insertion::Skipped { kind, name, reason } =>
                write!(f, "{} '{}' {}, skipped", capitalise(&kind.to_string()), name, reason),
        }
    }
}


fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}


pub struct Assembly {
    pub sequence: Vec<u8>,
    pub ori_window: Range<usize>,
    pub insertions: Vec<Insertion>,
}

impl Assembly {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn warnings(&self) -> Vec<&Insertion> {
        self.insertions.iter().filter(|i| i.is_skipped()).collect()
    }

    pub fn inserted_count(&self, kind: SegmentKind) -> usize {
        self.insertions.iter()
            .filter(|i| matches!(i, Insertion::Inserted { kind: k, .. } if *k == kind)).count()
    }
}


pub fn ori_window(genome_length: usize, ori: usize, flank: usize) -> Range<usize> {
    // The region runs from flank bases before the ORI up to (but not including) flank bases
    // after it. Both ends are clamped to the genome, so near the ends the region is shorter.
    let start = ori.saturating_sub(flank).min(genome_length);
    let end = ori.saturating_add(flank).min(genome_length);
    start..end.max(start)
}


#[allow(clippy::too_many_arguments)]
pub fn assemble(genome: &[u8], ori: usize, flank: usize, enzymes: &[String], markers: &[String],
                enzyme_table: &ReferenceTable, marker_table: &ReferenceTable,
                spacer: &str) -> Assembly {
    let window = ori_window(genome.len(), ori, flank);
    let mut sequence = Vec::with_capacity(window.len() + (enzymes.len() + markers.len()) * 64);
    sequence.extend_from_slice(&genome[window.clone()]);

    let mut insertions = Vec::with_capacity(enzymes.len() + markers.len());
    for name in markers {
        insertions.push(insert(&mut sequence, SegmentKind::Marker, name, marker_table, spacer));
    }
    for name in enzymes {
        insertions.push(insert(&mut sequence, SegmentKind::Enzyme, name, enzyme_table, spacer));
    }
    Assembly { sequence, ori_window: window, insertions }
}


fn insert(sequence: &mut Vec<u8>, kind: SegmentKind, name: &str, table: &ReferenceTable,
          spacer: &str) -> Insertion {
    match table.get(name) {
        Some(seq) => {
            sequence.extend_from_slice(spacer.as_bytes());
            sequence.extend_from_slice(seq.as_bytes());
            Insertion::Inserted { kind, name: name.to_string(), length: spacer.len() + seq.len() }
        }
        None => Insertion::Skipped { kind, name: name.to_string(),
                                     reason: "not found".to_string() },
    }
}
