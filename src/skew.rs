// This file contains the GC-skew scan used to locate the origin of replication.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use crate::error::PlasmidError;


fn base_skew(base: u8) -> i64 {
    match base {
        b'G' => 1,
        b'C' => -1,
        _ => 0,
    }
}


pub fn gc_skew_profile(seq: &[u8]) -> Vec<i64> {
    // Returns the cumulative G-C count at each position (inclusive of that position).
    let mut skew = 0;
    seq.iter().map(|&b| { skew += base_skew(b); skew }).collect()
}


pub fn detect_origin(seq: &[u8]) -> Result<usize, PlasmidError> {
    // This function does the same scan as gc_skew_profile, but only keeps track of the running
    // minimum, so it doesn't need to store the whole profile. A new minimum has to be strictly
    // lower than the current one, which means ties go to the earliest position.
    if seq.is_empty() {
        return Err(PlasmidError::EmptyInput);
    }
    let mut skew = 0;
    let mut min_index = 0;
    let mut min_skew = i64::MAX;
    for (i, &b) in seq.iter().enumerate() {
        skew += base_skew(b);
        if skew < min_skew {
            min_skew = skew;
            min_index = i;
        }
    }
    Ok(min_index)
}
