// This file contains functions for loading a genome from FASTA and saving the plasmid to FASTA.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io;
use std::io::{prelude::*, BufReader, BufWriter};
use std::path::Path;

use crate::error::PlasmidError;


pub fn load_genome(filename: &Path) -> Result<Vec<u8>, PlasmidError> {
    // Loads all sequence lines of a FASTA file (gzipped or not) into a single uppercase sequence.
    // Header lines are dropped, so a multi-record file ends up as one concatenated sequence.
    let file = File::open(filename).map_err(|e| PlasmidError::read(filename, e))?;
    let reader: Box<dyn Read> = if is_file_gzipped(filename)? {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    read_sequence_lines(BufReader::new(reader)).map_err(|e| PlasmidError::read(filename, e))
}


fn read_sequence_lines<R: BufRead>(reader: R) -> io::Result<Vec<u8>> {
    let mut sequence = Vec::new();
    for line in reader.lines() {
        let text = line?;
        if text.starts_with('>') { continue; }
        sequence.extend_from_slice(text.trim().as_bytes());
    }
    sequence.make_ascii_uppercase();
    Ok(sequence)
}


fn is_file_gzipped(filename: &Path) -> Result<bool, PlasmidError> {
    // Returns true if the file starts with the two gzip magic bytes. Files shorter than two bytes
    // can't be gzipped.
    let file = File::open(filename).map_err(|e| PlasmidError::read(filename, e))?;
    let mut buf = Vec::with_capacity(2);
    file.take(2).read_to_end(&mut buf).map_err(|e| PlasmidError::read(filename, e))?;
    Ok(buf.len() == 2 && buf[0] == 31 && buf[1] == 139)
}


pub fn write_fasta(filename: &Path, header: &str, seq: &[u8],
                   line_width: usize) -> Result<(), PlasmidError> {
    // Saves one FASTA record with the sequence split into lines of line_width bases. The output is
    // gzipped if the filename ends in .gz.
    write_fasta_file(filename, header, seq, line_width)
        .map_err(|e| PlasmidError::write(filename, e))
}


fn write_fasta_file(filename: &Path, header: &str, seq: &[u8],
                    line_width: usize) -> io::Result<()> {
    let file = File::create(filename)?;
    if filename.extension().and_then(|s| s.to_str()) == Some("gz") {
        let mut encoder = GzEncoder::new(file, Compression::default());
        write_wrapped(BufWriter::new(&mut encoder), header, seq, line_width)?;
        encoder.finish()?;
    } else {
        write_wrapped(BufWriter::new(file), header, seq, line_width)?;
    }
    Ok(())
}


fn write_wrapped<W: Write>(mut writer: BufWriter<W>, header: &str, seq: &[u8],
                           line_width: usize) -> io::Result<()> {
    writeln!(writer, ">{}", header)?;
    for line in seq.chunks(line_width.max(1)) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
