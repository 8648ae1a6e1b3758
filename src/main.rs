// This is the main file of Plasmid Designer and where execution starts. It handles the CLI and
// then calls into construct.rs to build the plasmid.

// Copyright 2025 Plasmid Designer contributors

// This file is part of Plasmid Designer. Plasmid Designer is free software: you can redistribute
// it and/or modify it under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option) any later version.
// Plasmid Designer is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details. You should have received a copy of the GNU
// General Public License along with Plasmid Designer. If not, see <http://www.gnu.org/licenses/>.

use std::path::PathBuf;
use clap::{Parser, crate_version};

mod assembly;
mod construct;
mod error;
mod fasta;
mod log;
mod metrics;
mod misc;
mod reference;
mod request;
mod skew;


#[derive(Parser)]
#[clap(name = "plasmid_designer",
       version = concat!("v", crate_version!()),
       about = "build a plasmid from the GC-skew origin of a bacterial genome plus requested \
                markers and restriction sites")]
#[command(version, long_about = None)]
#[clap(arg_required_else_help = true)]
struct Cli {
    /// Genome in FASTA format, optionally gzipped (required)
    #[clap(short = 'i', long = "input", required = true)]
    input: PathBuf,

    /// Design file of "label, name" lines (required)
    #[clap(short = 'd', long = "design", required = true)]
    design: PathBuf,

    /// Marker table of "name, sequence" lines (required)
    #[clap(short = 'm', long = "markers", required = true)]
    markers: PathBuf,

    /// Output plasmid FASTA file
    #[clap(short = 'o', long = "output", default_value = "Output.fa")]
    output: PathBuf,

    /// Name used for the output FASTA header
    #[clap(long = "name", default_value = "Universal_Plasmid")]
    name: String,

    /// Bases of genome to keep on each side of the ORI
    #[clap(long = "flank", default_value_t = assembly::DEFAULT_FLANK)]
    flank: usize,

    /// Bases per line in the output FASTA file
    #[clap(long = "line_width", default_value = "70")]
    line_width: usize,

    /// Save a YAML summary of the run to this file
    #[clap(long = "yaml")]
    yaml: Option<PathBuf>,
}


fn main() {
    let cli = Cli::parse();
    construct::construct(construct::Settings {
        input: cli.input,
        design: cli.design,
        markers: cli.markers,
        output: cli.output,
        name: cli.name,
        flank: cli.flank,
        line_width: cli.line_width,
        yaml: cli.yaml,
    });
}
