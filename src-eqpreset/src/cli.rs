//! eqpreset - Read, write and convert equalizer plug-in presets
//! Command-line interface of the eqpreset binary
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and convert equalizer plug-in presets.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decode a .vstpreset, .ffp or .fxp file and print what it holds.
    Inspect {
        file: PathBuf,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Convert a FabFilter preset or an EQ Eight JSON description.
    Convert {
        file: PathBuf,

        /// Plug-in to convert to.
        #[arg(long, value_enum, default_value_t = Target::Frequency)]
        to: Target,

        /// Output file. Defaults to the input name in EQPRESET_OUTPUT_DIR.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a .vstpreset container, write it back and compare the bytes.
    Roundtrip { file: PathBuf },
}

/// Conversion targets
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Steinberg Frequency
    Frequency,
    /// FabFilter Pro-Q 3
    Proq3,
}

impl Target {
    /// Suffix appended to the input stem for the default output name
    pub fn suffix(self) -> &'static str {
        match self {
            Target::Frequency => "frequency",
            Target::Proq3 => "proq3",
        }
    }
}
