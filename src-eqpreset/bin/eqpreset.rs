//! eqpreset - Read, write and convert equalizer plug-in presets
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

use clap::Parser;
use eqpreset::cli::{Args, Command};
use eqpreset::env::init_logging;
use eqpreset::workflow;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Inspect { file, json } => {
            print!("{}", workflow::inspect(&file, json)?);
        }
        Command::Convert { file, to, output } => {
            let written = workflow::convert_file(&file, to, output.as_deref())?;
            log::info!("wrote {}", written.display());
        }
        Command::Roundtrip { file } => {
            let report = workflow::roundtrip(&file)?;
            println!("{report}");
            if !report.is_identical() {
                return Err(format!("{} does not round-trip", file.display()).into());
            }
        }
    }
    Ok(())
}
