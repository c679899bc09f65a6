/*
 Copyright (c) 2026 sensfilt authors

 This file is part of sensfilt

 sensfilt is free software: you can redistribute it and/or modify it
 under the terms of the GNU General Public License as published by the
 Free Software Foundation, either version 3 of the License, or
 (at your option) any later version.

 sensfilt is distributed in the hope that it will be useful, but
 WITHOUT ANY WARRANTY; without even the implied warranty of
 MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 GNU General Public License for more details.
 You should have received a copy of the GNU General Public License
 along with sensfilt. If not, see <https://www.gnu.org/licenses/>.
*/

use std::path::PathBuf;

use clap::Parser;
use sensfilt::{ColorLogger, FilterJob, FiltResult, Overflow, TermResult};

#[derive(Parser)]
#[command(
    name = "sensfilt",
    version,
    about = "Filter wav-files using Sensimetrics *.bin filters \
             for the left and right channels"
)]
struct Cli {
    /// Path to the *.wav file to be filtered
    wav_file: PathBuf,

    /// Path to the left channel *.bin filter
    filt_left: PathBuf,

    /// Path to the right channel *.bin filter
    filt_right: PathBuf,

    /// *.wav save-name suffix, e.g. identifying lab
    #[arg(short = 'l', long = "lab_suffix")]
    lab_suffix: Option<String>,

    /// Clamp filtered samples into the 16-bit range instead of the
    /// legacy wraparound behavior
    #[arg(long = "saturate")]
    saturate: bool,

    /// Print diagnostic messages
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Quiet mode: suppress all log output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> TermResult {
    TermResult(run())
}

fn run() -> FiltResult<()> {
    let cli = Cli::parse();
    ColorLogger::new(cli.quiet, cli.verbose).init();

    let overflow = if cli.saturate {
        Overflow::Saturate
    } else {
        Overflow::Wrap
    };

    FilterJob::new(
        cli.wav_file,
        cli.filt_left,
        cli.filt_right,
        cli.lab_suffix,
        overflow,
    )
    .run()?;

    Ok(())
}
