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

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::convolve::{self, Overflow};
use crate::filter::FirFilter;
use crate::signal::{FILTER_DESIGN_RATE, Notice};
use crate::{FiltResult, wav};

/// One filtering run: a wav file plus its two per-channel filters.
///
/// Everything is validated before anything is written; a failed run
/// leaves no partial output behind.
pub struct FilterJob {
    wav_path: PathBuf,
    filt_left: PathBuf,
    filt_right: PathBuf,
    lab_suffix: String,
    overflow: Overflow,
}

impl FilterJob {
    pub fn new(
        wav_path: PathBuf,
        filt_left: PathBuf,
        filt_right: PathBuf,
        lab_suffix: Option<String>,
        overflow: Overflow,
    ) -> Self {
        Self {
            wav_path,
            filt_left,
            filt_right,
            lab_suffix: lab_suffix.unwrap_or_default(),
            overflow,
        }
    }

    /// The output lands next to the input:
    /// `<stem>_sensFilt<lab_suffix>.wav`.
    pub fn output_path(&self) -> PathBuf {
        let stem = self
            .wav_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.wav_path
            .with_file_name(format!("{}_sensFilt{}.wav", stem, self.lab_suffix))
    }

    /// Load filters, ingest the wav, normalize, convolve, and write the
    /// filtered file. Returns the path written.
    pub fn run(&self) -> FiltResult<PathBuf> {
        let left_filt = FirFilter::load(&self.filt_left)?;
        let right_filt = FirFilter::load(&self.filt_right)?;

        let signal = wav::read_file(&self.wav_path)?;
        let source = display_name(&self.wav_path);

        if let Some(Notice::RateMismatch(rate)) = signal.rate_notice() {
            warn!(
                "Wave-data \"{}\" is sampled at {} Hz but the filters assume {} Hz; \
                 filtering fidelity may be degraded",
                source, rate, FILTER_DESIGN_RATE
            );
        }

        let frames = signal.frames();
        let (stereo, notice) = signal.into_stereo();
        if notice == Some(Notice::MonoDuplicated) {
            info!(
                "Wave-data \"{}\" is single-channel, left channel copied before filtering",
                source
            );
        }

        let (out_left, out_right) =
            convolve::filter_stereo(&stereo, &left_filt, &right_filt, self.overflow);
        debug_assert_eq!(out_left.len(), frames);
        debug_assert_eq!(out_right.len(), frames);

        let out_path = self.output_path();
        wav::write_file(&out_path, stereo.sample_rate, &out_left, &out_right)?;
        info!(
            "Wav-file filtering successful, saved as \"{}\"",
            out_path.display()
        );

        Ok(out_path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
