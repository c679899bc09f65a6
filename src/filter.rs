use std::fs;
use std::path::Path;

use log::warn;

use crate::{FiltError, FiltResult};

/// One channel's equalization filter: the impulse response shipped by the
/// transducer vendor as a headerless binary file of 64-bit floats in
/// native byte order.
#[derive(Debug)]
pub struct FirFilter {
    taps: Vec<f64>,
}

impl FirFilter {
    /// Read every complete 8-byte value from `path`. A trailing partial
    /// value is dropped, matching the vendor tooling, but is worth a
    /// warning since it usually means a corrupt or mistyped filter file.
    pub fn load(path: &Path) -> FiltResult<Self> {
        let data = fs::read(path)
            .map_err(|e| FiltError::Io(format!("{}: {}", path.display(), e)))?;

        let leftover = data.len() % 8;
        if leftover != 0 {
            warn!(
                "Filter file \"{}\" is {} bytes, not a multiple of 8; ignoring trailing {} byte(s)",
                path.display(),
                data.len(),
                leftover
            );
        }

        let taps: Vec<f64> = data
            .chunks_exact(8)
            .map(|chunk| f64::from_ne_bytes(chunk.try_into().unwrap()))
            .collect();

        if taps.is_empty() {
            return Err(FiltError::Format(format!(
                "filter file \"{}\" contains no coefficients",
                path.display()
            )));
        }

        Ok(Self { taps })
    }

    pub fn from_taps(taps: Vec<f64>) -> Self {
        Self { taps }
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}
