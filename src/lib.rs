use core::fmt;
use std::process::{ExitCode, Termination};

use log::error;

pub mod color_logger;
pub mod convolve;
pub mod filter;
pub mod pipeline;
pub mod signal;
pub mod wav;

pub use color_logger::ColorLogger;
pub use convolve::Overflow;
pub use filter::FirFilter;
pub use pipeline::FilterJob;
pub use signal::{AudioSignal, FILTER_DESIGN_RATE, Notice, StereoSignal};

#[derive(Debug)]
pub enum FiltError {
    /// Input data the tool does not support: wrong wav sample format,
    /// wrong channel count, malformed container, empty filter file.
    Format(String),
    /// Failure reading a filter or wav file, or writing the output.
    Io(String),
}

impl fmt::Display for FiltError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiltError::Format(msg) => write!(f, "{}", msg),
            FiltError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for FiltError {}

impl From<std::io::Error> for FiltError {
    fn from(err: std::io::Error) -> Self {
        FiltError::Io(err.to_string())
    }
}

pub type FiltResult<T> = Result<T, FiltError>;

pub struct TermResult(pub FiltResult<()>);

impl Termination for TermResult {
    fn report(self) -> ExitCode {
        match self.0 {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{}", err);
                ExitCode::FAILURE
            }
        }
    }
}
