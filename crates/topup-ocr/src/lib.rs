mod capture;
mod http;
mod pipeline;
mod recognize;

pub use capture::{
    AcquireError, Frame, FrameFormat, FrameSource, StillSource, acquire_with_fallback,
};
pub use http::HttpOcr;
pub use pipeline::{ScanError, ScanOutcome, scan};
pub use recognize::{RecognizeError, Recognizer};
