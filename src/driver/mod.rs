//! Driver that assembles the sample trees and prints their transcript

mod errors;
mod samples;
mod transcript;

pub use errors::DriverError;
pub use samples::Sample;
pub use transcript::{TranscriptLine, transcript, write_transcript};

#[cfg(test)]
mod tests;
