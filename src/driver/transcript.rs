use std::fmt;
use std::io::Write;

use log::{debug, info};
use rayon::prelude::*;

use crate::driver::errors::DriverError;
use crate::driver::samples::Sample;
use crate::expression::Expression;

/// One `<rendered> = <value>` line of driver output
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub rendered: String,
    pub value: f64,
}

impl TranscriptLine {
    pub fn from_expression(expr: &Expression) -> Self {
        Self {
            rendered: expr.render(),
            value: expr.eval(),
        }
    }
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.rendered, self.value)
    }
}

/// Build and evaluate the given samples in parallel.
///
/// The returned lines keep the order of `samples`.
pub fn transcript(samples: &[Sample]) -> Vec<TranscriptLine> {
    debug!("Building transcript for {} sample(s)", samples.len());

    samples
        .par_iter()
        .map(|sample| {
            let expr = sample.build();
            let line = TranscriptLine::from_expression(&expr);
            info!("{:?}: {}", sample, line);
            line
        })
        .collect()
}

/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_transcript<W: Write>(out: &mut W, samples: &[Sample]) -> Result<(), DriverError> {
    for line in transcript(samples) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
