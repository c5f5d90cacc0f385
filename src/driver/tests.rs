use std::io::{self, Write};

use crate::driver::{DriverError, Sample, TranscriptLine, transcript, write_transcript};
use crate::expression::{mul, number};

#[test]
fn test_sample_power_of_sum() {
    let expr = Sample::PowerOfSum.build();
    assert_eq!(expr.render(), "(-2) + (4) ^ (5)");
    assert!((expr.eval() - 32.0).abs() < 1e-9);
}

#[test]
fn test_sample_sum_of_power() {
    let expr = Sample::SumOfPower.build();
    assert_eq!(expr.render(), "(2) ^ (3) + (-2)");
    assert!((expr.eval() - 6.0).abs() < 1e-9);
}

#[test]
fn test_transcript_line_display() {
    let line = TranscriptLine::from_expression(&mul(number(1.5), number(3.0)));
    assert_eq!(line.rendered, "(1.5) * (3)");
    assert!((line.value - 4.5).abs() < 1e-9);
    assert_eq!(line.to_string(), "(1.5) * (3) = 4.5");
}

#[test]
fn test_transcript_keeps_input_order() {
    let samples = [
        Sample::SumOfPower,
        Sample::PowerOfSum,
        Sample::SumOfPower,
        Sample::PowerOfSum,
    ];
    let lines = transcript(&samples);
    assert_eq!(lines.len(), samples.len());
    for (sample, line) in samples.iter().zip(&lines) {
        assert_eq!(line.rendered, sample.build().render());
    }
}

#[test]
fn test_transcript_empty() {
    assert!(transcript(&[]).is_empty());
}

#[test]
fn test_write_default_transcript() {
    let mut out = Vec::new();
    let result = write_transcript(&mut out, &Sample::ALL);
    assert!(result.is_ok());
    assert_eq!(
        String::from_utf8_lossy(&out),
        "(-2) + (4) ^ (5) = 32\n(2) ^ (3) + (-2) = 6\n"
    );
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_transcript_reports_io_error() {
    let result = write_transcript(&mut BrokenPipe, &Sample::ALL);
    assert!(matches!(result, Err(DriverError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
}
