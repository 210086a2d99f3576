use log::debug;

use super::decoder::decode_response;
use crate::error::{PipelineError, ResponseKind};

/// Real and imaginary components of a trace, in acquisition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceComponents {
    pub real: Vec<f64>,
    pub imaginary: Vec<f64>,
}

/// Deinterleave `[re0, im0, re1, im1, ...]`.
///
/// Even positions go to `real`, odd positions to `imaginary`. With an odd
/// input length `real` ends up one element longer.
pub fn split_trace(values: &[f64]) -> TraceComponents {
    let mut out = TraceComponents {
        real: Vec::with_capacity(values.len().div_ceil(2)),
        imaginary: Vec::with_capacity(values.len() / 2),
    };
    for (i, &v) in values.iter().enumerate() {
        if i % 2 == 0 {
            out.real.push(v);
        } else {
            out.imaginary.push(v);
        }
    }
    out
}

/// Decode a raw frequency response.
pub fn parse_vna_frequency(raw: &str) -> Result<Vec<f64>, PipelineError> {
    let freq = decode_response(raw).map_err(|source| PipelineError::Format {
        response: ResponseKind::Frequency,
        source,
    })?;
    debug!("decoded {} frequency points", freq.len());
    Ok(freq)
}

/// Decode a raw trace response and split it into its components.
pub fn parse_vna_trace(raw: &str) -> Result<TraceComponents, PipelineError> {
    let flat = decode_response(raw).map_err(|source| PipelineError::Format {
        response: ResponseKind::Trace,
        source,
    })?;
    let trace = split_trace(&flat);
    debug!(
        "decoded {} trace values into {} real / {} imaginary",
        flat.len(),
        trace.real.len(),
        trace.imaginary.len()
    );
    Ok(trace)
}
