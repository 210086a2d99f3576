use super::model::{DataPoint, Sample, SampleMetadata};
use super::trace::TraceComponents;
use crate::error::PipelineError;

/// Zip frequency and trace components into a [`Sample`].
///
/// All three sequences must have the same length; points are paired by
/// index and nothing is padded or truncated.
pub fn build_sample(
    metadata: SampleMetadata,
    freq: &[f64],
    trace: &TraceComponents,
) -> Result<Sample, PipelineError> {
    if freq.len() != trace.real.len() || freq.len() != trace.imaginary.len() {
        return Err(PipelineError::LengthMismatch {
            freq: freq.len(),
            real: trace.real.len(),
            imaginary: trace.imaginary.len(),
        });
    }

    let data = freq
        .iter()
        .zip(&trace.real)
        .zip(&trace.imaginary)
        .map(|((&freq_value, &real_value), &imaginary_value)| DataPoint {
            freq_value,
            real_value,
            imaginary_value,
        })
        .collect();

    let SampleMetadata {
        x_coord,
        y_coord,
        z_coord,
        antennae_height,
        timestamp,
        survey_id,
        sample_id,
    } = metadata;

    Ok(Sample {
        x_coord,
        y_coord,
        z_coord,
        antennae_height,
        timestamp,
        survey_id,
        sample_id,
        data,
    })
}
