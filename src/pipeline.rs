//! One store call end to end: decode → split → build → persist.

use std::path::PathBuf;

use log::debug;

use crate::data::model::StoreRequest;
use crate::data::record::build_sample;
use crate::data::trace::{parse_vna_frequency, parse_vna_trace};
use crate::error::Result;
use crate::storage::{store_sample, StorageConfig};

/// Process a single request and return the path of the written file.
///
/// Nothing is written unless both responses decode and their lengths agree.
pub fn process_sample(config: &StorageConfig, request: StoreRequest) -> Result<PathBuf> {
    let StoreRequest {
        survey_dir,
        metadata,
        vna_freq,
        vna_trace,
    } = request;
    debug!(
        "processing sample {} of survey {} into {:?}",
        metadata.sample_id, metadata.survey_id, survey_dir
    );

    let freq = parse_vna_frequency(&vna_freq)?;
    let trace = parse_vna_trace(&vna_trace)?;
    let sample = build_sample(metadata, &freq, &trace)?;

    store_sample(config, &survey_dir, &sample)
}
