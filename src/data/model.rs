use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DataPoint – one acquired frequency point
// ---------------------------------------------------------------------------

/// A single frequency point of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub freq_value: f64,
    pub real_value: f64,
    pub imaginary_value: f64,
}

// ---------------------------------------------------------------------------
// Sample – the persisted record
// ---------------------------------------------------------------------------

/// Everything stored for one measurement position.
///
/// Field order is the key order of the written JSON document, which
/// downstream consumers rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x_coord: f64,
    pub y_coord: f64,
    pub z_coord: f64,
    pub antennae_height: f64,
    pub timestamp: String,
    pub survey_id: String,
    pub sample_id: String,
    pub data: Vec<DataPoint>,
}

// ---------------------------------------------------------------------------
// SampleMetadata – scalar fields carried alongside the VNA responses
// ---------------------------------------------------------------------------

/// Position and identification of a sample, without the trace data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMetadata {
    pub x_coord: f64,
    pub y_coord: f64,
    pub z_coord: f64,
    pub antennae_height: f64,
    pub timestamp: String,
    pub survey_id: String,
    pub sample_id: String,
}

// ---------------------------------------------------------------------------
// StoreRequest – one inbound "process and store" call
// ---------------------------------------------------------------------------

/// The ten fields of a store call, matched by name.
///
/// ```json
/// {
///   "survey_dir": "field_a",
///   "x_coord": 1.5, "y_coord": 2.25, "z_coord": 0.0,
///   "antennae_height": 0.3,
///   "timestamp": "2024-05-01T10:00:00",
///   "survey_id": "S1", "sample_id": "S1-0001",
///   "vna_freq": "#01.0E9,2.0E9,",
///   "vna_trace": "#00.1,0.2,0.3,0.4,"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRequest {
    pub survey_dir: String,
    #[serde(flatten)]
    pub metadata: SampleMetadata,
    pub vna_freq: String,
    pub vna_trace: String,
}
