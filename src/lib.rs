//! Data processing for the GPR-20 ground-penetrating-radar robot.
//!
//! Each store call carries the robot's position and two raw responses from
//! the Vector Network Analyzer: the swept frequencies and the complex trace.
//! [`pipeline::process_sample`] decodes both, pairs them into one
//! [`Sample`](data::model::Sample), and writes it as a JSON document under
//! the survey's directory.

pub mod data;
pub mod error;
pub mod pipeline;
pub mod storage;

pub use data::model::{DataPoint, Sample, SampleMetadata, StoreRequest};
pub use error::{FormatError, PipelineError, ResponseKind, Result};
pub use pipeline::process_sample;
pub use storage::StorageConfig;
