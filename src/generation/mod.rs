//! Density-scaling and output-layout engine
//!
//! The engine borrows a decoded source image, resamples it once per requested
//! density and writes each result under `drawable-<density>/`. Per-density
//! failures are collected into the report; only the pipeline can fail outright.

/// Per-density resample and write loop
pub mod engine;
/// Request validation, source loading and default-root reset around the engine
pub mod pipeline;
/// Aggregated outcome of a generation run
pub mod report;
/// Caller-supplied generation request
pub mod request;
/// Lanczos resampling to exact target dimensions
pub mod resample;

pub use engine::{
    DrawableSink, GenerationObserver, NoopObserver, PngSink, generate, generate_into,
    generate_with_observer,
};
pub use report::{DensityFailure, GeneratedDrawable, GenerationReport, Outcome};
pub use request::GenerationRequest;
