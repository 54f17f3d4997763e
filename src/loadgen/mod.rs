pub mod runner;
pub mod sampler;

pub use runner::{run_load, LoadConfig, LoadReport};
pub use sampler::BimodalSampler;
