pub mod model;

pub use model::{LoadError, Span, Tag, Trace, TraceDocument};
