//! Observability: generation events and the sink boundary.
//!
//! Generators report what they emitted and what they noticed (shadowed
//! discriminants, initializers only rustc can evaluate). Nothing here feeds
//! back into the emitted tokens.

pub(crate) mod sink;

pub use sink::{
    GenerationEvent, GenerationReport, GenerationSink, generation_report,
    generation_report_reset, with_sink,
};

pub(crate) use sink::record;
