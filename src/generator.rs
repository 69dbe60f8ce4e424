// Copyright 2020 TiKV Project Authors. Licensed under Apache-2.0.

use opentelemetry_sdk::trace::IdGenerator;
use opentelemetry_sdk::trace::RandomIdGenerator;
use uuid::Uuid;

/// A strategy for producing random trace identifiers in their canonical
/// text form.
///
/// A generator is owned by exactly one worker for its whole lifetime and is
/// never shared across threads. Construction happens before any timed
/// region; only [`generate`] is measured.
///
/// [`generate`]: TraceIdGenerator::generate
pub trait TraceIdGenerator {
    /// Generates a new random identifier and renders it as text.
    ///
    /// Runs out of entropy only if the operating system source does, which
    /// surfaces as a panic and aborts the run.
    fn generate(&self) -> String;
}

/// Produces trace identifiers as version 4 UUIDs in hyphenated form.
///
/// Every call draws 128 bits from the operating system entropy source.
///
/// # Examples
///
/// ```
/// use trace_id_bench::TraceIdGenerator;
/// use trace_id_bench::UuidTraceIdGenerator;
///
/// let id = UuidTraceIdGenerator.generate();
/// assert_eq!(id.len(), 36);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidTraceIdGenerator;

impl TraceIdGenerator for UuidTraceIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Produces 128-bit trace identifiers with the OpenTelemetry SDK's random
/// id generator, rendered as 32 lowercase hex characters.
///
/// The wrapped generator draws from a thread-local rng, so the instance is
/// cheap to call but pinned to the worker that owns it.
///
/// # Examples
///
/// ```
/// use trace_id_bench::OtelTraceIdGenerator;
/// use trace_id_bench::TraceIdGenerator;
///
/// let generator = OtelTraceIdGenerator::new();
/// let id = generator.generate();
/// assert_eq!(id.len(), 32);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OtelTraceIdGenerator {
    inner: RandomIdGenerator,
}

impl OtelTraceIdGenerator {
    /// Creates a generator backed by the SDK's random id source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceIdGenerator for OtelTraceIdGenerator {
    fn generate(&self) -> String {
        self.inner.new_trace_id().to_string()
    }
}
