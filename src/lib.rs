// Copyright 2020 TiKV Project Authors. Licensed under Apache-2.0.

//! Building blocks for a micro-benchmark that compares the latency of two
//! ways to produce a random trace identifier in text form:
//!
//! - a general-purpose version 4 UUID, rendered hyphenated (36 characters);
//! - an OpenTelemetry SDK random trace id, rendered as 32 lowercase hex
//!   characters.
//!
//! The measurement itself lives in `benches/trace_id.rs`; this library only
//! provides the two strategies behind the [`TraceIdGenerator`] seam and a
//! one-shot [`EnvReport`] so results can be read in context.
//!
//! ```
//! use trace_id_bench::OtelTraceIdGenerator;
//! use trace_id_bench::TraceIdGenerator;
//! use trace_id_bench::UuidTraceIdGenerator;
//!
//! let uuid_id = UuidTraceIdGenerator.generate();
//! assert_eq!(uuid_id.len(), 36);
//!
//! let otel_id = OtelTraceIdGenerator::new().generate();
//! assert_eq!(otel_id.len(), 32);
//! ```

pub mod generator;
pub mod report;

pub use generator::OtelTraceIdGenerator;
pub use generator::TraceIdGenerator;
pub use generator::UuidTraceIdGenerator;
pub use report::EnvReport;
pub use report::print_environment;
