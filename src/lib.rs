//! # companion-gen
//!
//! Annotation-driven source generator: scans parsed Rust source for structs
//! carrying a marker attribute, extracts a filtered view of their public
//! fields, and emits companion source artifacts: a `Display`
//! implementation and/or an all-optional `{TypeName}Filter` struct.
//!
//! ## Quick Start
//!
//! ```rust
//! use companion_gen::{GeneratorPipeline, MemorySink, SourceUnit};
//!
//! let unit = SourceUnit::parse(
//!     "demo",
//!     r#"
//!     #[generate_filter(exclude = "age")]
//!     pub struct Employee {
//!         pub first_name: String,
//!         pub last_name: String,
//!         pub age: i32,
//!     }
//!     "#,
//! )
//! .unwrap();
//!
//! let pipeline = GeneratorPipeline::new();
//! let mut sink = MemorySink::new();
//! let summary = pipeline.run(&[unit], &mut sink);
//!
//! assert!(summary.is_clean());
//! let filter = sink.get("demo.EmployeeFilter.g").unwrap();
//! assert!(filter.text().contains("pub struct EmployeeFilter"));
//! ```
//!
//! Re-running a pass over the same declarations produces no duplicate
//! artifacts: the pipeline's caches remember every declaration identity
//! they have seen. Output is deterministic: identical descriptors render
//! byte-identical text regardless of traversal order.

mod error;
mod generator;

pub use error::GenerateError;
pub use generator::{
    GeneratorPipeline, PassSummary,
    cache::DeclarationCache,
    descriptor::TypeDescriptor,
    emit::{GENERATED_HEADER, markers::ARTIFACT_NAME as MARKERS_ARTIFACT_NAME},
    parse::{Configuration, MarkerKind, MemberDef, Nullability},
    sink::{Artifact, MemorySink, OutputSink},
    source::{Declaration, DeclarationId, SourceUnit}
};
