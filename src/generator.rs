// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation pipeline.
//!
//! One [`GeneratorPipeline::run`] call is one incremental pass:
//!
//! ```text
//! SourceUnit ──▶ match_marker ──▶ cache gate ──▶ extract ──▶ TypeDescriptor
//!                                                                  │
//!                    OutputSink ◀── emit::display / emit::filter ◀─┘
//! ```
//!
//! Each declaration's processing is a single straight-line pass with two
//! branch points (matched? already seen?). Per-declaration failures become
//! pass diagnostics; they never abort the rest of the pass. Emission is
//! all-or-nothing per declaration: an artifact is rendered completely
//! before the single `register` call, so a cancelled or failed pass cannot
//! leave a half-written artifact behind.
//!
//! The pipeline owns one [`DeclarationCache`] per emitter variant. `run`
//! takes `&self` and the caches lock internally, so a host may process
//! distinct declarations concurrently as long as it synchronizes its sink.

pub mod cache;
pub mod descriptor;
pub mod emit;
pub mod parse;
pub mod sink;
pub mod source;

use tracing::{debug, error};

use self::{
    cache::DeclarationCache,
    descriptor::TypeDescriptor,
    parse::{MarkerKind, extract, match_marker},
    sink::OutputSink,
    source::{Declaration, SourceUnit}
};
use crate::error::GenerateError;

/// Outcome counters and diagnostics for one pass.
#[derive(Debug, Default)]
pub struct PassSummary {
    /// Artifacts registered with the sink, marker artifact included.
    pub emitted: usize,

    /// Declarations suppressed by the cache gate.
    pub skipped: usize,

    /// Reportable failures: duplicate artifact names, render errors.
    pub diagnostics: Vec<GenerateError>
}

impl PassSummary {
    /// Whether the pass produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// The annotation-driven generation pipeline.
///
/// Construct once and reuse across passes; the caches carry the seen-set
/// between passes, which is what makes re-invocation cheap and duplicate
/// emission impossible.
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = GeneratorPipeline::new();
/// let unit = SourceUnit::parse("demo", source_text)?;
/// let mut sink = MemorySink::new();
///
/// let summary = pipeline.run(&[unit], &mut sink);
/// assert!(summary.is_clean());
/// ```
#[derive(Debug, Default)]
pub struct GeneratorPipeline {
    display_cache: DeclarationCache,
    filter_cache:  DeclarationCache
}

impl GeneratorPipeline {
    /// Create a pipeline with fresh caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline around caller-owned caches.
    ///
    /// Lets a host share or pre-seed the seen-sets, and keeps tests
    /// isolated from each other.
    pub fn with_caches(display_cache: DeclarationCache, filter_cache: DeclarationCache) -> Self {
        Self {
            display_cache,
            filter_cache
        }
    }

    /// Execute one pass over `units`, registering artifacts with `sink`.
    ///
    /// The fixed marker-definition artifact is registered first, then every
    /// declaration of every unit flows through match → gate → extract →
    /// emit. A sink must not be reused across passes (artifact names are
    /// per-pass identities).
    pub fn run(&self, units: &[SourceUnit], sink: &mut dyn OutputSink) -> PassSummary {
        let mut summary = PassSummary::default();

        match emit::markers::generate() {
            Ok(artifact) => register(artifact, sink, &mut summary),
            Err(err) => report(err, &mut summary)
        }

        for unit in units {
            debug!(namespace = unit.namespace(), "scanning unit");

            for declaration in unit.declarations() {
                self.process(&declaration, MarkerKind::Display, sink, &mut summary);
                self.process(&declaration, MarkerKind::Filter, sink, &mut summary);
            }
        }

        summary
    }

    /// Run one declaration through a single emitter variant.
    fn process(
        &self,
        declaration: &Declaration<'_>,
        kind: MarkerKind,
        sink: &mut dyn OutputSink,
        summary: &mut PassSummary
    ) {
        // Not-matched is a legitimate, silent outcome.
        let Some(config) = match_marker(declaration.item(), kind) else {
            return;
        };

        if !self.cache_for(kind).should_process(&declaration.id()) {
            debug!(
                namespace = declaration.namespace(),
                type_name = %declaration.type_name(),
                marker = kind.attr_name(),
                "already processed, skipping"
            );
            summary.skipped += 1;
            return;
        }

        let members = extract(declaration.item(), &config);
        let descriptor = TypeDescriptor::new(
            declaration.namespace(),
            declaration.type_name(),
            members,
            config
        );

        let rendered = match kind {
            MarkerKind::Display => emit::display::generate(&descriptor),
            MarkerKind::Filter => emit::filter::generate(&descriptor)
        };

        match rendered {
            Ok(artifact) => register(artifact, sink, summary),
            Err(err) => report(err, summary)
        }
    }

    fn cache_for(&self, kind: MarkerKind) -> &DeclarationCache {
        match kind {
            MarkerKind::Display => &self.display_cache,
            MarkerKind::Filter => &self.filter_cache
        }
    }
}

/// Register a finished artifact, folding failures into the summary.
fn register(artifact: sink::Artifact, sink: &mut dyn OutputSink, summary: &mut PassSummary) {
    let name = artifact.name().to_string();

    match sink.register(artifact) {
        Ok(()) => {
            debug!(artifact = %name, "registered");
            summary.emitted += 1;
        }
        Err(err) => report(err, summary)
    }
}

/// Record a reportable diagnostic.
fn report(err: GenerateError, summary: &mut PassSummary) {
    error!(%err, "generation diagnostic");
    summary.diagnostics.push(err);
}
