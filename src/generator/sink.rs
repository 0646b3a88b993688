// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output sink: where rendered artifacts are registered.
//!
//! The pipeline hands finished artifacts to an [`OutputSink`] and never
//! touches the file system itself; folding generated text into a build is
//! the host's job. The artifact name is a stable file identity: within one
//! pass (one sink lifetime) a name may be registered at most once, and a
//! second registration is an error rather than a silent overwrite.

use std::collections::HashSet;

use crate::error::GenerateError;

/// A unit of generated source text plus its identifying name.
///
/// Created fresh every pass, never mutated. The name is derived
/// deterministically from the originating declaration (see
/// `TypeDescriptor::artifact_name`), so unrelated declarations sharing a
/// short type name cannot collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    text: String
}

impl Artifact {
    /// Create an artifact from its name and rendered text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into()
        }
    }

    /// Stable artifact name, e.g. `demo.EmployeeFilter.g`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// File name the host would conventionally write this artifact to.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// artifact.file_name() // "demo.EmployeeFilter.g.rs"
    /// ```
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name)
    }
}

/// Receiver for generated artifacts.
///
/// One sink instance corresponds to one pass; reusing a sink across passes
/// turns legitimate re-emission into duplicate-name errors.
pub trait OutputSink {
    /// Register an artifact under its name.
    ///
    /// # Errors
    ///
    /// [`GenerateError::DuplicateArtifact`] if the name was already
    /// registered with this sink.
    fn register(&mut self, artifact: Artifact) -> Result<(), GenerateError>;
}

/// In-memory sink collecting artifacts in registration order.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
    names:     HashSet<String>
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered artifacts, in registration order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Look up an artifact by name.
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name() == name)
    }

    /// Number of registered artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn register(&mut self, artifact: Artifact) -> Result<(), GenerateError> {
        if !self.names.insert(artifact.name().to_string()) {
            return Err(GenerateError::DuplicateArtifact {
                name: artifact.name().to_string()
            });
        }

        self.artifacts.push(artifact);
        Ok(())
    }
}
