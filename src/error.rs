// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error taxonomy for the generation pipeline.
//!
//! Only failures that must reach the host become errors. A declaration
//! without a marker attribute and a declaration suppressed by the cache gate
//! are ordinary skip outcomes, not errors; malformed marker arguments are
//! absorbed fail-open at the matcher. What remains is the reportable set:
//! unparseable input, duplicate artifact names, and emitted code that does
//! not re-parse.

use thiserror::Error;

/// Failures surfaced by the pipeline or its collaborators.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Source text for a compilation unit failed to parse.
    ///
    /// Raised by the source adapter, before the pipeline sees any
    /// declarations from the unit.
    #[error("failed to parse source for `{namespace}`: {source}")]
    Parse {
        /// Module path of the unit that failed.
        namespace: String,
        #[source]
        source:    syn::Error
    },

    /// The same artifact name was registered twice within one pass.
    ///
    /// Two distinct declarations resolved to one name. Silently dropping
    /// either artifact would surface later as a confusing downstream
    /// compile error, so the collision is reported at its origin.
    #[error("artifact `{name}` registered twice in one pass")]
    DuplicateArtifact {
        /// The colliding artifact name.
        name: String
    },

    /// Emitted tokens failed to re-parse as a Rust source file.
    ///
    /// Indicates a bug in an emitter rather than bad input; the artifact is
    /// not registered.
    #[error("generated artifact `{name}` is not valid Rust: {source}")]
    Render {
        /// Name of the artifact that failed the syntactic self-check.
        name:   String,
        #[source]
        source: syn::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_artifact_names_offender() {
        let err = GenerateError::DuplicateArtifact {
            name: "demo.Employee.g".to_string()
        };
        assert!(err.to_string().contains("demo.Employee.g"));
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn parse_error_carries_namespace() {
        let syn_err = syn::parse_str::<syn::File>("struct {").unwrap_err();
        let err = GenerateError::Parse {
            namespace: "demo".to_string(),
            source:    syn_err
        };
        assert!(err.to_string().contains("`demo`"));
    }
}
