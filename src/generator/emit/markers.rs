// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fixed marker-definition artifact.
//!
//! Registered once per pass, before discovery, so host code can spell the
//! marker attributes without an external dependency: the artifact is the
//! source of a passthrough attribute-macro crate defining
//! `generate_display` and `generate_filter`. How the host folds it into a
//! build (a small proc-macro member crate, typically) is the host's
//! concern; the pipeline only guarantees the text is fixed, valid, and
//! registered under a stable name.

use quote::quote;

use super::render;
use crate::{error::GenerateError, generator::sink::Artifact};

/// Stable name of the marker-definition artifact.
pub const ARTIFACT_NAME: &str = "companion.Markers.g";

/// Render the marker-definition artifact. Zero-input and fixed.
pub fn generate() -> Result<Artifact, GenerateError> {
    let tokens = quote! {
        use proc_macro::TokenStream;

        /// Marks a struct for Display companion generation.
        ///
        /// Optional arguments: `include = "a,b"`, `exclude = "c"`,
        /// each a comma-separated list of member names.
        #[proc_macro_attribute]
        pub fn generate_display(_args: TokenStream, input: TokenStream) -> TokenStream {
            input
        }

        /// Marks a struct for filter companion generation.
        ///
        /// Optional arguments: `include = "a,b"`, `exclude = "c"`,
        /// each a comma-separated list of member names.
        #[proc_macro_attribute]
        pub fn generate_filter(_args: TokenStream, input: TokenStream) -> TokenStream {
            input
        }
    };

    render(ARTIFACT_NAME, tokens)
}
