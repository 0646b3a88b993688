// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rendering descriptors into generated source artifacts.
//!
//! Every emitter builds a token stream with [`quote`], then goes through
//! [`render`]: re-parse as a full Rust file (a syntactic self-check; an
//! emitter bug surfaces here as [`GenerateError::Render`] instead of as a
//! downstream compile error), pretty-print with [`prettyplease`], and stamp
//! the generated-code header. Token streams carry no formatting of their
//! own, so pretty-printing is what makes identical descriptors produce
//! byte-identical text.
//!
//! # Submodules
//!
//! - [`display`] — `Display` implementation for the annotated type
//! - [`filter`] — independent `{TypeName}Filter` struct
//! - [`markers`] — fixed marker-definition artifact, zero-input

pub mod display;
pub mod filter;
pub mod markers;

use proc_macro2::TokenStream;

use super::sink::Artifact;
use crate::error::GenerateError;

/// Header line stamped onto every artifact.
///
/// String-level because comments do not survive token streams.
pub const GENERATED_HEADER: &str = "// @generated by companion-gen\n\n";

/// Render emitted tokens into a named artifact.
pub(crate) fn render(name: &str, tokens: TokenStream) -> Result<Artifact, GenerateError> {
    let file: syn::File = syn::parse2(tokens).map_err(|source| GenerateError::Render {
        name: name.to_string(),
        source
    })?;

    let text = format!("{}{}", GENERATED_HEADER, prettyplease::unparse(&file));
    Ok(Artifact::new(name, text))
}
