// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker attribute matching.
//!
//! A declaration opts into generation by carrying a marker attribute:
//! `#[generate_display]` for the Display companion, `#[generate_filter]`
//! for the filter struct. Matching accepts the marker name as the final
//! path segment, so qualified spellings like
//! `#[companion_markers::generate_filter]` survive; a renamed import of the
//! marker does not (text-level matching cannot resolve symbols).
//!
//! Not carrying a marker is a legitimate, silent outcome. A marker with a
//! malformed argument list degrades to an unfiltered configuration rather
//! than failing the pass.

use darling::{FromMeta, ast::NestedMeta};
use syn::{Attribute, ItemStruct, Meta};
use tracing::warn;

use super::config::{Configuration, MarkerArgs};

/// The two generator variants a declaration can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `#[generate_display]` — emit a `Display` implementation.
    Display,

    /// `#[generate_filter]` — emit a `{TypeName}Filter` struct.
    Filter
}

impl MarkerKind {
    /// Attribute name this marker is spelled with.
    #[must_use]
    pub const fn attr_name(&self) -> &'static str {
        match self {
            Self::Display => "generate_display",
            Self::Filter => "generate_filter"
        }
    }
}

/// Test whether `item` carries the marker for `kind` and extract its
/// configuration.
///
/// Returns `None` when the marker is absent. When present, the first
/// matching attribute is authoritative.
pub fn match_marker(item: &ItemStruct, kind: MarkerKind) -> Option<Configuration> {
    item.attrs
        .iter()
        .find(|attr| path_matches(attr.path(), kind.attr_name()))
        .map(|attr| parse_marker_args(attr, kind))
}

/// Match the marker name against the attribute path's final segment.
fn path_matches(path: &syn::Path, name: &str) -> bool {
    path.segments
        .last()
        .is_some_and(|segment| segment.ident == name)
}

/// Parse `include`/`exclude` arguments from a matched marker attribute.
///
/// Fail-open: a bare marker yields the unfiltered configuration, and so
/// does any argument list darling cannot parse (wrong value type, unknown
/// keys, stray syntax). Generation continuing beats failing the pass.
fn parse_marker_args(attr: &Attribute, kind: MarkerKind) -> Configuration {
    match &attr.meta {
        Meta::Path(_) => Configuration::default(),
        Meta::List(list) => {
            let parsed = NestedMeta::parse_meta_list(list.tokens.clone())
                .map_err(darling::Error::from)
                .and_then(|items| MarkerArgs::from_list(&items));

            match parsed {
                Ok(args) => Configuration::from_args(&args),
                Err(err) => {
                    warn!(
                        marker = kind.attr_name(),
                        %err,
                        "malformed marker arguments, generating unfiltered"
                    );
                    Configuration::default()
                }
            }
        }
        Meta::NameValue(_) => {
            warn!(
                marker = kind.attr_name(),
                "marker does not take a value, generating unfiltered"
            );
            Configuration::default()
        }
    }
}
