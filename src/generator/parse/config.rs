// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Include/exclude configuration parsed from marker arguments.
//!
//! Marker attributes carry at most two optional string arguments, each a
//! comma-separated list of member names:
//!
//! ```rust,ignore
//! #[generate_filter(include = "first_name,last_name")]
//! #[generate_filter(exclude = "age")]
//! #[generate_filter(include = "first_name", exclude = "age")]
//! ```
//!
//! Splitting trims surrounding whitespace and drops empty entries, so
//! `"a, b,"` parses the same as `"a,b"`. Both lists may be present on one
//! marker; they are applied as two ordered stages (include-restrict, then
//! exclude-remove) by the member extractor.

use darling::FromMeta;

/// Raw marker arguments as darling sees them.
///
/// Internal parsing shape; the pipeline works with [`Configuration`].
#[derive(Debug, Default, FromMeta)]
pub struct MarkerArgs {
    /// Comma-separated member names to keep.
    #[darling(default)]
    pub include: Option<String>,

    /// Comma-separated member names to drop.
    #[darling(default)]
    pub exclude: Option<String>
}

/// Parsed filtering configuration for one matched declaration.
///
/// Both lists empty means no filtering. Structural equality and hashing are
/// derived so configurations can ride inside descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Configuration {
    /// Member names to keep, in argument order. Empty = keep all.
    pub include: Vec<String>,

    /// Member names to drop, in argument order. Empty = drop none.
    pub exclude: Vec<String>
}

impl Configuration {
    /// Build a configuration from parsed marker arguments.
    pub fn from_args(args: &MarkerArgs) -> Self {
        Self {
            include: split_names(args.include.as_deref()),
            exclude: split_names(args.exclude.as_deref())
        }
    }

    /// Whether neither list constrains the member set.
    pub fn is_unfiltered(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// Split a comma-separated name list, trimming whitespace and dropping
/// empty entries.
fn split_names(value: Option<&str>) -> Vec<String> {
    value
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
