// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker matching, configuration, and member extraction.
//!
//! This is the read-only half of the pipeline: given a discovered struct
//! declaration, decide whether it carries a marker attribute, parse the
//! marker's arguments with [`darling`], and compute the ordered, filtered
//! member view the emitters consume.
//!
//! # Module Structure
//!
//! - [`marker`] — marker attribute matching ([`MarkerKind`], [`match_marker`])
//! - [`config`] — include/exclude configuration ([`Configuration`])
//! - [`member`] — eligible member extraction ([`MemberDef`], [`extract`])
//!
//! # Data Structures
//!
//! ```text
//! Configuration
//! ├── include: Vec<String>   (restrict to named members, may be empty)
//! └── exclude: Vec<String>   (drop named members, may be empty)
//!
//! MemberDef
//! ├── name: Ident            (field name)
//! ├── ty: Type               (declared field type)
//! └── nullability            (NonNull | Optional)
//! ```

pub mod config;
pub mod marker;
pub mod member;

pub use config::Configuration;
pub use marker::{MarkerKind, match_marker};
pub use member::{MemberDef, Nullability, extract};
