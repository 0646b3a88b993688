// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! De-duplication gate for incremental passes.
//!
//! The host may re-run discovery for declarations untouched by an edit
//! elsewhere in the program. Without a gate the same declaration would be
//! extracted and queued for emission again, producing duplicate artifact
//! registrations or wasted work. [`DeclarationCache`] guarantees at-most-once
//! processing per declaration identity for the lifetime of the cache.
//!
//! The cache is owned by the pipeline that constructed it, not a process
//! global, so tests and independent pipelines stay isolated. Entries are
//! never evicted: memory grows with the number of distinct declarations ever
//! seen, which is bounded by project size for the short-lived processes this
//! generator runs in.

use std::collections::HashSet;

use parking_lot::Mutex;

use super::source::DeclarationId;

/// Monotonically growing set of previously observed declaration identities.
#[derive(Debug, Default)]
pub struct DeclarationCache {
    seen: Mutex<HashSet<DeclarationId>>
}

impl DeclarationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation of `id`.
    ///
    /// Returns `true` the first time a given identity is observed and
    /// `false` on every subsequent observation. The check and the insert
    /// happen under one lock, so two concurrent observers of the same
    /// identity cannot both see "not present".
    pub fn should_process(&self, id: &DeclarationId) -> bool {
        self.seen.lock().insert(id.clone())
    }

    /// Number of distinct identities observed so far.
    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    /// Whether no identity has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}
