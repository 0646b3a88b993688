// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The immutable unit of work between extraction and emission.
//!
//! A [`TypeDescriptor`] captures everything an emitter needs: namespace,
//! type name, the filtered member view, and the configuration that produced
//! it. Descriptors are transient: built during a pass, dropped after
//! emission.
//!
//! # Equality
//!
//! Equality is structural over namespace, type name, and members, and
//! deliberately excludes the configuration: two config spellings that select
//! the same member set describe the same output, and the surrounding
//! incremental machinery uses descriptor equality to skip unchanged
//! downstream work. It is equally deliberate that equality is insensitive
//! to declaration identity, so unrelated edits cannot force re-emission.

use std::hash::{Hash, Hasher};

use convert_case::{Case, Casing};
use proc_macro2::Span;
use syn::Ident;

use super::parse::{Configuration, MarkerKind, MemberDef};

/// Immutable description of one matched declaration, ready for emission.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    namespace: String,
    type_name: String,
    members:   Vec<MemberDef>,
    config:    Configuration
}

impl TypeDescriptor {
    /// Assemble a descriptor from extraction results.
    pub fn new(
        namespace: impl Into<String>,
        type_name: impl Into<String>,
        members: Vec<MemberDef>,
        config: Configuration
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            members,
            config
        }
    }

    /// Module path of the originating declaration.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Type name of the originating declaration.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Filtered members, in declaration order.
    pub fn members(&self) -> &[MemberDef] {
        &self.members
    }

    /// Configuration the member view was filtered with.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Type name as an identifier for quoting.
    pub fn type_ident(&self) -> Ident {
        self.ident_with("", "")
    }

    /// Type name in snake_case, for generated parameter and variable names.
    pub fn snake_name(&self) -> String {
        self.type_name.to_case(Case::Snake)
    }

    /// New identifier built around the type name.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // For type "Employee":
    /// descriptor.ident_with("", "Filter") // EmployeeFilter
    /// descriptor.ident_with("", "")       // Employee
    /// ```
    pub fn ident_with(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{}{}{}", prefix, self.type_name, suffix),
            Span::call_site()
        )
    }

    /// Deterministic artifact name for this descriptor and emitter kind.
    ///
    /// Namespace separators are normalized from `::` to `.` so the name
    /// doubles as a file identity:
    ///
    /// ```rust,ignore
    /// // namespace "demo::staff", type "Employee"
    /// descriptor.artifact_name(MarkerKind::Display) // "demo.staff.Employee.g"
    /// descriptor.artifact_name(MarkerKind::Filter)  // "demo.staff.EmployeeFilter.g"
    /// ```
    pub fn artifact_name(&self, kind: MarkerKind) -> String {
        let namespace = self.namespace.replace("::", ".");
        match kind {
            MarkerKind::Display => format!("{}.{}.g", namespace, self.type_name),
            MarkerKind::Filter => format!("{}.{}Filter.g", namespace, self.type_name)
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
            && self.type_name == other.type_name
            && self.members == other.members
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.type_name.hash(state);
        self.members.hash(state);
    }
}
