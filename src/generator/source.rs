// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration source: the adapter between host-supplied source text and the
//! pipeline.
//!
//! A [`SourceUnit`] is one parsed compilation unit together with the module
//! path ("namespace") it lives under. [`SourceUnit::declarations`] flattens
//! the unit into candidate struct declarations, descending into nested
//! inline modules and extending the namespace along the way, so
//! `mod staff { struct Employee }` inside unit `demo` surfaces as
//! `demo::staff::Employee`.
//!
//! Declaration identity is an opaque handle built here and consumed only by
//! the cache gate. Re-parsing the same unit yields equal identities for the
//! same underlying declaration; same-named types under different module
//! paths stay distinct.

use syn::{File, Item, ItemStruct};

use crate::error::GenerateError;

/// Opaque, comparable handle to a type declaration.
///
/// Used only as a cache key. Never persisted, never inspected structurally
/// by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationId {
    namespace: String,
    name:      String
}

impl DeclarationId {
    pub(crate) fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name:      name.into()
        }
    }
}

/// One parsed compilation unit plus the module path it lives under.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    namespace: String,
    file:      File
}

impl SourceUnit {
    /// Parse source text into a unit.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Parse`] if the text is not a valid Rust file; the
    /// error names the failing namespace.
    pub fn parse(namespace: impl Into<String>, source: &str) -> Result<Self, GenerateError> {
        let namespace = namespace.into();

        let file = syn::parse_file(source).map_err(|source| GenerateError::Parse {
            namespace: namespace.clone(),
            source
        })?;

        Ok(Self {
            namespace,
            file
        })
    }

    /// Wrap an already parsed file.
    pub fn from_file(namespace: impl Into<String>, file: File) -> Self {
        Self {
            namespace: namespace.into(),
            file
        }
    }

    /// Module path of the unit root.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// All struct declarations in the unit, in declaration order.
    ///
    /// Nested inline modules are walked depth-first; out-of-line modules
    /// (`mod foo;`) have no content here and are skipped.
    pub fn declarations(&self) -> Vec<Declaration<'_>> {
        let mut found = Vec::new();
        collect(&self.file.items, &self.namespace, &mut found);
        found
    }
}

/// A discovered struct declaration with its resolved namespace.
#[derive(Debug)]
pub struct Declaration<'a> {
    namespace: String,
    item:      &'a ItemStruct
}

impl Declaration<'_> {
    /// Module path the declaration lives under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Declared type name, e.g. `Employee`.
    pub fn type_name(&self) -> String {
        self.item.ident.to_string()
    }

    /// Identity handle for the cache gate.
    pub fn id(&self) -> DeclarationId {
        DeclarationId::new(&self.namespace, self.type_name())
    }

    /// The underlying syntax node.
    pub fn item(&self) -> &ItemStruct {
        self.item
    }
}

fn collect<'a>(items: &'a [Item], namespace: &str, found: &mut Vec<Declaration<'a>>) {
    for item in items {
        match item {
            Item::Struct(item) => found.push(Declaration {
                namespace: namespace.to_string(),
                item
            }),
            Item::Mod(module) => {
                if let Some((_, nested)) = &module.content {
                    let nested_ns = format!("{}::{}", namespace, module.ident);
                    collect(nested, &nested_ns, found);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lists_structs_in_order() {
        let unit = SourceUnit::parse(
            "demo",
            r#"
            pub struct Person { pub first_name: String }
            pub enum Ignored { A }
            pub struct Employee { pub age: i32 }
            "#
        )
        .unwrap();

        let decls = unit.declarations();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].type_name(), "Person");
        assert_eq!(decls[1].type_name(), "Employee");
        assert_eq!(decls[0].namespace(), "demo");
    }

    #[test]
    fn walks_nested_inline_modules() {
        let unit = SourceUnit::parse(
            "demo",
            r#"
            pub struct Top { pub a: i32 }
            pub mod staff {
                pub struct Employee { pub age: i32 }
                pub mod archive {
                    pub struct Record { pub id: u64 }
                }
            }
            "#
        )
        .unwrap();

        let decls = unit.declarations();
        let namespaces: Vec<_> = decls.iter().map(|d| d.namespace().to_string()).collect();
        assert_eq!(namespaces, ["demo", "demo::staff", "demo::staff::archive"]);
    }

    #[test]
    fn out_of_line_modules_are_skipped() {
        let unit = SourceUnit::parse("demo", "pub mod elsewhere;").unwrap();
        assert!(unit.declarations().is_empty());
    }

    #[test]
    fn identity_is_stable_across_reparse() {
        let source = "pub struct Person { pub name: String }";
        let first = SourceUnit::parse("demo", source).unwrap();
        let second = SourceUnit::parse("demo", source).unwrap();

        assert_eq!(first.declarations()[0].id(), second.declarations()[0].id());
    }

    #[test]
    fn identity_distinguishes_namespaces() {
        let source = "pub struct Person { pub name: String }";
        let a = SourceUnit::parse("demo", source).unwrap();
        let b = SourceUnit::parse("demo::inner", source).unwrap();

        assert_ne!(a.declarations()[0].id(), b.declarations()[0].id());
    }

    #[test]
    fn parse_failure_names_the_namespace() {
        let err = SourceUnit::parse("demo", "struct {").unwrap_err();
        assert!(err.to_string().contains("`demo`"));
    }
}
