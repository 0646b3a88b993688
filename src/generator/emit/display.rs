// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Display` companion emitter.
//!
//! Renders a `core::fmt::Display` implementation for the annotated type,
//! the generated-trait-impl shape of "attach a stringification method to a
//! separately-declared type". Output for members `[name, age]`:
//!
//! ```rust,ignore
//! impl ::core::fmt::Display for Person {
//!     fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
//!         ::core::write!(f, "name:{}; age:{}", self.name, self.age)
//!     }
//! }
//! ```
//!
//! Entries are joined with `"; "`, so there is no trailing separator to
//! trim and the zero-member case degrades to an empty format string instead
//! of a malformed literal.

use quote::quote;

use super::render;
use crate::{
    error::GenerateError,
    generator::{descriptor::TypeDescriptor, parse::MarkerKind, sink::Artifact}
};

/// Render the `Display` implementation artifact for a descriptor.
pub fn generate(descriptor: &TypeDescriptor) -> Result<Artifact, GenerateError> {
    let ty = descriptor.type_ident();
    let members = descriptor.members();

    let template = members
        .iter()
        .map(|m| format!("{}:{{}}", m.name_str()))
        .collect::<Vec<_>>()
        .join("; ");

    let values = members.iter().map(|m| {
        let name = m.name();
        quote! { self.#name }
    });

    let tokens = quote! {
        impl ::core::fmt::Display for #ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, #template #(, #values)*)
            }
        }
    };

    render(&descriptor.artifact_name(MarkerKind::Display), tokens)
}

#[cfg(test)]
mod tests {
    use syn::{ItemStruct, parse_quote};

    use super::*;
    use crate::generator::parse::{Configuration, extract};

    fn descriptor_for(item: &ItemStruct) -> TypeDescriptor {
        let config = Configuration::default();
        let members = extract(item, &config);
        TypeDescriptor::new("demo", item.ident.to_string(), members, config)
    }

    #[test]
    fn members_render_in_order_without_trailing_separator() {
        let item: ItemStruct = parse_quote! {
            pub struct Person {
                pub name: String,
                pub age: i32,
            }
        };

        let artifact = generate(&descriptor_for(&item)).unwrap();
        assert_eq!(artifact.name(), "demo.Person.g");
        assert!(artifact.text().contains(r#""name:{}; age:{}""#));
        assert!(artifact.text().contains("self.name"));
        assert!(artifact.text().contains("self.age"));
        assert!(!artifact.text().contains("age:{}; \""));
    }

    #[test]
    fn empty_member_view_renders_valid_empty_template() {
        let item: ItemStruct = parse_quote! {
            pub struct Opaque {
                secret: String,
            }
        };

        let artifact = generate(&descriptor_for(&item)).unwrap();
        assert!(artifact.text().contains(r#"write!(f, "")"#));
        assert!(syn::parse_file(artifact.text()).is_ok());
    }

    #[test]
    fn emission_is_deterministic() {
        let item: ItemStruct = parse_quote! {
            pub struct Person {
                pub name: String,
                pub age: i32,
            }
        };

        let first = generate(&descriptor_for(&item)).unwrap();
        let second = generate(&descriptor_for(&item)).unwrap();
        assert_eq!(first.text(), second.text());
    }

    #[test]
    fn implementation_targets_the_declared_type() {
        let item: ItemStruct = parse_quote! {
            pub struct Employee { pub age: i32 }
        };

        let artifact = generate(&descriptor_for(&item)).unwrap();
        assert!(
            artifact
                .text()
                .contains("impl ::core::fmt::Display for Employee")
        );
    }
}
