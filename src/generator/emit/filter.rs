// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Filter struct emitter.
//!
//! Renders an independent `{TypeName}Filter` struct mirroring the retained
//! members as all-optional fields, so callers can express partial-match
//! queries against the original type. Non-`Option` member types are widened
//! to `Option<T>`; already-`Option` members are left as declared.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Default)]
//! pub struct EmployeeFilter {
//!     pub first_name: Option<String>,
//!     pub age: Option<i32>,
//! }
//!
//! impl EmployeeFilter {
//!     pub fn matches(&self, employee: &Employee) -> bool {
//!         if let Some(expected) = &self.first_name {
//!             if expected != &employee.first_name {
//!                 return false;
//!             }
//!         }
//!         /* ... */
//!         true
//!     }
//! }
//! ```
//!
//! The all-`None` default matches everything; member types must implement
//! `PartialEq` for the generated `matches`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::render;
use crate::{
    error::GenerateError,
    generator::{descriptor::TypeDescriptor, parse::{MarkerKind, MemberDef}, sink::Artifact}
};

/// Render the filter struct artifact for a descriptor.
pub fn generate(descriptor: &TypeDescriptor) -> Result<Artifact, GenerateError> {
    let ty = descriptor.type_ident();
    let filter_ident = descriptor.ident_with("", "Filter");
    let param = format_ident!("{}", descriptor.snake_name());
    let members = descriptor.members();

    let field_defs: Vec<TokenStream> = members
        .iter()
        .map(|m| {
            let name = m.name();
            let member_ty = m.ty();
            if m.is_optional() {
                quote! { pub #name: #member_ty }
            } else {
                quote! { pub #name: Option<#member_ty> }
            }
        })
        .collect();

    let match_arms: Vec<TokenStream> = members.iter().map(|m| match_arm(m, &param)).collect();

    let struct_doc = format!(
        "Partial-match filter over [`{}`]. Every field left `None` is a wildcard.",
        descriptor.type_name()
    );
    let matches_doc = format!(
        "Check whether `{}` satisfies every set field.",
        param
    );

    let tokens = quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, Default)]
        pub struct #filter_ident {
            #(#field_defs,)*
        }

        impl #filter_ident {
            #[doc = #matches_doc]
            pub fn matches(&self, #param: &#ty) -> bool {
                #(#match_arms)*
                true
            }
        }
    };

    render(&descriptor.artifact_name(MarkerKind::Filter), tokens)
}

/// Generate the match check for one member.
fn match_arm(member: &MemberDef, param: &syn::Ident) -> TokenStream {
    let name = member.name();

    if member.is_optional() {
        quote! {
            if let Some(expected) = &self.#name {
                if #param.#name.as_ref() != Some(expected) {
                    return false;
                }
            }
        }
    } else {
        quote! {
            if let Some(expected) = &self.#name {
                if expected != &#param.#name {
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::{ItemStruct, parse_quote};

    use super::*;
    use crate::generator::parse::{Configuration, extract};

    fn descriptor_for(item: &ItemStruct, config: Configuration) -> TypeDescriptor {
        let members = extract(item, &config);
        TypeDescriptor::new("demo", item.ident.to_string(), members, config)
    }

    #[test]
    fn non_option_members_are_widened() {
        let item: ItemStruct = parse_quote! {
            pub struct Employee {
                pub age: i32,
            }
        };

        let artifact = generate(&descriptor_for(&item, Configuration::default())).unwrap();
        assert_eq!(artifact.name(), "demo.EmployeeFilter.g");
        assert!(artifact.text().contains("pub struct EmployeeFilter"));
        assert!(artifact.text().contains("pub age: Option<i32>"));
    }

    #[test]
    fn option_members_stay_as_declared() {
        let item: ItemStruct = parse_quote! {
            pub struct Person {
                pub nickname: Option<String>,
            }
        };

        let artifact = generate(&descriptor_for(&item, Configuration::default())).unwrap();
        assert!(artifact.text().contains("pub nickname: Option<String>"));
        assert!(!artifact.text().contains("Option<Option<String>>"));
    }

    #[test]
    fn matches_takes_snake_case_parameter() {
        let item: ItemStruct = parse_quote! {
            pub struct OrderItem {
                pub quantity: u32,
            }
        };

        let artifact = generate(&descriptor_for(&item, Configuration::default())).unwrap();
        assert!(
            artifact
                .text()
                .contains("pub fn matches(&self, order_item: &OrderItem) -> bool")
        );
        assert!(artifact.text().contains("return false"));
    }

    #[test]
    fn filtered_members_are_omitted() {
        let item: ItemStruct = parse_quote! {
            pub struct Employee {
                pub first_name: String,
                pub age: i32,
            }
        };
        let config = Configuration {
            include: vec!["first_name".to_string()],
            exclude: vec![]
        };

        let artifact = generate(&descriptor_for(&item, config)).unwrap();
        assert!(artifact.text().contains("first_name"));
        assert!(!artifact.text().contains("age"));
    }

    #[test]
    fn empty_member_view_renders_empty_struct() {
        let item: ItemStruct = parse_quote! {
            pub struct Opaque {
                secret: String,
            }
        };

        let artifact = generate(&descriptor_for(&item, Configuration::default())).unwrap();
        assert!(artifact.text().contains("pub struct OpaqueFilter {}"));
        assert!(syn::parse_file(artifact.text()).is_ok());
    }

    #[test]
    fn emission_is_deterministic() {
        let item: ItemStruct = parse_quote! {
            pub struct Employee {
                pub first_name: String,
                pub nickname: Option<String>,
                pub age: i32,
            }
        };

        let first = generate(&descriptor_for(&item, Configuration::default())).unwrap();
        let second = generate(&descriptor_for(&item, Configuration::default())).unwrap();
        assert_eq!(first.text(), second.text());
    }
}
