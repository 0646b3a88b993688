// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Eligible member extraction.
//!
//! Computes the ordered member view of a matched declaration: all `pub`
//! named fields in declaration order, narrowed by the configuration in two
//! stages: include-restrict first (non-empty include keeps only named
//! members), then exclude-remove (non-empty exclude drops named members).
//!
//! # Optionality
//!
//! A member whose type path ends in `Option` is [`Nullability::Optional`];
//! everything else is [`Nullability::NonNull`]. This is the same last-segment
//! heuristic the rest of the ecosystem uses and shares its limitation: a
//! custom type named `Option` is a false positive.

use syn::{Field, Ident, ItemStruct, Type, Visibility};

use super::config::Configuration;

/// Optionality of a member's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// Plain type; the filter emitter widens it to `Option<T>`.
    NonNull,

    /// Already `Option<T>`; left as declared.
    Optional
}

/// One eligible member of a matched declaration.
///
/// Equality and hashing are structural over name, type, and nullability,
/// insensitive to spans and declaration identity, so that descriptor
/// equality survives re-parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberDef {
    name:        Ident,
    ty:          Type,
    nullability: Nullability
}

impl MemberDef {
    /// Build a member from a struct field, if eligible.
    ///
    /// Returns `None` for non-`pub` and unnamed fields.
    pub fn from_field(field: &Field) -> Option<Self> {
        if !matches!(field.vis, Visibility::Public(_)) {
            return None;
        }

        let name = field.ident.clone()?;
        let ty = field.ty.clone();
        let nullability = if is_option(&ty) {
            Nullability::Optional
        } else {
            Nullability::NonNull
        };

        Some(Self {
            name,
            ty,
            nullability
        })
    }

    /// Member name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.name
    }

    /// Member name as a string.
    pub fn name_str(&self) -> String {
        self.name.to_string()
    }

    /// Declared member type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Optionality of the declared type.
    pub fn nullability(&self) -> Nullability {
        self.nullability
    }

    /// Whether the declared type is already `Option<T>`.
    pub fn is_optional(&self) -> bool {
        self.nullability == Nullability::Optional
    }
}

/// Extract the ordered, filtered member view of a declaration.
pub fn extract(item: &ItemStruct, config: &Configuration) -> Vec<MemberDef> {
    let mut members: Vec<MemberDef> = item.fields.iter().filter_map(MemberDef::from_field).collect();

    if !config.include.is_empty() {
        members.retain(|m| config.include.iter().any(|name| *name == m.name_str()));
    }

    if !config.exclude.is_empty() {
        members.retain(|m| !config.exclude.iter().any(|name| *name == m.name_str()));
    }

    members
}

/// Check whether a type path ends with `Option`.
fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
    {
        return segment.ident == "Option";
    }
    false
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn employee() -> ItemStruct {
        parse_quote! {
            pub struct Employee {
                pub first_name: String,
                pub middle_name: String,
                pub last_name: String,
                pub age: i32,
            }
        }
    }

    fn names(members: &[MemberDef]) -> Vec<String> {
        members.iter().map(MemberDef::name_str).collect()
    }

    #[test]
    fn unfiltered_keeps_all_public_members_in_order() {
        let members = extract(&employee(), &Configuration::default());
        assert_eq!(names(&members), ["first_name", "middle_name", "last_name", "age"]);
    }

    #[test]
    fn include_restricts_to_named_members() {
        let config = Configuration {
            include: vec!["first_name".to_string()],
            exclude: vec![]
        };
        let members = extract(&employee(), &config);
        assert_eq!(names(&members), ["first_name"]);
    }

    #[test]
    fn exclude_drops_named_members() {
        let config = Configuration {
            include: vec![],
            exclude: vec!["age".to_string()]
        };
        let members = extract(&employee(), &config);
        assert_eq!(names(&members), ["first_name", "middle_name", "last_name"]);
    }

    #[test]
    fn include_then_exclude_compose() {
        let config = Configuration {
            include: vec!["first_name".to_string(), "age".to_string()],
            exclude: vec!["age".to_string()]
        };
        let members = extract(&employee(), &config);
        assert_eq!(names(&members), ["first_name"]);
    }

    #[test]
    fn include_of_unknown_name_yields_empty_view() {
        let config = Configuration {
            include: vec!["salary".to_string()],
            exclude: vec![]
        };
        assert!(extract(&employee(), &config).is_empty());
    }

    #[test]
    fn private_fields_are_not_eligible() {
        let item: ItemStruct = parse_quote! {
            pub struct Person {
                pub name: String,
                secret: String,
                pub(crate) internal: u8,
            }
        };
        let members = extract(&item, &Configuration::default());
        assert_eq!(names(&members), ["name"]);
    }

    #[test]
    fn tuple_struct_has_no_eligible_members() {
        let item: ItemStruct = parse_quote! {
            pub struct Point(pub i32, pub i32);
        };
        assert!(extract(&item, &Configuration::default()).is_empty());
    }

    #[test]
    fn option_members_are_detected() {
        let item: ItemStruct = parse_quote! {
            pub struct Person {
                pub nickname: Option<String>,
                pub fully_qualified: std::option::Option<u8>,
                pub age: i32,
            }
        };
        let members = extract(&item, &Configuration::default());
        assert!(members[0].is_optional());
        assert!(members[1].is_optional());
        assert_eq!(members[2].nullability(), Nullability::NonNull);
    }

    #[test]
    fn members_compare_structurally_across_reparse() {
        let a = extract(&employee(), &Configuration::default());
        let b = extract(&employee(), &Configuration::default());
        assert_eq!(a, b);
    }
}
