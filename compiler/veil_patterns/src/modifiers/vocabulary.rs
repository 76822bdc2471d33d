//! The modifier vocabulary: how each token reads on each element kind.
//!
//! One row per token, one optional test per element kind. A missing test
//! means the modifier has no meaning for that kind and never matches.
//!
//! | Token              | Type                     | Method                 | Field                  | Property / Event accessor |
//! |--------------------|--------------------------|------------------------|------------------------|---------------------------|
//! | public             | public or nested public  | public                 | public                 | public                    |
//! | private            | nested private           | private                | private                | private                   |
//! | protected          | nested family            | family                 | family                 | family                    |
//! | internal           | nested assembly          | assembly               | assembly               | assembly                  |
//! | protected internal | nested fam-or-assem      | fam-or-assem           | fam-or-assem           | fam-or-assem              |
//! | private protected  | nested fam-and-assem     | fam-and-assem          | fam-and-assem          | fam-and-assem             |
//! | static             | abstract and sealed      | static                 | static                 | static                    |
//! | virtual            | -                        | virtual                | -                      | virtual                   |
//! | abstract           | abstract                 | abstract               | -                      | abstract                  |
//! | sealed             | sealed                   | final                  | -                      | -                         |
//! | override           | -                        | virtual and reuse slot | -                      | virtual and reuse slot    |
//!
//! Properties are read through their getter and events through their adder;
//! without that accessor every cell is false.

use veil_ir::{Element, ElementKind, FieldDef, MethodDef, TypeDef};

use super::ModifierToken;

type TypeTest = fn(&TypeDef) -> bool;
type MethodTest = fn(&MethodDef) -> bool;
type FieldTest = fn(&FieldDef) -> bool;

/// One row of the vocabulary table.
#[derive(Copy, Clone, Debug)]
pub struct ModifierRule {
    token: ModifierToken,
    on_type: Option<TypeTest>,
    on_method: Option<MethodTest>,
    on_field: Option<FieldTest>,
    /// Applied to a property's getter or an event's adder.
    on_accessor: Option<MethodTest>,
}

impl ModifierRule {
    pub fn token(&self) -> ModifierToken {
        self.token
    }

    /// Whether the token has any meaning for `kind`.
    pub fn applies_to(&self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::Type => self.on_type.is_some(),
            ElementKind::Method => self.on_method.is_some(),
            ElementKind::Field => self.on_field.is_some(),
            ElementKind::Property | ElementKind::Event => self.on_accessor.is_some(),
        }
    }

    /// Test the element against this row.
    pub fn matches(&self, element: Element<'_>) -> bool {
        match element {
            Element::Type(ty) => self.on_type.is_some_and(|test| test(ty)),
            Element::Method(method) => self.on_method.is_some_and(|test| test(method)),
            Element::Field(field) => self.on_field.is_some_and(|test| test(field)),
            Element::Property(property) => self.matches_accessor(property.get_method()),
            Element::Event(event) => self.matches_accessor(event.add_method()),
        }
    }

    fn matches_accessor(&self, accessor: Option<&MethodDef>) -> bool {
        match (self.on_accessor, accessor) {
            (Some(test), Some(accessor)) => test(accessor),
            _ => false,
        }
    }
}

fn type_is_public(ty: &TypeDef) -> bool {
    ty.is_public() || ty.is_nested_public()
}

/// No instances and no subclasses: how a static class is encoded.
fn type_is_static(ty: &TypeDef) -> bool {
    ty.is_abstract() && ty.is_sealed()
}

/// Virtual and occupying the parent's slot, as opposed to a virtual
/// method that introduces a new slot and only hides the parent's.
fn method_is_override(method: &MethodDef) -> bool {
    method.is_virtual() && method.is_reuse_slot()
}

static RULES: [ModifierRule; 11] = [
    ModifierRule {
        token: ModifierToken::Public,
        on_type: Some(type_is_public),
        on_method: Some(MethodDef::is_public),
        on_field: Some(FieldDef::is_public),
        on_accessor: Some(MethodDef::is_public),
    },
    ModifierRule {
        token: ModifierToken::Private,
        on_type: Some(TypeDef::is_nested_private),
        on_method: Some(MethodDef::is_private),
        on_field: Some(FieldDef::is_private),
        on_accessor: Some(MethodDef::is_private),
    },
    ModifierRule {
        token: ModifierToken::Protected,
        on_type: Some(TypeDef::is_nested_family),
        on_method: Some(MethodDef::is_family),
        on_field: Some(FieldDef::is_family),
        on_accessor: Some(MethodDef::is_family),
    },
    ModifierRule {
        token: ModifierToken::Internal,
        on_type: Some(TypeDef::is_nested_assembly),
        on_method: Some(MethodDef::is_assembly),
        on_field: Some(FieldDef::is_assembly),
        on_accessor: Some(MethodDef::is_assembly),
    },
    ModifierRule {
        token: ModifierToken::ProtectedInternal,
        on_type: Some(TypeDef::is_nested_family_or_assembly),
        on_method: Some(MethodDef::is_family_or_assembly),
        on_field: Some(FieldDef::is_family_or_assembly),
        on_accessor: Some(MethodDef::is_family_or_assembly),
    },
    ModifierRule {
        token: ModifierToken::PrivateProtected,
        on_type: Some(TypeDef::is_nested_family_and_assembly),
        on_method: Some(MethodDef::is_family_and_assembly),
        on_field: Some(FieldDef::is_family_and_assembly),
        on_accessor: Some(MethodDef::is_family_and_assembly),
    },
    ModifierRule {
        token: ModifierToken::Static,
        on_type: Some(type_is_static),
        on_method: Some(MethodDef::is_static),
        on_field: Some(FieldDef::is_static),
        on_accessor: Some(MethodDef::is_static),
    },
    ModifierRule {
        token: ModifierToken::Virtual,
        on_type: None,
        on_method: Some(MethodDef::is_virtual),
        on_field: None,
        on_accessor: Some(MethodDef::is_virtual),
    },
    ModifierRule {
        token: ModifierToken::Abstract,
        on_type: Some(TypeDef::is_abstract),
        on_method: Some(MethodDef::is_abstract),
        on_field: None,
        on_accessor: Some(MethodDef::is_abstract),
    },
    ModifierRule {
        token: ModifierToken::Sealed,
        on_type: Some(TypeDef::is_sealed),
        on_method: Some(MethodDef::is_final),
        on_field: None,
        on_accessor: None,
    },
    ModifierRule {
        token: ModifierToken::Override,
        on_type: None,
        on_method: Some(method_is_override),
        on_field: None,
        on_accessor: Some(method_is_override),
    },
];

/// The shared token-to-test table.
///
/// Both modifier predicates go through [`ModifierVocabulary::standard`];
/// there is no second copy of the table to keep in sync.
#[derive(Debug)]
pub struct ModifierVocabulary {
    rules: &'static [ModifierRule; 11],
}

static STANDARD: ModifierVocabulary = ModifierVocabulary { rules: &RULES };

impl ModifierVocabulary {
    pub fn standard() -> &'static ModifierVocabulary {
        &STANDARD
    }

    pub fn rule(&self, token: ModifierToken) -> &ModifierRule {
        &self.rules[token.index()]
    }

    pub fn rules(&self) -> impl Iterator<Item = &ModifierRule> {
        self.rules.iter()
    }

    /// Whether `element` carries `token`.
    pub fn matches(&self, token: ModifierToken, element: Element<'_>) -> bool {
        self.rule(token).matches(element)
    }

    /// Whether `ty` carries `token`, considering only type-level tokens.
    pub fn matches_type(&self, token: ModifierToken, ty: &TypeDef) -> bool {
        token.is_type_level() && self.rule(token).matches(Element::Type(ty))
    }

    /// Every token `element` carries, in table order.
    pub fn modifiers_of(&self, element: Element<'_>) -> Vec<ModifierToken> {
        self.rules()
            .filter(|rule| rule.matches(element))
            .map(ModifierRule::token)
            .collect()
    }
}
