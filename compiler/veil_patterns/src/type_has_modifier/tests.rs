use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use veil_ir::{
    EventDef, FieldAttributes, MemberAccess, MethodAttributes, PropertyDef, TypeAttributes,
    TypeDef, TypeVisibility,
};

use super::*;
use crate::test_helpers::{field, literal, method, owner, type_def, type_with};
use crate::ModifierToken;

fn type_has(modifiers: &str) -> TypeHasModifierFunction {
    TypeHasModifierFunction::new(literal(modifiers))
}

/// Method declared on `declaring_type`.
fn member_of(declaring_type: &Arc<TypeDef>) -> veil_ir::MethodDef {
    method(MemberAccess::Private, MethodAttributes::empty())
        .with_declaring_type(Arc::clone(declaring_type))
}

/// Argument that counts how often it is evaluated.
struct CountingModifiers {
    evaluations: AtomicUsize,
}

impl PatternExpression for CountingModifiers {
    fn evaluate(&self, _element: Element<'_>) -> Value {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        Value::string("public")
    }
}

#[test]
fn type_has_modifier_name_and_arity() {
    let function = type_has("public");
    assert_eq!(function.name(), "type-has-modifier");
    assert_eq!(function.argument_count(), 1);
    assert_eq!(function.arguments().len(), 1);
}

#[test]
fn every_type_level_token_matches_enclosing_type() {
    for token in ModifierToken::ALL {
        let Some(container) = type_with(token) else {
            continue;
        };
        let m = member_of(&Arc::new(container));
        assert!(type_has(token.as_str()).test(Element::Method(&m)), "{token}");
    }
}

#[test]
fn padded_uppercase_token_matches() {
    let m = member_of(&owner(TypeVisibility::Public, TypeAttributes::empty()));
    assert!(type_has(" PUBLIC ").test(Element::Method(&m)));
    assert!(type_has("private | Public").test(Element::Method(&m)));
}

#[test]
fn padded_two_word_token_matches() {
    let container = owner(
        TypeVisibility::NestedFamilyOrAssembly,
        TypeAttributes::empty(),
    );
    let m = member_of(&container);
    assert!(type_has("  Protected Internal ").test(Element::Method(&m)));
}

#[test]
fn top_level_type_never_matches() {
    let top = type_def(
        TypeVisibility::Public,
        TypeAttributes::ABSTRACT | TypeAttributes::SEALED,
    );
    let all = ModifierToken::ALL.map(ModifierToken::as_str).join("|");

    assert!(!type_has("public").test(Element::Type(&top)));
    assert!(!type_has(&all).test(Element::Type(&top)));
}

#[test]
fn nested_type_reads_its_declaring_type() {
    let outer = owner(TypeVisibility::Public, TypeAttributes::SEALED);
    let inner = TypeDef::new(
        "",
        "Inner",
        TypeAttributes::ABSTRACT.with_visibility(TypeVisibility::NestedPrivate),
    )
    .with_declaring_type(outer);

    assert!(type_has("sealed").test(Element::Type(&inner)));
    assert!(type_has("public").test(Element::Type(&inner)));
    assert!(!type_has("private").test(Element::Type(&inner)));
    assert!(!type_has("abstract").test(Element::Type(&inner)));
}

#[test]
fn every_member_kind_resolves_its_declaring_type() {
    let container = owner(
        TypeVisibility::NotPublic,
        TypeAttributes::ABSTRACT | TypeAttributes::SEALED,
    );
    let f = field(MemberAccess::Public, FieldAttributes::empty())
        .with_declaring_type(Arc::clone(&container));
    let property = PropertyDef::new("Count").with_declaring_type(Arc::clone(&container));
    let event = EventDef::new("Changed").with_declaring_type(Arc::clone(&container));
    let m = member_of(&container);

    let function = type_has("static");
    assert!(function.test(Element::Field(&f)));
    assert!(function.test(Element::Property(&property)));
    assert!(function.test(Element::Event(&event)));
    assert!(function.test(Element::Method(&m)));
}

#[test]
fn detached_member_never_matches() {
    let m = method(MemberAccess::Public, MethodAttributes::empty());
    assert!(!type_has("public").test(Element::Method(&m)));
}

#[test]
fn member_only_tokens_never_match() {
    let container = owner(
        TypeVisibility::Public,
        TypeAttributes::ABSTRACT | TypeAttributes::SEALED | TypeAttributes::INTERFACE,
    );
    let m = member_of(&container);
    assert!(!type_has("virtual|override").test(Element::Method(&m)));
    assert!(!type_has("VIRTUAL").test(Element::Method(&m)));
}

#[test]
fn member_modifiers_are_not_consulted() {
    let container = owner(TypeVisibility::NotPublic, TypeAttributes::empty());
    let m = method(MemberAccess::Public, MethodAttributes::STATIC)
        .with_declaring_type(container);
    assert!(!type_has("public|static").test(Element::Method(&m)));
}

#[test]
fn unknown_tokens_never_match() {
    let m = member_of(&owner(TypeVisibility::Public, TypeAttributes::empty()));
    assert!(!type_has("exported|visible").test(Element::Method(&m)));
    assert!(!type_has("").test(Element::Method(&m)));
}

#[test]
fn argument_skipped_without_enclosing_type() {
    let counting = Arc::new(CountingModifiers {
        evaluations: AtomicUsize::new(0),
    });
    let function = TypeHasModifierFunction::new(Box::new(ArcArgument(Arc::clone(&counting))));

    let top = type_def(TypeVisibility::Public, TypeAttributes::empty());
    assert!(!function.test(Element::Type(&top)));
    assert_eq!(counting.evaluations.load(Ordering::Relaxed), 0);

    let m = member_of(&owner(TypeVisibility::Public, TypeAttributes::empty()));
    assert!(function.test(Element::Method(&m)));
    assert_eq!(counting.evaluations.load(Ordering::Relaxed), 1);
}

/// Lets a test keep a handle on an argument it moved into a function.
struct ArcArgument(Arc<CountingModifiers>);

impl PatternExpression for ArcArgument {
    fn evaluate(&self, element: Element<'_>) -> Value {
        self.0.evaluate(element)
    }
}

#[test]
fn evaluate_returns_bool_value() {
    let m = member_of(&owner(TypeVisibility::Public, TypeAttributes::empty()));
    assert_eq!(type_has("public").evaluate(Element::Method(&m)), Value::Bool(true));
    assert_eq!(type_has("sealed").evaluate(Element::Method(&m)), Value::Bool(false));
}
