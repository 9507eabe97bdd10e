//! Tests for the `#[derive(Entity)]` macro output.
//!
//! These tests verify that the derive macro generates correct:
//! - `Entity` impl with `NAME` and `FIELDS`
//! - Typed `FieldRef` accessors per field
//! - Name overrides via `#[entity(name)]` and `#[field(name)]`

use refql_core::builder::FieldRef;
use refql_core::schema::Entity;
use refql_derive::Entity;

// =============================================================================
// Test: Basic struct with default entity name (identifier verbatim)
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Entity)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

#[test]
fn test_entity_name_is_identifier() {
    assert_eq!(Person::NAME, "Person");
}

#[test]
fn test_entity_fields_in_declaration_order() {
    assert_eq!(Person::FIELDS, &["id", "name", "age"]);
}

#[test]
fn test_accessors_carry_names() {
    assert_eq!(Person::id().name(), "id");
    assert_eq!(Person::name().name(), "name");
    assert_eq!(Person::age().name(), "age");
}

#[test]
fn test_accessors_carry_entity_name() {
    assert_eq!(Person::id().entity(), "Person");
    assert_eq!(Person::name().entity(), "Person");
}

#[test]
fn test_accessor_value_types() {
    let _: FieldRef<i64> = Person::id();
    let _: FieldRef<String> = Person::name();
    let _: FieldRef<i32> = Person::age();
}

// =============================================================================
// Test: Custom entity name with #[entity(name = "...")]
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Entity)]
#[entity(name = "Employee")]
pub struct StaffMember {
    pub id: i64,
    pub salary: f64,
}

#[test]
fn test_custom_entity_name() {
    assert_eq!(StaffMember::NAME, "Employee");
    assert_eq!(StaffMember::id().entity(), "Employee");
}

// =============================================================================
// Test: Custom field name with #[field(name = "...")]
// =============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Entity)]
pub struct Order {
    pub id: i64,
    #[field(name = "customer_id")]
    pub customer: i64,
}

#[test]
fn test_custom_field_name() {
    assert_eq!(Order::FIELDS, &["id", "customer_id"]);
    assert_eq!(Order::customer().name(), "customer_id");
}

// =============================================================================
// Test: Generated references are plain copyable data
// =============================================================================

#[test]
fn test_field_refs_are_copy_clone() {
    fn assert_copy_clone<T: Copy + Clone>() {}

    assert_copy_clone::<FieldRef<i64>>();
    assert_copy_clone::<FieldRef<String>>();
}

#[test]
fn test_field_refs_are_debug() {
    let repr = format!("{:?}", Person::id());
    assert!(repr.contains("Person"));
    assert!(repr.contains("id"));
}
