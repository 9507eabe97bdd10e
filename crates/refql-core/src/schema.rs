//! Schema trait for named entity types.
//!
//! The builders never inspect the shape of a schema type. An entity only
//! contributes its display name and field names to generated text; its
//! fields are addressed through [`FieldRef`](crate::builder::FieldRef)
//! values constructed by the caller (or by the `#[derive(Entity)]` macro
//! from `refql-derive`).

/// Trait for entity metadata.
///
/// Implemented by hand or via `#[derive(Entity)]` to provide the name
/// rendered into `FROM` and `UPDATE` clauses.
pub trait Entity {
    /// The entity name as it appears in generated statements.
    const NAME: &'static str;

    /// List of all field names, in declaration order.
    const FIELDS: &'static [&'static str];
}
