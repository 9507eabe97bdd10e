//! Typed field references.

use std::fmt;
use std::marker::PhantomData;

use crate::schema::Entity;

/// Creates a reference to a field of entity `E` with value type `T`.
///
/// The name is taken at face value; nothing checks that `E` actually
/// declares such a field. Prefer the accessors generated by
/// `#[derive(Entity)]`, which tie names and types to the schema struct.
#[must_use]
pub fn field<E: Entity, T>(name: &'static str) -> FieldRef<T> {
    FieldRef {
        entity: E::NAME,
        name,
        _value: PhantomData,
    }
}

/// A typed reference to one field of an entity.
///
/// Carries the owning entity's display name, the field name, and a
/// zero-sized value type tag `T`. The tag never appears in generated text;
/// it constrains predicate and assignment values at compile time.
pub struct FieldRef<T> {
    entity: &'static str,
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> FieldRef<T> {
    /// Returns the field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the owning entity's name.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }
}

// Manual impls: the derives would bound T, which is only a tag.

impl<T> Clone for FieldRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldRef<T> {}

impl<T> fmt::Debug for FieldRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("entity", &self.entity)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;

    impl Entity for Person {
        const NAME: &'static str = "Person";
        const FIELDS: &'static [&'static str] = &["id", "name"];
    }

    #[test]
    fn test_field_names() {
        let id = field::<Person, i64>("id");
        assert_eq!(id.name(), "id");
        assert_eq!(id.entity(), "Person");
    }

    #[test]
    fn test_field_ref_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<FieldRef<String>>();
    }
}
