//! Comparison predicates.

use std::fmt;

use super::field::FieldRef;
use super::value::{SqlValue, ToSqlValue};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Lt => write!(f, "<"),
            Self::Lte => write!(f, "<="),
            Self::Gt => write!(f, ">"),
            Self::Gte => write!(f, ">="),
        }
    }
}

/// A single comparison contributing one conjunct to a `WHERE` clause.
///
/// Renders as `<field><op><literal>` with no surrounding spaces.
#[derive(Debug, Clone)]
pub struct Predicate {
    entity: &'static str,
    field: &'static str,
    op: CompareOp,
    value: SqlValue,
}

impl Predicate {
    /// Creates a predicate from its parts.
    ///
    /// The comparison methods on [`FieldRef`] are the usual entry point;
    /// this constructor exists for callers that pick the operator at
    /// run time.
    #[must_use]
    pub fn new<T: ToSqlValue>(field: FieldRef<T>, op: CompareOp, value: T) -> Self {
        Self {
            entity: field.entity(),
            field: field.name(),
            op,
            value: value.to_sql_value(),
        }
    }

    /// Returns the name of the compared field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the entity owning the compared field.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op, self.value.to_literal())
    }
}

impl<T: ToSqlValue> FieldRef<T> {
    /// Creates an equality predicate (field = value).
    #[must_use]
    pub fn eq<V: Into<T>>(self, value: V) -> Predicate {
        Predicate::new(self, CompareOp::Eq, value.into())
    }

    /// Creates a less-than predicate (field < value).
    #[must_use]
    pub fn lt<V: Into<T>>(self, value: V) -> Predicate {
        Predicate::new(self, CompareOp::Lt, value.into())
    }

    /// Creates a less-than-or-equal predicate (field <= value).
    #[must_use]
    pub fn lte<V: Into<T>>(self, value: V) -> Predicate {
        Predicate::new(self, CompareOp::Lte, value.into())
    }

    /// Creates a greater-than predicate (field > value).
    #[must_use]
    pub fn gt<V: Into<T>>(self, value: V) -> Predicate {
        Predicate::new(self, CompareOp::Gt, value.into())
    }

    /// Creates a greater-than-or-equal predicate (field >= value).
    #[must_use]
    pub fn gte<V: Into<T>>(self, value: V) -> Predicate {
        Predicate::new(self, CompareOp::Gte, value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::field;
    use crate::schema::Entity;

    struct Person;

    impl Entity for Person {
        const NAME: &'static str = "Person";
        const FIELDS: &'static [&'static str] = &["id", "name", "age"];
    }

    #[test]
    fn test_eq_renders_without_spaces() {
        let p = field::<Person, i64>("id").eq(100);
        assert_eq!(p.to_string(), "id=100");
    }

    #[test]
    fn test_string_value_quoted() {
        let p = field::<Person, String>("name").eq("John");
        assert_eq!(p.to_string(), "name='John'");
    }

    #[test]
    fn test_comparison_operators() {
        let age = field::<Person, i32>("age");
        assert_eq!(age.lt(30).to_string(), "age<30");
        assert_eq!(age.lte(30).to_string(), "age<=30");
        assert_eq!(age.gt(30).to_string(), "age>30");
        assert_eq!(age.gte(30).to_string(), "age>=30");
    }

    #[test]
    fn test_explicit_constructor() {
        let p = Predicate::new(field::<Person, i64>("id"), CompareOp::Lt, 5);
        assert_eq!(p.to_string(), "id<5");
        assert_eq!(p.field(), "id");
        assert_eq!(p.entity(), "Person");
    }

    #[test]
    fn test_rendering_is_pure() {
        let p = field::<Person, i64>("id").eq(100);
        assert_eq!(p.to_string(), p.to_string());
    }
}
