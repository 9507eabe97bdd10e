//! SELECT statement builder using the typestate pattern.

use std::marker::PhantomData;

use super::field::FieldRef;
use super::predicate::Predicate;
use crate::schema::Entity;

// Typestate markers (zero-sized types)

/// Marker: no source entity specified yet.
pub struct NoFrom;
/// Marker: source entity has been specified.
pub struct HasFrom;

/// Starts a SELECT statement targeting one field.
#[must_use]
pub fn select<T>(field: FieldRef<T>) -> Select<NoFrom> {
    Select {
        field: field.name(),
        from: None,
        predicates: vec![],
        _state: PhantomData,
    }
}

/// A SELECT statement builder.
///
/// Uses the typestate pattern to ensure that:
/// - `execute_on()` is only available once the source entity is specified
/// - `where_clause()` follows the FROM step
///
/// Each step consumes the builder, so a rendered statement cannot be
/// reconfigured afterwards.
pub struct Select<From> {
    field: &'static str,
    from: Option<&'static str>,
    predicates: Vec<Predicate>,
    _state: PhantomData<From>,
}

// Transition: NoFrom -> HasFrom
impl Select<NoFrom> {
    /// Specifies the entity to select from.
    #[must_use]
    pub fn from<E: Entity>(self) -> Select<HasFrom> {
        Select {
            field: self.field,
            from: Some(E::NAME),
            predicates: self.predicates,
            _state: PhantomData,
        }
    }
}

// Methods available after FROM
impl Select<HasFrom> {
    /// Adds a WHERE clause.
    ///
    /// Predicates are joined with ` AND ` in the order supplied; an empty
    /// slice produces no WHERE clause. Calling this again replaces the
    /// previous predicates.
    #[must_use]
    pub fn where_clause(mut self, predicates: &[Predicate]) -> Self {
        self.predicates = predicates.to_vec();
        self
    }

    /// Renders the statement and hands it to `sink`.
    ///
    /// The rendered text is the operation's only output; nothing is
    /// returned to the caller.
    pub fn execute_on(self, sink: impl FnOnce(String)) {
        sink(self.render());
    }

    fn render(&self) -> String {
        let mut sql = String::from("SELECT ");
        sql.push_str(self.field);

        if let Some(from) = self.from {
            sql.push_str(" FROM ");
            sql.push_str(from);
        }

        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            let conjuncts: Vec<String> =
                self.predicates.iter().map(ToString::to_string).collect();
            sql.push_str(&conjuncts.join(" AND "));
        }

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::field;

    struct Person;

    impl Entity for Person {
        const NAME: &'static str = "Person";
        const FIELDS: &'static [&'static str] = &["id", "name", "age"];
    }

    #[test]
    fn test_select_without_predicates() {
        let mut out = String::new();
        select(field::<Person, String>("name"))
            .from::<Person>()
            .execute_on(|sql| out = sql);

        assert_eq!(out, "SELECT name FROM Person");
    }

    #[test]
    fn test_select_with_empty_where() {
        let mut out = String::new();
        select(field::<Person, String>("name"))
            .from::<Person>()
            .where_clause(&[])
            .execute_on(|sql| out = sql);

        assert_eq!(out, "SELECT name FROM Person");
    }

    #[test]
    fn test_select_with_predicate() {
        let mut out = String::new();
        select(field::<Person, String>("name"))
            .from::<Person>()
            .where_clause(&[field::<Person, i64>("id").eq(100)])
            .execute_on(|sql| out = sql);

        assert_eq!(out, "SELECT name FROM Person WHERE id=100");
    }

    #[test]
    fn test_predicates_keep_input_order() {
        let mut out = String::new();
        select(field::<Person, String>("name"))
            .from::<Person>()
            .where_clause(&[
                field::<Person, i32>("age").gte(18),
                field::<Person, i64>("id").lt(1000),
            ])
            .execute_on(|sql| out = sql);

        assert_eq!(out, "SELECT name FROM Person WHERE age>=18 AND id<1000");
    }

    #[test]
    fn test_where_clause_last_write_wins() {
        let mut out = String::new();
        select(field::<Person, String>("name"))
            .from::<Person>()
            .where_clause(&[field::<Person, i32>("age").gt(30)])
            .where_clause(&[field::<Person, i64>("id").eq(100)])
            .execute_on(|sql| out = sql);

        assert_eq!(out, "SELECT name FROM Person WHERE id=100");
    }

    // This would fail to compile: SELECT without FROM
    // #[test]
    // fn test_select_without_from_fails() {
    //     select(field::<Person, String>("name"))
    //         .execute_on(|_| {});  // Error: method `execute_on` not found
    // }
}
