//! UPDATE statement builder using the typestate pattern.

use std::marker::PhantomData;

use super::field::FieldRef;
use super::predicate::Predicate;
use super::value::{SqlValue, ToSqlValue};
use crate::schema::Entity;

// Typestate markers

/// Marker: no assignment specified yet.
pub struct NoSet;
/// Marker: at least one assignment has been specified.
pub struct HasSet;

/// An assignment in the SET clause.
#[derive(Debug, Clone)]
struct Assignment {
    field: &'static str,
    value: SqlValue,
}

/// Starts an UPDATE statement against entity `E`.
#[must_use]
pub fn update<E: Entity>() -> Update<NoSet> {
    Update {
        target: E::NAME,
        assignments: vec![],
        predicates: vec![],
        _state: PhantomData,
    }
}

/// An UPDATE statement builder.
///
/// Uses the typestate pattern to ensure that `execute_on()` and
/// `where_clause()` are only available once at least one assignment has
/// been made, so a statement with an empty SET clause cannot be built.
pub struct Update<Set> {
    target: &'static str,
    assignments: Vec<Assignment>,
    predicates: Vec<Predicate>,
    _state: PhantomData<Set>,
}

// Transition: NoSet -> HasSet
impl Update<NoSet> {
    /// Adds the first SET assignment.
    #[must_use]
    pub fn set<T, V>(mut self, field: FieldRef<T>, value: V) -> Update<HasSet>
    where
        T: ToSqlValue,
        V: Into<T>,
    {
        self.assignments.push(Assignment {
            field: field.name(),
            value: value.into().to_sql_value(),
        });
        Update {
            target: self.target,
            assignments: self.assignments,
            predicates: self.predicates,
            _state: PhantomData,
        }
    }
}

// Methods available after the first assignment
impl Update<HasSet> {
    /// Adds another SET assignment.
    ///
    /// Assignments render in insertion order. Re-assigning a field
    /// overwrites its value but keeps its original position.
    #[must_use]
    pub fn set<T, V>(mut self, field: FieldRef<T>, value: V) -> Self
    where
        T: ToSqlValue,
        V: Into<T>,
    {
        let value = value.into().to_sql_value();
        match self
            .assignments
            .iter_mut()
            .find(|a| a.field == field.name())
        {
            Some(existing) => existing.value = value,
            None => self.assignments.push(Assignment {
                field: field.name(),
                value,
            }),
        }
        self
    }

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
        let mut sql = String::from("UPDATE ");
        sql.push_str(self.target);
        sql.push_str(" SET ");

        let pairs: Vec<String> = self
            .assignments
            .iter()
            .map(|a| format!("{}={}", a.field, a.value.to_literal()))
            .collect();
        sql.push_str(&pairs.join(","));

        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            let conjuncts: Vec<String> =
                self.predicates.iter().map(ToString::to_string).collect();
            sql.push_str(&conjuncts.join(" AND "));
        }

        sql
    }
}
