//! # refql-core
//!
//! Typed field references and statement builders that render pseudo-SQL
//! text without touching a database.
//!
//! This crate provides:
//! - [`FieldRef`]: a typed descriptor naming one field of an entity
//! - Predicates composing into a flat `WHERE` conjunction
//! - `SELECT` and `UPDATE` builders whose construction order is enforced
//!   by the typestate pattern
//!
//! A builder's terminal operation renders the statement and hands it to a
//! caller-supplied sink; the string is never returned directly. "Execute"
//! means exactly that — nothing is connected to, parsed, or persisted.
//!
//! ```rust
//! use refql_core::{field, select, update};
//! use refql_core::schema::Entity;
//!
//! struct Person;
//!
//! impl Entity for Person {
//!     const NAME: &'static str = "Person";
//!     const FIELDS: &'static [&'static str] = &["id", "name"];
//! }
//!
//! let mut out = Vec::new();
//!
//! select(field::<Person, String>("name"))
//!     .from::<Person>()
//!     .where_clause(&[field::<Person, i64>("id").eq(100)])
//!     .execute_on(|sql| out.push(sql));
//!
//! update::<Person>()
//!     .set(field::<Person, String>("name"), "John")
//!     .where_clause(&[field::<Person, i64>("id").eq(100)])
//!     .execute_on(|sql| out.push(sql));
//!
//! assert_eq!(out[0], "SELECT name FROM Person WHERE id=100");
//! assert_eq!(out[1], "UPDATE Person SET name='John' WHERE id=100");
//! ```
//!
//! Literal values are rendered inline with one naive quoting rule (strings
//! single-quoted verbatim, no escaping); the output format is the whole
//! contract, SQL validity is not.

pub mod builder;
pub mod schema;

pub use builder::{CompareOp, FieldRef, Predicate, field, select, update};
pub use schema::Entity;
