//! Typed statement builders.
//!
//! Statements are assembled from [`FieldRef`] values, rendered to text,
//! and handed to a caller-supplied sink. The typestate pattern catches
//! invalid construction order at compile time.
//!
//! # Example
//!
//! ```rust
//! use refql_core::builder::{field, select};
//! use refql_core::schema::Entity;
//!
//! struct Person;
//!
//! impl Entity for Person {
//!     const NAME: &'static str = "Person";
//!     const FIELDS: &'static [&'static str] = &["id", "name"];
//! }
//!
//! let mut out = String::new();
//! select(field::<Person, String>("name"))
//!     .from::<Person>()
//!     .where_clause(&[field::<Person, i64>("id").eq(100)])
//!     .execute_on(|sql| out = sql);
//!
//! assert_eq!(out, "SELECT name FROM Person WHERE id=100");
//! ```

mod field;
mod predicate;
mod select;
mod update;
pub mod value;

pub use field::{FieldRef, field};
pub use predicate::{CompareOp, Predicate};
pub use select::{Select, select};
pub use update::{Update, update};
pub use value::{SqlValue, ToSqlValue};
