//! Field-reference query example.
//!
//! Builds the two canonical statements and prints them:
//!
//! ```text
//! SELECT name FROM Person WHERE id=100
//! UPDATE Person SET name='John' WHERE id=100
//! ```
//!
//! Run with: cargo run --example person

use refql_core::{select, update};
use refql_derive::Entity;

/// The example schema whose fields are referenced. The builders never
/// look inside it; only the name and field names reach the output.
#[allow(dead_code)]
#[derive(Debug, Clone, Entity)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

fn main() {
    select(Person::name())
        .from::<Person>()
        .where_clause(&[Person::id().eq(100)])
        .execute_on(|sql| println!("{sql}"));

    update::<Person>()
        .set(Person::name(), "John")
        .where_clause(&[Person::id().eq(100)])
        .execute_on(|sql| println!("{sql}"));
}
