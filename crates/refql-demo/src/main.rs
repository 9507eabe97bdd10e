//! refql-demo CLI
//!
//! Builds the example statements from typed field references and prints
//! them. Nothing is executed against a database; the sink handed to the
//! builders writes to stdout.

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use refql_core::{select, update};
use refql_derive::Entity;

/// The example schema whose fields are referenced.
#[allow(dead_code)]
#[derive(Debug, Clone, Entity)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

/// Builds pseudo-SQL statements from typed field references.
#[derive(Parser)]
#[command(name = "refql-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the example SELECT statement.
    Select,
    /// Build the example UPDATE statement.
    Update,
    /// Build both example statements.
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Select => build_select(),
        Commands::Update => build_update(),
        Commands::All => {
            build_select();
            build_update();
        }
    }

    Ok(())
}

fn build_select() {
    info!("Building SELECT from field references...");
    select(Person::name())
        .from::<Person>()
        .where_clause(&[Person::id().eq(100)])
        .execute_on(|sql| println!("{sql}"));
}

fn build_update() {
    info!("Building UPDATE from field references...");
    update::<Person>()
        .set(Person::name(), "John")
        .where_clause(&[Person::id().eq(100)])
        .execute_on(|sql| println!("{sql}"));
}
