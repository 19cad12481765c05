//! Category CLI commands
//!
//! Implements CLI commands for the category vocabulary.

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::session::Session;
use crate::storage::AddCategory;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories (alphabetical)
    List,

    /// Create a new category
    #[command(alias = "create")]
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(session: &mut Session, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            for name in session.vocabulary().sorted() {
                println!("{}", name);
            }
        }

        CategoryCommands::Add { name } => match session.create_category(&name)? {
            AddCategory::Added(name) => println!("Category '{}' added!", name),
            AddCategory::AlreadyExists(name) => println!("Category '{}' already exists!", name),
        },
    }

    Ok(())
}
