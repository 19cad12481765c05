//! Currency CLI commands

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::session::Session;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the current currency
    Show,

    /// Set the currency label (e.g. USD, EUR, INR)
    Set {
        /// Currency code; any text is accepted
        code: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command(session: &mut Session, cmd: CurrencyCommands) -> LedgerResult<()> {
    match cmd {
        CurrencyCommands::Show => match session.currency() {
            Some(code) => println!("Currency: {}", code),
            None => println!("Currency: Not set"),
        },

        CurrencyCommands::Set { code } => {
            session.set_currency(&code)?;
            match session.currency() {
                Some(code) => println!("Currency set to {}", code),
                None => println!("Currency cleared"),
            }
        }
    }

    Ok(())
}
