//! Ferrypay CLI - construction contract ledger
//!
//! Usage: ferrypay --user <USERNAME> --password <PASSWORD> <COMMAND>
//!
//! Commands:
//!   status    Dashboard with financial summary and pending actions
//!   project   Show or edit the contract record
//!   payment   Record and confirm payments
//!   material  Track material requests
//!   worklog   Field diary entries
//!   payroll   Weekly payroll claims and settlement
//!   report    Consolidated report with executive summary

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use ferrypay::config::Config;

use cli::{
    Cli, Commands, MaterialCommands, PaymentCommands, PayrollCommands, ProjectCommands,
    WorklogCommands,
};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    let json = cli.json || config.output.json;
    let ledger_path = cli.ledger.unwrap_or_else(|| config.ledger_path());

    if let Commands::Login = cli.command {
        return commands::login::cmd_login(cli.user.as_deref(), cli.password.as_deref(), json);
    }

    let mut session = Session::open(cli.user.as_deref(), cli.password.as_deref(), ledger_path)?;

    match cli.command {
        Commands::Login => unreachable!("handled above"),
        Commands::Status => commands::status::cmd_status(&session, json),
        Commands::Project { command } => match command {
            ProjectCommands::Show => commands::project::cmd_show(&session, json),
            ProjectCommands::Set {
                title,
                total_value,
                start_date,
                description,
            } => commands::project::cmd_set(
                &mut session,
                title,
                total_value,
                start_date,
                description,
                json,
            ),
        },
        Commands::Payment { command } => match command {
            PaymentCommands::Add {
                amount,
                description,
            } => commands::payment::cmd_add(&mut session, &amount, &description, json),
            PaymentCommands::Confirm { id } => {
                commands::payment::cmd_confirm(&mut session, &id, json)
            }
            PaymentCommands::List => commands::payment::cmd_list(&session, json),
        },
        Commands::Material { command } => match command {
            MaterialCommands::Add {
                item,
                quantity,
                urgency,
            } => commands::material::cmd_add(&mut session, &item, &quantity, urgency, json),
            MaterialCommands::Order { id } => commands::material::cmd_order(&mut session, &id, json),
            MaterialCommands::Receive { id } => {
                commands::material::cmd_receive(&mut session, &id, json)
            }
            MaterialCommands::List => commands::material::cmd_list(&session, json),
        },
        Commands::Worklog { command } => match command {
            WorklogCommands::Add { content, photos } => {
                commands::worklog::cmd_add(&mut session, &content, &photos, json)
            }
            WorklogCommands::List => commands::worklog::cmd_list(&session, json),
            WorklogCommands::Summarize => commands::worklog::cmd_summarize(&session, json),
        },
        Commands::Payroll { command } => match command {
            PayrollCommands::Add {
                week_ending,
                amount,
                details,
            } => commands::payroll::cmd_add(&mut session, &week_ending, &amount, &details, json),
            PayrollCommands::Approve { id } => {
                commands::payroll::cmd_approve(&mut session, &id, json)
            }
            PayrollCommands::Pay { id } => commands::payroll::cmd_pay(&mut session, &id, json),
            PayrollCommands::Remove { id } => {
                commands::payroll::cmd_remove(&mut session, &id, json)
            }
            PayrollCommands::List => commands::payroll::cmd_list(&session, json),
        },
        Commands::Report => commands::report::cmd_report(&session, json),
    }
}
