use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ferrypay::Urgency;

/// Ferrypay - construction contract ledger for the shipyard
#[derive(Parser, Debug)]
#[command(name = "ferrypay")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'ferrypay login' to check your credentials.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Username for the acting user
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Password for the acting user
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Path to the ledger JSON file (overrides config)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify credentials and show the resolved user
    Login,

    /// Dashboard: financial summary and pending actions
    Status,

    /// Show or edit the contract record
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Record and confirm contract payments
    Payment {
        #[command(subcommand)]
        command: PaymentCommands,
    },

    /// Track material requests through their lifecycle
    Material {
        #[command(subcommand)]
        command: MaterialCommands,
    },

    /// Field diary entries with photo attachments
    Worklog {
        #[command(subcommand)]
        command: WorklogCommands,
    },

    /// Weekly payroll claims and settlement
    Payroll {
        #[command(subcommand)]
        command: PayrollCommands,
    },

    /// Consolidated report with executive summary
    Report,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Print the contract record
    Show,

    /// Update contract fields (employer only)
    Set {
        /// New contract title
        #[arg(long)]
        title: Option<String>,

        /// New total contract value (e.g. 1250000.00)
        #[arg(long)]
        total_value: Option<String>,

        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// New scope description
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PaymentCommands {
    /// Record a manual payment entry (employer only, starts PENDING)
    Add {
        /// Amount in contract currency
        #[arg(long)]
        amount: String,

        /// What the payment covers
        #[arg(long)]
        description: String,
    },

    /// Mark a pending payment as COMPLETED (employer only)
    Confirm {
        /// Payment id
        id: String,
    },

    /// List payments, newest first
    List,
}

#[derive(Subcommand, Debug)]
pub enum MaterialCommands {
    /// Request a material (contractor only, starts PENDING)
    Add {
        /// Material name
        #[arg(long)]
        item: String,

        /// Free-form quantity ("20 chapas", "40 kg")
        #[arg(long)]
        quantity: String,

        /// Urgency level
        #[arg(long, value_enum, default_value_t = Urgency::Medium)]
        urgency: Urgency,
    },

    /// Mark a request as ORDERED (employer only)
    Order {
        /// Request id
        id: String,
    },

    /// Mark an ordered request as RECEIVED (contractor only)
    Receive {
        /// Request id
        id: String,
    },

    /// List material requests, newest first
    List,
}

#[derive(Subcommand, Debug)]
pub enum WorklogCommands {
    /// Append a diary entry (contractor only)
    Add {
        /// Entry text (may be empty when photos are attached)
        #[arg(long, default_value = "")]
        content: String,

        /// Photo files to attach (repeatable)
        #[arg(long = "photo")]
        photos: Vec<PathBuf>,
    },

    /// List diary entries, newest first
    List,

    /// Generate a summary over recent entries
    Summarize,
}

#[derive(Subcommand, Debug)]
pub enum PayrollCommands {
    /// File a weekly payroll claim (contractor only)
    Add {
        /// Week-ending date (YYYY-MM-DD)
        #[arg(long)]
        week_ending: String,

        /// Claimed amount
        #[arg(long)]
        amount: String,

        /// Crew details ("3 welders")
        #[arg(long)]
        details: String,
    },

    /// Approve a pending claim (employer only)
    Approve {
        /// Claim id
        id: String,
    },

    /// Settle an approved claim, creating the payment (employer only)
    Pay {
        /// Claim id
        id: String,
    },

    /// Remove an unpaid claim
    Remove {
        /// Claim id
        id: String,
    },

    /// List payroll claims, newest first
    List,
}
