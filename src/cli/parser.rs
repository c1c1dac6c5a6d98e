use clap::{Parser, Subcommand};

/// Command-line interface definition for kintai
/// CLI application to track attendance sessions with a JSON store
#[derive(Parser)]
#[command(
    name = "kintai",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracking CLI: clock-in/out, breaks, task logs and payroll closing-day splits (JST)",
    long_about = None
)]
pub struct Cli {
    /// Override session store path (useful for tests or custom stores)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Act as this user id (defaults to the configured user)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Evaluate the command at this RFC3339 instant instead of the wall clock
    #[arg(global = true, long = "at", value_name = "TIMESTAMP")]
    pub at: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the session store
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration and session store health")]
        check: bool,
    },

    /// Clock in (start a new session)
    In,

    /// Start a break, or end it with --end
    Break {
        #[arg(long = "end", help = "End the break in progress")]
        end: bool,
    },

    /// Clock out with the day's task lines
    Out {
        /// Task lines describing the work performed (at least one required)
        #[arg(long = "task", short = 't', value_name = "TASK")]
        tasks: Vec<String>,
    },

    /// Save task lines on the open session, or on a specific session
    Tasks {
        #[arg(long = "task", short = 't', value_name = "TASK")]
        tasks: Vec<String>,

        /// Target a specific session id instead of the open one
        #[arg(long = "session", value_name = "ID")]
        session: Option<String>,
    },

    /// Supervisor correction of a session's start/end (audited)
    Correct {
        /// Session id to correct
        session: String,

        #[arg(long = "start", value_name = "TIMESTAMP", help = "Corrected start (RFC3339)")]
        start: String,

        #[arg(long = "end", value_name = "TIMESTAMP", help = "Corrected end (RFC3339)")]
        end: Option<String>,

        #[arg(long = "message", short = 'm', help = "Mandatory justification")]
        message: String,

        #[arg(long = "actor", help = "Id of the supervisor issuing the correction")]
        actor: String,

        #[arg(long = "role", help = "Actor role: reviewer or admin")]
        role: String,
    },

    /// Show the current attendance status
    Status,

    /// List sessions of a closing period
    List {
        /// Closing period label (YYYY-MM of the month the period closes in)
        #[arg(long, short, value_name = "YYYY-MM")]
        period: Option<String>,

        /// List every stored session regardless of period
        #[arg(long)]
        all: bool,
    },

    /// Report anomalies: open shifts, open breaks, recent forced splits
    Anomalies,
}
