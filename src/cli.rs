use std::path::PathBuf;
use structopt::StructOpt;
use chrono::NaiveDate;

use crate::interface::Layout;
use crate::model::parse_date;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Add a new task.
    Add {
        /// The task name.
        #[structopt()]
        name: String,

        /// The day the task is due (YYYY-MM-DD).
        #[structopt(short, long)]
        due: Option<String>,

        /// Optional longer description.
        #[structopt(short = "m", long)]
        description: Option<String>,
    },
    /// List tasks as overdue, outstanding and complete.
    List {
        /// How much of each task to show: compact or detailed.
        #[structopt(short, long, default_value = "compact")]
        layout: Layout,
    },
    /// Mark a task complete, or incomplete again.
    Toggle {
        /// The task id, or its first characters.
        #[structopt()]
        id: String,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "todue",
    about = "A minimalistic to-do list that knows what is overdue."
)]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Command,

    /// Use a different store file.
    #[structopt(parse(from_os_str), short, long, env = "TODUE_STORE")]
    pub store_file: Option<PathBuf>,

    /// Categorize as if today were this day (YYYY-MM-DD).
    #[structopt(long, env = "TODUE_TODAY", parse(try_from_str = parse_date))]
    pub today: Option<NaiveDate>,
}
