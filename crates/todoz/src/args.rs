use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use todozapp::filter::StatusFilter;

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(about = "Filterable, paginated todo list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fetch the collection from this URL instead of the built-in sample
    #[arg(long, global = true, value_name = "URL")]
    pub remote: Option<String>,

    /// Records per page
    #[arg(long, global = true, value_name = "N")]
    pub per_page: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of the (optionally filtered) collection
    #[command(alias = "ls")]
    List {
        /// Case-insensitive substring to search for
        #[arg(short, long)]
        search: Option<String>,

        /// Only records created on or after this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<NaiveDate>,

        /// Only records created on or before this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<NaiveDate>,

        /// Completion filter: all, pending, or completed
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Page to print
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Show every page number instead of the compressed row
        #[arg(long)]
        all_pages: bool,
    },

    /// Print whole-collection counters
    Stats,
}
