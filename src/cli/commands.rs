use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tf", about = concat!("[*] tarefa v", env!("CARGO_PKG_VERSION"), " - your tasks, one JSON file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the selected list
    List(ListArgs),
    /// Add an item to the selected list
    Add(AddArgs),
    /// Toggle an item's completed flag
    Toggle(ItemIdArg),
    /// Mark an open item done
    Done(ItemIdArg),
    /// Mark a done item open again
    Undone(ItemIdArg),
    /// Delete an item from the selected list
    Rm(ItemIdArg),
    /// Show all lists
    Lists,
    /// Create a new list and select it
    NewList(NewListArgs),
    /// Delete a list
    RmList(RmListArgs),
    /// Select a list
    Select(ListIdArg),
    /// Change a view-option flag
    Set(SetArgs),
    /// Export the whole document to a JSON backup file
    Export(ExportArgs),
    /// Replace the whole document from a JSON backup file
    Import(ImportArgs),
    /// Show completion statistics
    Stats,
}

// ---------------------------------------------------------------------------
// Command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Show every list, not just the selected one
    #[arg(long)]
    pub all_lists: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text
    pub text: String,
}

#[derive(Args)]
pub struct ItemIdArg {
    /// Item ID
    pub id: String,
}

#[derive(Args)]
pub struct ListIdArg {
    /// List ID
    pub id: String,
}

#[derive(Args)]
pub struct NewListArgs {
    /// List name
    pub name: String,
}

#[derive(Args)]
pub struct RmListArgs {
    /// List ID
    pub id: String,
    /// Skip confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Setting {
    /// Show completed items in their own section at the end
    MoveCompletedToEnd,
    /// Hide completed items
    HideCompleted,
}

#[derive(Args)]
pub struct SetArgs {
    /// Which flag to change
    #[arg(value_enum)]
    pub setting: Setting,
    /// New value (true or false)
    #[arg(action = clap::ArgAction::Set)]
    pub value: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output path (default: ./tarefas-<date>.json)
    pub path: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to import
    pub path: String,
}
