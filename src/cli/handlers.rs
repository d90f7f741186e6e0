use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::{self, ListInfoJson, ListViewJson, StatsJson};
use crate::io::lock::FileLock;
use crate::io::store::Store;
use crate::model::Document;
use crate::ops::doc_ops::{self, ConfirmPrompt};
use crate::ops::view::{self, Row};
use crate::ops::backup;

/// Confirmation port backed by a stdin prompt.
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

/// Confirmation port for `--yes`.
struct AssumeYes;

impl ConfirmPrompt for AssumeYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let store = Store::open(&data_dir);

    match cli.command {
        None => Ok(()), // no subcommand is handled in main (TUI)
        Some(cmd) => match cmd {
            // Read commands
            Commands::List(args) => cmd_list(&store, args, json),
            Commands::Lists => cmd_lists(&store, json),
            Commands::Stats => cmd_stats(&store, json),

            // Write commands
            Commands::Add(args) => cmd_add(&store, &data_dir, args),
            Commands::Toggle(args) => cmd_toggle(&store, &data_dir, args),
            Commands::Done(args) => cmd_set_completed(&store, &data_dir, args, true),
            Commands::Undone(args) => cmd_set_completed(&store, &data_dir, args, false),
            Commands::Rm(args) => cmd_rm(&store, &data_dir, args),
            Commands::NewList(args) => cmd_new_list(&store, &data_dir, args),
            Commands::RmList(args) => cmd_rm_list(&store, &data_dir, args),
            Commands::Select(args) => cmd_select(&store, &data_dir, args),
            Commands::Set(args) => cmd_set(&store, &data_dir, args),

            // Backup
            Commands::Export(args) => cmd_export(&store, args),
            Commands::Import(args) => cmd_import(&store, &data_dir, args),
        },
    }
}

/// Resolve the data directory: `-C` override or the default location.
pub fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) => PathBuf::from(dir),
        None => Store::default_data_dir(),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &Store, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = store.load();

    if args.all_lists {
        for (i, list) in doc.lists.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_list(&doc, list, json)?;
        }
        return Ok(());
    }

    match doc.selected_list() {
        Some(list) => print_list(&doc, list, json)?,
        None => eprintln!("no list selected"),
    }
    Ok(())
}

fn print_list(
    doc: &Document,
    list: &crate::model::TodoList,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = view::list_rows(list, doc.move_completed_to_end, doc.hide_completed);

    if json {
        let items = rows
            .iter()
            .filter_map(|r| match r {
                Row::Item(item) => Some(output::item_to_json(item)),
                _ => None,
            })
            .collect();
        let out = ListViewJson {
            list_id: list.id.clone(),
            list_name: list.name.clone(),
            move_completed_to_end: doc.move_completed_to_end,
            hide_completed: doc.hide_completed,
            items,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} ({}/{} done)",
        list.name,
        list.completed_count(),
        list.items.len()
    );
    if list.items.is_empty() {
        println!("  no tasks yet");
        return Ok(());
    }
    for line in output::render_rows_for(list, doc.move_completed_to_end, doc.hide_completed) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_lists(store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = store.load();

    if json {
        let out: Vec<ListInfoJson> = doc
            .lists
            .iter()
            .map(|l| output::list_info_to_json(&doc, l))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for list in &doc.lists {
        println!("{}", output::render_list_summary(&doc, list));
    }
    Ok(())
}

fn cmd_stats(store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = store.load();
    let done: usize = doc.lists.iter().map(|l| l.completed_count()).sum();
    let total = doc.item_count();

    if json {
        let out = StatsJson {
            lists: doc
                .lists
                .iter()
                .map(|l| output::list_info_to_json(&doc, l))
                .collect(),
            done,
            total,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for list in &doc.lists {
        println!(
            "{}: {}/{} done",
            list.name,
            list.completed_count(),
            list.items.len()
        );
    }
    println!("total: {}/{} done", done, total);
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &Store, data_dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    match doc_ops::add_item(&mut doc, &args.text) {
        Some(id) => {
            store.save_quiet(&doc);
            println!("{}", id);
        }
        None => eprintln!("nothing added: empty text or no list selected"),
    }
    Ok(())
}

fn cmd_toggle(
    store: &Store,
    data_dir: &Path,
    args: ItemIdArg,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    if doc_ops::toggle_item(&mut doc, &args.id) {
        store.save_quiet(&doc);
        println!("{}", args.id);
    } else {
        eprintln!("no such item in the selected list: {}", args.id);
    }
    Ok(())
}

fn cmd_set_completed(
    store: &Store,
    data_dir: &Path,
    args: ItemIdArg,
    want: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    let current = doc
        .selected_list()
        .and_then(|l| l.items.iter().find(|i| i.id == args.id))
        .map(|i| i.completed);

    match current {
        None => eprintln!("no such item in the selected list: {}", args.id),
        Some(c) if c == want => {} // already there
        Some(_) => {
            doc_ops::toggle_item(&mut doc, &args.id);
            store.save_quiet(&doc);
            println!("{}", args.id);
        }
    }
    Ok(())
}

fn cmd_rm(
    store: &Store,
    data_dir: &Path,
    args: ItemIdArg,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    if doc_ops::delete_item(&mut doc, &args.id) {
        store.save_quiet(&doc);
        println!("{}", args.id);
    } else {
        eprintln!("no such item in the selected list: {}", args.id);
    }
    Ok(())
}

fn cmd_new_list(
    store: &Store,
    data_dir: &Path,
    args: NewListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    match doc_ops::add_list(&mut doc, &args.name) {
        Some(id) => {
            store.save_quiet(&doc);
            println!("{}", id);
        }
        None => eprintln!("nothing created: empty list name"),
    }
    Ok(())
}

fn cmd_rm_list(
    store: &Store,
    data_dir: &Path,
    args: RmListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    let confirm: &dyn ConfirmPrompt = if args.yes { &AssumeYes } else { &StdinConfirm };
    if doc_ops::delete_list(&mut doc, &args.id, confirm) {
        store.save_quiet(&doc);
        println!("{}", args.id);
    }
    Ok(())
}

fn cmd_select(
    store: &Store,
    data_dir: &Path,
    args: ListIdArg,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    if doc.find_list(&args.id).is_none() {
        eprintln!("no such list: {}", args.id);
        return Ok(());
    }
    if doc_ops::set_selected_list(&mut doc, &args.id) {
        store.save_quiet(&doc);
    }
    println!("{}", args.id);
    Ok(())
}

fn cmd_set(store: &Store, data_dir: &Path, args: SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut doc = store.load();

    let changed = match args.setting {
        Setting::MoveCompletedToEnd => doc_ops::set_move_completed_to_end(&mut doc, args.value),
        Setting::HideCompleted => doc_ops::set_hide_completed(&mut doc, args.value),
    };
    if changed {
        store.save_quiet(&doc);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Backup
// ---------------------------------------------------------------------------

fn cmd_export(store: &Store, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = store.load();
    let json = backup::export_document(&doc)?;

    let path = match args.path {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(backup::export_file_name(
            chrono::Local::now().date_naive(),
        )),
    };
    fs::write(&path, json)?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_import(
    store: &Store,
    data_dir: &Path,
    args: ImportArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&args.path)
        .map_err(|e| format!("could not read {}: {}", args.path, e))?;

    // All-or-nothing: a parse failure leaves the current document alone.
    let doc = backup::import_document(&content)?;

    let _lock = FileLock::acquire_default(data_dir)?;
    store.save_quiet(&doc);
    println!(
        "imported {} lists ({} items)",
        doc.lists.len(),
        doc.item_count()
    );
    Ok(())
}
