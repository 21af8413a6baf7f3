//! shelf - a file manager engine for mobile-grade storage trees.
//!
//! Usage:
//!   shelf ls [PATH]              List a directory
//!   shelf search QUERY [PATH]    Find entries by name
//!   shelf media [PATH]           Aggregate images/videos into albums
//!   shelf recent                 Most recently modified files
//!   shelf cp SOURCES... DEST     Copy into a directory
//!   shelf mv SOURCES... DEST     Move into a directory
//!   shelf rm TARGETS...          Delete (or soft-delete with --trash)
//!   shelf zip PATH               Compress to a .zip
//!   shelf unzip ARCHIVE          Extract a .zip
//!   shelf trash ...              Inspect and manage the trash
//!   shelf --help                 Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Context, Result};

use shelf_core::{sort_entries, Entry, SortKey, SortOrder, SortSpec, StorageLayout};
use shelf_ops::OperationOutcome;
use shelf_scan::{collect_media, list_directory, recent_files, search, MediaSelection};
use shelf_trash::TrashBin;

#[derive(Parser)]
#[command(
    name = "shelf",
    version,
    about = "A file manager engine for mobile-grade storage trees",
    long_about = "shelf drives the file-operation engine from the command line: \
                  listings, search, media aggregation, copy/move/delete with \
                  collision-safe naming, zip archives, and a restorable trash."
)]
struct Cli {
    /// Storage root for trash, recents, and quick-access paths
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List a directory
    Ls {
        /// Directory to list
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Include hidden entries
        #[arg(short = 'H', long)]
        hidden: bool,

        /// Sort key
        #[arg(short, long, default_value = "name")]
        sort: SortKeyArg,

        /// Sort direction
        #[arg(short, long, default_value = "asc")]
        order: SortOrderArg,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find entries whose name contains a query
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Root to search under
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only examine the root's immediate children
        #[arg(long)]
        no_recursive: bool,
    },

    /// Aggregate media files into albums by parent directory
    Media {
        /// Root to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// What to collect
        #[arg(short, long, default_value = "all")]
        kind: MediaKindArg,
    },

    /// Most recently modified files across the well-known directories
    Recent {
        /// How many files to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Create a directory
    Mkdir {
        /// Parent directory
        parent: PathBuf,
        /// Name of the new directory
        name: String,
    },

    /// Create an empty file
    Touch {
        /// Parent directory
        parent: PathBuf,
        /// Name of the new file
        name: String,
    },

    /// Rename a file or directory in place
    Rename {
        /// Node to rename
        path: PathBuf,
        /// New name (same directory)
        new_name: String,
    },

    /// Copy into a directory (last argument is the destination)
    Cp {
        /// Sources followed by the destination directory
        #[arg(required = true, num_args = 2..)]
        paths: Vec<PathBuf>,
    },

    /// Move into a directory (last argument is the destination)
    Mv {
        /// Sources followed by the destination directory
        #[arg(required = true, num_args = 2..)]
        paths: Vec<PathBuf>,
    },

    /// Delete files or directories
    Rm {
        /// Targets to delete
        #[arg(required = true)]
        targets: Vec<PathBuf>,

        /// Soft-delete into the trash instead of unlinking
        #[arg(long)]
        trash: bool,
    },

    /// Compress a file or directory into a .zip
    Zip {
        /// File or directory to compress
        path: PathBuf,

        /// Where the archive lands (defaults to the source's parent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract a .zip archive
    Unzip {
        /// Archive to extract
        archive: PathBuf,

        /// Where the output directory lands (defaults to the archive's parent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect and manage the trash
    Trash {
        #[command(subcommand)]
        command: TrashCommand,
    },

    /// Show the quick-access locations under the storage root
    Roots,
}

#[derive(Subcommand)]
enum TrashCommand {
    /// List trashed items with their original names
    List {
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Restore items to where they came from
    Restore {
        /// Stored paths (or names under the trash root)
        #[arg(required = true)]
        items: Vec<PathBuf>,
    },

    /// Permanently delete trashed items
    Purge {
        /// Stored paths (or names under the trash root)
        #[arg(required = true)]
        items: Vec<PathBuf>,
    },

    /// Permanently delete everything in the trash
    Empty,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum SortKeyArg {
    #[default]
    Name,
    Date,
    Size,
    Type,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum SortOrderArg {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum MediaKindArg {
    Images,
    Videos,
    #[default]
    All,
}

impl From<SortKeyArg> for SortKey {
    fn from(key: SortKeyArg) -> Self {
        match key {
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::Date => SortKey::Date,
            SortKeyArg::Size => SortKey::Size,
            SortKeyArg::Type => SortKey::Type,
        }
    }
}

impl From<SortOrderArg> for SortOrder {
    fn from(order: SortOrderArg) -> Self {
        match order {
            SortOrderArg::Asc => SortOrder::Asc,
            SortOrderArg::Desc => SortOrder::Desc,
        }
    }
}

impl From<MediaKindArg> for MediaSelection {
    fn from(kind: MediaKindArg) -> Self {
        match kind {
            MediaKindArg::Images => MediaSelection::Images,
            MediaKindArg::Videos => MediaSelection::Videos,
            MediaKindArg::All => MediaSelection::ImagesAndVideos,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let layout = StorageLayout::new(cli.root.canonicalize().context("Invalid storage root")?);

    match cli.command {
        Command::Ls {
            path,
            hidden,
            sort,
            order,
            json,
        } => {
            let entries = sort_entries(
                list_directory(&path, hidden),
                SortSpec::new(sort.into(), order.into()),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_entries(&entries);
            }
        }
        Command::Search {
            query,
            path,
            no_recursive,
        } => {
            let hits = search(&path, &query, !no_recursive);
            print_entries(&hits);
            eprintln!("{} match(es)", hits.len());
        }
        Command::Media { path, kind } => {
            let groups = collect_media(&shelf_core::ScanOptions::new(path), kind.into());
            for group in &groups {
                println!("{} ({})", group.name, group.path.display());
                for entry in &group.entries {
                    println!("  {:<40} {:>10}", entry.name, format_size(entry.size));
                }
            }
            eprintln!("{} album(s)", groups.len());
        }
        Command::Recent { limit } => {
            print_entries(&recent_files(&layout, limit));
        }
        Command::Mkdir { parent, name } => {
            let entry = shelf_ops::create_folder(&parent, &name).await?;
            println!("Created {}", entry.path.display());
        }
        Command::Touch { parent, name } => {
            let entry = shelf_ops::create_file(&parent, &name).await?;
            println!("Created {}", entry.path.display());
        }
        Command::Rename { path, new_name } => {
            let entry = shelf_ops::rename(&path, &new_name).await?;
            println!("Renamed to {}", entry.path.display());
        }
        Command::Cp { paths } => {
            let (sources, dest) = split_sources(paths)?;
            report(shelf_ops::copy(sources, dest).await)?;
        }
        Command::Mv { paths } => {
            let (sources, dest) = split_sources(paths)?;
            report(shelf_ops::move_items(sources, dest).await)?;
        }
        Command::Rm { targets, trash } => {
            if trash {
                let bin = TrashBin::for_layout(&layout);
                let mut trashed = 0;
                let requested = targets.len();
                for target in &targets {
                    if bin.move_to_trash(target).await {
                        trashed += 1;
                    }
                }
                println!("Trashed {trashed} of {requested} items");
                if trashed < requested {
                    std::process::exit(1);
                }
            } else {
                report(shelf_ops::delete(targets).await)?;
            }
        }
        Command::Zip { path, output } => {
            let output = output
                .or_else(|| path.parent().map(Path::to_path_buf))
                .ok_or_else(|| eyre!("No output directory"))?;
            let archive = shelf_ops::compress(&path, &output).await?;
            println!("Compressed to {}", archive.display());
        }
        Command::Unzip { archive, output } => {
            let output = output
                .or_else(|| archive.parent().map(Path::to_path_buf))
                .ok_or_else(|| eyre!("No output directory"))?;
            let extracted = shelf_ops::decompress(&archive, &output).await?;
            println!("Extracted to {}", extracted.display());
        }
        Command::Trash { command } => {
            let bin = TrashBin::for_layout(&layout);
            run_trash(&bin, command).await?;
        }
        Command::Roots => {
            for quick in layout.quick_access() {
                println!("{:<18} {}", quick.name, quick.path.display());
            }
        }
    }

    Ok(())
}

async fn run_trash(bin: &TrashBin, command: TrashCommand) -> Result<()> {
    match command {
        TrashCommand::List { json } => {
            let entries = bin.list_trash().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    println!(
                        "{:<40} {:>10}  {}  (stored as {})",
                        entry.name,
                        format_size(entry.size),
                        format_time(entry.modified),
                        entry.path.display()
                    );
                }
                eprintln!("{} item(s) in trash", entries.len());
            }
        }
        TrashCommand::Restore { items } => {
            let mut restored = 0;
            let requested = items.len();
            for item in items {
                if bin.restore_from_trash(&in_trash(bin, item)).await {
                    restored += 1;
                }
            }
            println!("Restored {restored} of {requested} items");
            if restored < requested {
                std::process::exit(1);
            }
        }
        TrashCommand::Purge { items } => {
            let targets = items.into_iter().map(|item| in_trash(bin, item)).collect();
            report(bin.permanently_delete(targets).await)?;
        }
        TrashCommand::Empty => {
            if bin.empty_trash().await {
                println!("Trash emptied");
            } else {
                return Err(eyre!("Some items could not be removed"));
            }
        }
    }
    Ok(())
}

/// Accept either a full stored path or a name relative to the trash root.
fn in_trash(bin: &TrashBin, item: PathBuf) -> PathBuf {
    if item.is_absolute() {
        item
    } else {
        bin.trash_root().join(item)
    }
}

/// Split a `SOURCES... DEST` positional list.
fn split_sources(mut paths: Vec<PathBuf>) -> Result<(Vec<PathBuf>, PathBuf)> {
    let dest = paths.pop().ok_or_else(|| eyre!("Missing destination"))?;
    Ok((paths, dest))
}

/// Print a batch outcome; exit nonzero unless everything succeeded.
fn report(outcome: OperationOutcome) -> Result<()> {
    println!("{}", outcome.summary());
    for error in &outcome.errors {
        eprintln!("  {}: {}", error.path.display(), error.message);
    }
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_entries(entries: &[Entry]) {
    for entry in entries {
        let marker = if entry.is_directory { "/" } else { "" };
        let kind = entry
            .kind
            .map(|k| k.to_string())
            .unwrap_or_else(|| "dir".to_string());
        println!(
            "{:<40} {:>10}  {:<8}  {}",
            format!("{}{}", entry.name, marker),
            format_size(entry.size),
            kind,
            format_time(entry.modified)
        );
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Format a modification time as local date and time.
fn format_time(time: std::time::SystemTime) -> String {
    chrono::DateTime::<chrono::Local>::from(time)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
