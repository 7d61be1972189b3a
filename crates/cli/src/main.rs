use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use kjv_corpus::{resolve_book, Resolution, Workspace};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kjv")]
#[command(about = "Look up books in a local KJV JSON corpus", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Corpus directory searched before the current directory (overrides KJV_ROOT)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print canonical book names from Books.json
    Books,

    /// Print the JSON for one book
    Book(BookArgs),

    /// Print chapter counts from bible_book_chapters.json
    Chapters,

    /// Show which file a book name resolves to, without loading it
    Resolve(BookArgs),
}

#[derive(Args)]
struct BookArgs {
    /// Book title or filename, e.g. "1 John", "genesis", "1John.json"
    book: String,
}

#[derive(Serialize)]
struct ResolveOutput {
    #[serde(flatten)]
    resolution: Resolution,
    path: PathBuf,
    exists: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let workspace = Workspace::discover_with(cli.root);

    match cli.command {
        Commands::Books => {
            let books = workspace.list_books().context("Failed to list books")?;
            print_json(&books)
        }
        Commands::Book(args) => {
            let value = workspace
                .load_book(&args.book)
                .with_context(|| format!("Failed to load book '{}'", args.book))?;
            print_json(&value)
        }
        Commands::Chapters => {
            let value = workspace
                .load_chapter_counts()
                .context("Failed to load chapter counts")?;
            print_json(&value)
        }
        Commands::Resolve(args) => {
            let resolution = resolve_book(&workspace, &args.book);
            let path = workspace.resolve(&resolution.filename);
            let exists = path.exists();
            print_json(&ResolveOutput {
                resolution,
                path,
                exists,
            })
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to write JSON")?;
    writeln!(stdout)?;
    Ok(())
}
