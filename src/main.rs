use clap::{Parser, Subcommand};
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use devnotes::config::NotesConfig;
use devnotes::mcp::tools::format_note_line;
use devnotes::mcp::McpServer;
use devnotes::store::NotesStore;
use devnotes::types::ReadOutcome;

/// Markdown notes for AI assistants, served over MCP.
#[derive(Parser)]
#[command(name = "devnotes", version, about = "Save, list, and read markdown notes over MCP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server on stdio (default)
    Serve,
    /// List saved notes
    List,
    /// Print a note by title
    Read {
        /// Note title
        title: String,
    },
}

#[tokio::main]
async fn main() {
    // stdout carries protocol messages, so logs always go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devnotes=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> devnotes::errors::Result<()> {
    let config = NotesConfig::from_home()?;
    let store = NotesStore::new(&config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let server = McpServer::new(store);
            info!(dir = %server.store().dir().display(), "Dev Notes MCP server running on stdio");
            server.run().await?;
        }
        Commands::List => {
            let notes = store.list_notes().await?;
            if notes.is_empty() {
                println!("No notes found in {}", store.dir().display());
            } else {
                for note in &notes {
                    println!("{}", format_note_line(note));
                }
            }
        }
        Commands::Read { title } => match store.read_note(&title).await? {
            ReadOutcome::Found(content) => print!("{}", content),
            ReadOutcome::NotFound { path } => {
                eprintln!("Note \"{}\" not found (looked for {})", title, path.display());
                process::exit(1);
            }
        },
    }
    Ok(())
}
