use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vellum", version, about = "Vellum CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in demo document.
    Demo {
        /// Document title
        #[arg(long, default_value = "Vellum demo")]
        title: String,
        /// Value for the html lang attribute
        #[arg(long)]
        lang: Option<String>,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo { title, lang, out } => {
            vellum_cli::demo_cmd(&title, lang.as_deref(), out.as_deref())?
        }
    }
    Ok(())
}
