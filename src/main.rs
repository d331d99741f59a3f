use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use video_console::{load_catalog, Repl};

#[derive(Parser, Debug)]
#[command(name = "video-console")]
#[command(about = "In-memory video catalog with playback and playlists", long_about = None)]
struct Args {
    /// Path to the catalog file (JSON array of video records)
    #[arg(
        short = 'c',
        long,
        default_value = "~/.local/share/video-console/catalog.json"
    )]
    catalog: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path
    let catalog_path = shellexpand::tilde(&args.catalog);

    log::info!("Loading video catalog...");
    let catalog = load_catalog(PathBuf::from(catalog_path.as_ref()).as_path())?;

    let mut repl = Repl::new(catalog);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // One command per line; EOF or EXIT ends the session.
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match repl.execute(&line) {
            Some(output) => {
                if !output.is_empty() {
                    writeln!(stdout, "{}", output)?;
                }
            }
            None => break,
        }
    }

    log::info!("Session ended");
    Ok(())
}
