mod cmd_fetch;
mod cmd_random;
mod cmd_show;
mod cmd_sources;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "versicle")]
#[command(about = "Fetch the standard works and print verses from them")]
struct Cli {
    /// Defaults to `random` when no subcommand is given
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one uniformly random verse
    Random,
    /// Look up a verse or chapter by name and number
    Show {
        /// Corpus slug (e.g. book-of-mormon, new-testament)
        #[arg(short, long)]
        corpus: String,

        /// Book name within the corpus (e.g. "1 Nephi") — omit for
        /// single-book corpora
        #[arg(short, long)]
        book: Option<String>,

        /// Chapter or section number
        #[arg(long)]
        chapter: u32,

        /// Verse number — omit to print the whole chapter
        #[arg(long)]
        verse: Option<u32>,
    },
    /// List the five corpus sources and their cache status
    Sources {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download any corpora missing from the local cache
    Fetch {
        /// Re-download even when a cached copy exists
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Random) => cmd_random::run(),
        Some(Commands::Show {
            corpus,
            book,
            chapter,
            verse,
        }) => cmd_show::run(&corpus, book.as_deref(), chapter, verse),
        Some(Commands::Sources { json }) => cmd_sources::run(json),
        Some(Commands::Fetch { force }) => cmd_fetch::run(force),
    }
}
