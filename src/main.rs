mod concordance;
mod error;
mod lookup;
mod names;
mod pipeline;
mod scrape;
mod segment;
mod snapshot;
mod summary;
mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::scrape::Source;

#[derive(Parser)]
#[command(name = "kjv_concordance", about = "KJV Bible scraper and concordance builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// How to reach the source document. Exactly two modes, picked explicitly.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceMode {
    File,
    Url,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the source document and write the three snapshot files
    Build {
        /// Where to read the markup from
        #[arg(long, value_enum, default_value = "file")]
        source: SourceMode,
        /// Path to a local copy of the document (source = file)
        #[arg(long, default_value = "bible.html")]
        path: PathBuf,
        /// Document URL (source = url)
        #[arg(long, default_value = scrape::DEFAULT_URL)]
        url: String,
        /// Directory to write the snapshot files into
        #[arg(short = 'o', long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Look up one verse from the persisted snapshots
    Verse {
        book: String,
        chapter: u32,
        verse: u32,
        /// Directory holding the snapshot files
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
    /// List every verse a word occurs in
    Word {
        word: String,
        /// Max occurrences to display (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Directory holding the snapshot files
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
    /// Snapshot statistics
    Stats {
        /// Directory holding the snapshot files
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            source,
            path,
            url,
            out_dir,
        } => {
            let source = match source {
                SourceMode::File => Source::File(path),
                SourceMode::Url => Source::Url(url),
            };
            let output = pipeline::run(&source)?;
            output.write_snapshots(&out_dir)?;
            println!(
                "Scraped {} books, {} verses, {} distinct words.",
                output.bible.len(),
                output.verse_total(),
                output.concordance.len()
            );
            println!("Snapshots written to {}", out_dir.display());
            Ok(())
        }
        Commands::Verse {
            book,
            chapter,
            verse,
            dir,
        } => {
            let data = lookup::BibleData::load(&dir)?;
            match data.verse(&book, chapter, verse) {
                Some(text) => println!("{} {}:{}  {}", book, chapter, verse, text),
                None => println!("Not found: {} {}:{}", book, chapter, verse),
            }
            Ok(())
        }
        Commands::Word { word, limit, dir } => {
            let data = lookup::BibleData::load(&dir)?;
            match data.word(&word) {
                Some(occurrences) => {
                    println!(
                        "\"{}\": {} occurrences.",
                        word.trim().to_uppercase(),
                        occurrences.len()
                    );
                    let shown = limit.unwrap_or(occurrences.len());
                    for occurrence in occurrences.iter().take(shown) {
                        println!("  {}", occurrence);
                    }
                    if shown < occurrences.len() {
                        println!("  ... {} more", occurrences.len() - shown);
                    }
                }
                None => println!("Not found. Try again."),
            }
            Ok(())
        }
        Commands::Stats { dir } => {
            let data = lookup::BibleData::load(&dir)?;
            let (old, new) = data.testaments();
            println!("Books:          {}", data.bible.len());
            println!("  Old Testament: {}", old.len());
            println!("  New Testament: {}", new.len());
            println!(
                "Verses:         {}",
                data.bible.values().map(|v| v.len()).sum::<usize>()
            );
            println!("Distinct words: {}", data.concordance.len());

            println!("\n{:<16} | {:>8} | {:>7}", "Book", "Chapters", "Verses");
            println!("{}", "-".repeat(37));
            for (book, verses) in &data.bible {
                let chapters = data.chapter_count(book).unwrap_or(0);
                println!("{:<16} | {:>8} | {:>7}", book, chapters, verses.len());
            }
            Ok(())
        }
    }
}
