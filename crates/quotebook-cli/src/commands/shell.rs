//! Interactive shell
//!
//! Reads commands from stdin while the sync timer ticks in the same task.
//! Commands and sync passes never overlap: whichever is ready first runs to
//! completion before the other is polled again.

use quotebook_core::book::messages;
use quotebook_core::storage::KeyValueStore;
use quotebook_core::transfer::DEFAULT_EXPORT_FILE;
use quotebook_core::{CategoryFilter, ImportMode, QuoteBook};
use quotebook_remote::{sync_interval, sync_tick, PostsClient};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{ConsoleNotifier, Context};

const HELP: &str = "\
Commands:
  show                      Show a random quote
  add <text> | <category>   Add a quote
  filter <category|all>     Set the category filter
  categories                List categories
  list                      List quotes in the active category
  export [file]             Export quotes to JSON (default quotes.json)
  import <file> [--replace] Import quotes from JSON
  sync                      Sync with the server now
  help                      Show this help
  quit                      Leave the shell";

/// A parsed shell line
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Show,
    Add { text: String, category: String },
    Filter(CategoryFilter),
    Categories,
    List,
    Export(PathBuf),
    Import { file: PathBuf, mode: ImportMode },
    Sync,
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match word {
            "" => Self::Empty,
            "show" | "new" => Self::Show,
            "add" => {
                let (text, category) = rest.split_once('|').unwrap_or((rest, ""));
                Self::Add {
                    text: text.trim().to_string(),
                    category: category.trim().to_string(),
                }
            }
            "filter" if !rest.is_empty() => Self::Filter(CategoryFilter::from(rest)),
            "filter" => return Err("Usage: filter <category|all>".to_string()),
            "categories" => Self::Categories,
            "list" => Self::List,
            "export" if rest.is_empty() => Self::Export(PathBuf::from(DEFAULT_EXPORT_FILE)),
            "export" => Self::Export(PathBuf::from(rest)),
            "import" => {
                let (file, mode) = match rest.strip_suffix("--replace") {
                    Some(file) => (file.trim(), ImportMode::Replace),
                    None => (rest, ImportMode::Append),
                };
                if file.is_empty() {
                    return Err("Usage: import <file> [--replace]".to_string());
                }
                Self::Import {
                    file: PathBuf::from(file),
                    mode,
                }
            }
            "sync" => Self::Sync,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command: {other} (try 'help')")),
        };

        Ok(command)
    }
}

pub fn execute(ctx: &Context) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(ctx))
}

async fn run(ctx: &Context) -> anyhow::Result<()> {
    let client = PostsClient::from_config(&ctx.config);
    let mut notifier = ConsoleNotifier;
    let mut book = ctx.book()?;
    book.restore_display()?;

    println!("{}", book.display());
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticks = sync_interval(ctx.config.sync_interval());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match ShellCommand::parse(&line) {
                    Ok(ShellCommand::Quit) => break,
                    Ok(ShellCommand::Sync) => {
                        if let Some(report) = sync_tick(&mut book, &client, &mut notifier).await {
                            super::sync::print_report(&report);
                        }
                    }
                    Ok(command) => {
                        if let Err(e) = apply(&mut book, command) {
                            eprintln!("{e}");
                        }
                    }
                    Err(msg) => eprintln!("{msg}"),
                }
            }
            _ = ticks.tick() => {
                log::debug!("Periodic sync tick");
                sync_tick(&mut book, &client, &mut notifier).await;
            }
        }
    }

    Ok(())
}

fn apply<S: KeyValueStore>(book: &mut QuoteBook<S>, command: ShellCommand) -> anyhow::Result<()> {
    match command {
        ShellCommand::Show => {
            let shown = book.show_random(&mut rand::thread_rng());
            println!("{}", book.display());
            if let Err(e) = shown {
                log::debug!("Nothing to show: {e}");
            }
        }
        ShellCommand::Add { text, category } => {
            book.add_quote(&text, &category)?;
            println!("{}", messages::QUOTE_ADDED);
        }
        ShellCommand::Filter(filter) => {
            book.set_filter(filter)?;
            println!("{}", book.display());
        }
        ShellCommand::Categories => {
            println!("all");
            for category in book.categories() {
                println!("{category}");
            }
        }
        ShellCommand::List => {
            for quote in book.filtered() {
                println!("  {quote}");
            }
        }
        ShellCommand::Export(path) => {
            book.export_to_file(&path)?;
            println!("Exported {} quotes to {}", book.quotes().len(), path.display());
        }
        ShellCommand::Import { file, mode } => {
            let count = book.import_file(&file, mode)?;
            println!("{}", messages::imported(count));
        }
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Sync | ShellCommand::Quit | ShellCommand::Empty => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook_core::storage::MemoryStore;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            ShellCommand::parse("add Keep going | Grit").unwrap(),
            ShellCommand::Add {
                text: "Keep going".to_string(),
                category: "Grit".to_string()
            }
        );
    }

    #[test]
    fn test_parse_add_without_category() {
        assert_eq!(
            ShellCommand::parse("add lonely").unwrap(),
            ShellCommand::Add {
                text: "lonely".to_string(),
                category: String::new()
            }
        );
    }

    #[test]
    fn test_parse_filter_and_import() {
        assert_eq!(
            ShellCommand::parse("filter all").unwrap(),
            ShellCommand::Filter(CategoryFilter::All)
        );
        assert_eq!(
            ShellCommand::parse("filter Self Care").unwrap(),
            ShellCommand::Filter(CategoryFilter::from("Self Care"))
        );
        assert_eq!(
            ShellCommand::parse("import q.json --replace").unwrap(),
            ShellCommand::Import {
                file: PathBuf::from("q.json"),
                mode: ImportMode::Replace
            }
        );
        assert!(ShellCommand::parse("import").is_err());
        assert!(ShellCommand::parse("filter").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), ShellCommand::Empty);
        assert_eq!(
            ShellCommand::parse("export").unwrap(),
            ShellCommand::Export(PathBuf::from("quotes.json"))
        );
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Quit);
        assert!(ShellCommand::parse("dance").is_err());
    }

    #[test]
    fn test_apply_add_rejects_missing_category() {
        let mut book = QuoteBook::load(MemoryStore::new()).unwrap();
        let err = apply(
            &mut book,
            ShellCommand::Add {
                text: "x".to_string(),
                category: String::new(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Please fill both fields");
        assert_eq!(book.quotes().len(), 3);
    }

    #[test]
    fn test_apply_filter_updates_book() {
        let mut book = QuoteBook::load(MemoryStore::new()).unwrap();
        apply(&mut book, ShellCommand::Filter(CategoryFilter::from("Success"))).unwrap();
        assert_eq!(book.filter(), &CategoryFilter::from("Success"));
    }
}
