mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;
use wordsift_core::dictionary::Dictionary;
use wordsift_core::types::{AppConfig, Display, Document, NodeId};
use wordsift_search::{ElementId, ElementSearcher, Surface};

/// Filter a word list the way the search box does.
#[derive(Parser, Debug)]
#[command(name = "wordsift", version, about)]
struct Cli {
    /// TOML dictionary to load
    dictionary: PathBuf,

    /// Queries to run in order; none shows every word
    queries: Vec<String>,

    /// Config file (defaults to ./wordsift.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level, including whole-word matches
    #[arg(short, long)]
    verbose: bool,
}

/// Forwards directives to the document and remembers whole-word hits.
struct Page<'a> {
    document: &'a mut Document,
    whole_word: HashSet<ElementId>,
}

impl Surface<NodeId> for Page<'_> {
    fn set_visible(&mut self, element: NodeId, visible: bool) {
        self.document.set_visible(element, visible);
    }

    fn whole_word_match(&mut self, id: ElementId, _element: NodeId) {
        self.whole_word.insert(id);
    }
}

/// An explicit path must exist; the implicit `./wordsift.toml` may be absent.
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(path) if !path.exists() => bail!("config file {} does not exist", path.display()),
        Some(path) => path.to_path_buf(),
        None => AppConfig::path(Path::new(".")),
    };
    let config = AppConfig::load(&path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    Ok(config.with_defaults_for_invalid())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.logging.filter, cli.verbose);

    let dictionary = Dictionary::load(&cli.dictionary)
        .with_context(|| format!("failed to load dictionary {}", cli.dictionary.display()))?;
    let (mut document, elements) = dictionary.build_document();
    let searcher = ElementSearcher::new(&document, elements, config.search.clone())
        .context("failed to index dictionary")?;
    info!(words = searcher.len(), "dictionary indexed");

    let mut page = Page {
        document: &mut document,
        whole_word: HashSet::new(),
    };

    if cli.queries.is_empty() {
        searcher.show_all(&mut page);
        print_visible(&searcher, &dictionary, &page);
        return Ok(());
    }

    for query in &cli.queries {
        page.whole_word.clear();
        searcher.search(Some(query.as_str()), &mut page);
        println!("# {query}");
        print_visible(&searcher, &dictionary, &page);
    }

    Ok(())
}

fn print_visible(searcher: &ElementSearcher<NodeId>, dictionary: &Dictionary, page: &Page<'_>) {
    for (id, element, _) in searcher.iter() {
        if page.document.display(element) != Some(Display::Flex) {
            continue;
        }
        let marker = if page.whole_word.contains(&id) { "*" } else { " " };
        if let Some(entry) = dictionary.words.get(id.index()) {
            println!("{marker} {}", entry.word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("typo.toml");

        let err = load_config(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_explicit_config_is_loaded_and_repaired() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[search]\nmin_whole_word_len = 1\nmax_depth = 8\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.search.min_whole_word_len, 2);
        assert_eq!(config.search.max_depth, 8);
    }
}
