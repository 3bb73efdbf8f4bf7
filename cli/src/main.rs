use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;
use zearch_core::{build_index, keyword, top_k, KeywordIndex, NoiseSet, TokenSource, RESULT_LIMIT};

#[derive(Parser)]
#[command(name = "zearch")]
#[command(about = "Build an in-memory keyword index and run top-5 searches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// File listing document paths, whitespace-separated
    #[arg(long)]
    docs: Option<PathBuf>,
    /// Directory tree of .txt documents
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Noise-word file, whitespace-separated; built-in English list if omitted
    #[arg(long)]
    noise: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the corpus for documents matching either keyword
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Maximum number of documents to return
        #[arg(long, default_value_t = RESULT_LIMIT)]
        limit: usize,
        /// Emit results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        keyword1: String,
        keyword2: String,
    },
    /// Print one keyword's full occurrence list
    Lookup {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Emit the list as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        keyword: String,
    },
}

/// Token source backed by the filesystem: a document id is a file path, its
/// tokens are the file's whitespace-delimited words.
struct FsTokenSource;

impl TokenSource for FsTokenSource {
    fn tokens(&mut self, doc: &str) -> io::Result<Vec<String>> {
        let text = fs::read_to_string(doc)?;
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            limit,
            json,
            keyword1,
            keyword2,
        } => search(&corpus, limit, json, &keyword1, &keyword2),
        Commands::Lookup {
            corpus,
            json,
            keyword,
        } => lookup(&corpus, json, &keyword),
    }
}

fn search(corpus: &CorpusArgs, limit: usize, json: bool, kw1: &str, kw2: &str) -> Result<()> {
    let (index, noise) = load_corpus(corpus)?;
    let kw1 = query_term(kw1, &noise);
    let kw2 = query_term(kw2, &noise);
    let result = top_k(&index, &kw1, &kw2, limit);

    if json {
        let payload = serde_json::json!({
            "keywords": [kw1, kw2],
            "documents": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }
    match result {
        Some(docs) if !docs.is_empty() => {
            for doc in docs {
                println!("{doc}");
            }
        }
        _ => println!("no matching documents"),
    }
    Ok(())
}

fn lookup(corpus: &CorpusArgs, json: bool, raw: &str) -> Result<()> {
    let (index, noise) = load_corpus(corpus)?;
    let term = query_term(raw, &noise);
    match index.occurrences(&term) {
        None => println!("keyword not in index"),
        Some(occs) if json => println!("{}", serde_json::to_string_pretty(occs)?),
        Some(occs) => {
            for occ in occs {
                println!("{}\t{}", occ.document, occ.frequency);
            }
        }
    }
    Ok(())
}

fn load_corpus(corpus: &CorpusArgs) -> Result<(KeywordIndex, NoiseSet)> {
    let noise = match &corpus.noise {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading noise words from {}", path.display()))?;
            NoiseSet::new(text.split_whitespace())
        }
        None => NoiseSet::default_english(),
    };

    let doc_ids = collect_documents(corpus)?;
    if doc_ids.is_empty() {
        bail!("no documents to index; pass --docs or --dir");
    }
    tracing::info!(
        num_docs = doc_ids.len(),
        noise_words = noise.len(),
        "indexing corpus"
    );
    let index = build_index(&doc_ids, &mut FsTokenSource, &noise)?;
    Ok((index, noise))
}

fn collect_documents(corpus: &CorpusArgs) -> Result<Vec<String>> {
    let mut doc_ids = Vec::new();
    if let Some(docs) = &corpus.docs {
        let listing = fs::read_to_string(docs)
            .with_context(|| format!("reading document list from {}", docs.display()))?;
        doc_ids.extend(listing.split_whitespace().map(str::to_string));
    }
    if let Some(dir) = &corpus.dir {
        // sorted walk keeps merge order, and therefore tie order, stable
        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
                doc_ids.push(p.to_string_lossy().into_owned());
            }
        }
    }
    Ok(doc_ids)
}

/// Query terms go through the same normalization as indexed tokens. A term
/// the normalizer rejects can never be an index key, so the empty string
/// stands in for it and the lookup behaves as an unknown keyword.
fn query_term(raw: &str, noise: &NoiseSet) -> String {
    keyword(raw, noise).unwrap_or_default()
}
