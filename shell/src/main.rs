use anyhow::{Context, Result};
use clap::Parser;
use search_core::Session;
use search_shell::{run, OutputOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Interactive TF-IDF search over a directory of text files", long_about = None)]
struct Args {
    /// Directory with the documents to index
    root: PathBuf,
    /// Newline-delimited stop-word list
    #[arg(long, env = "DOCSEARCH_STOPWORDS", default_value = "dictionary/stopwords_hr.txt")]
    stopwords: PathBuf,
    /// Number of hits printed after a query
    #[arg(long, env = "DOCSEARCH_TOP", default_value_t = 10)]
    top: usize,
    /// Print result listings as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let mut session = Session::build(&args.root, &args.stopwords)
        .with_context(|| format!("failed to index {}", args.root.display()))?;
    println!("Vocabulary size: {} words", session.index().vocabulary().len());
    println!();

    let opts = OutputOptions { top: args.top, json: args.json };
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout, &opts)
}
