use anyhow::Result;
use search_core::{parse_position, Hit, SearchError, Session};
use serde::Serialize;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter command > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Query,
    Type,
    Results,
    Exit,
}

impl Command {
    /// Resolve a command name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "query" => Some(Command::Query),
            "type" => Some(Command::Type),
            "results" => Some(Command::Results),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Terminate,
}

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Maximum hits printed after a query.
    pub top: usize,
    pub json: bool,
}

impl Default for OutputOptions {
    fn default() -> Self { Self { top: 10, json: false } }
}

#[derive(Serialize)]
struct ResultLine<'a> {
    position: usize,
    #[serde(flatten)]
    hit: &'a Hit,
}

/// Split a request line into a command name and its trimmed argument.
pub fn split_request(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    }
}

pub fn execute<W: Write>(
    command: Command,
    session: &mut Session,
    arg: &str,
    opts: &OutputOptions,
    out: &mut W,
) -> Result<Status> {
    match command {
        Command::Query => query(session, arg, opts, out),
        Command::Type => type_document(session, arg, out),
        Command::Results => results(session, opts, out),
        Command::Exit => Ok(Status::Terminate),
    }
}

fn query<W: Write>(
    session: &mut Session,
    arg: &str,
    opts: &OutputOptions,
    out: &mut W,
) -> Result<Status> {
    let results = session.query(arg);
    writeln!(out, "Query is: [{}]", results.terms.join(", "))?;
    if results.is_empty() {
        writeln!(out, "No results for specified query.")?;
        return Ok(Status::Continue);
    }
    let shown = results.len().min(opts.top);
    writeln!(out, "Top {shown} results:")?;
    print_hits(&results.hits[..shown], opts, out)?;
    Ok(Status::Continue)
}

fn results<W: Write>(session: &Session, opts: &OutputOptions, out: &mut W) -> Result<Status> {
    let results = session.results();
    if results.is_empty() {
        writeln!(out, "There are no current results.")?;
    } else {
        print_hits(&results.hits, opts, out)?;
    }
    Ok(Status::Continue)
}

fn type_document<W: Write>(session: &Session, arg: &str, out: &mut W) -> Result<Status> {
    let text = parse_position(arg).and_then(|position| session.fetch_document_text(position));
    match text {
        Ok(bytes) => writeln!(out, "{}", String::from_utf8_lossy(&bytes))?,
        Err(SearchError::MalformedPosition(_)) => {
            writeln!(out, "Argument cannot be interpreted as an integer.")?
        }
        Err(SearchError::IndexOutOfRange { .. }) => {
            writeln!(out, "Selected index does not exist.")?
        }
        Err(err) => {
            tracing::warn!(error = %err, "type failed");
            writeln!(out, "IO error occurred: {err}")?
        }
    }
    Ok(Status::Continue)
}

fn print_hits<W: Write>(hits: &[Hit], opts: &OutputOptions, out: &mut W) -> Result<()> {
    for (position, hit) in hits.iter().enumerate() {
        if opts.json {
            serde_json::to_writer(&mut *out, &ResultLine { position, hit })?;
            writeln!(out)?;
        } else {
            writeln!(out, "[{:2}] ({:.4}) {}", position, hit.score, hit.path.display())?;
        }
    }
    Ok(())
}

/// Read commands from `input` until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    opts: &OutputOptions,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let (name, arg) = split_request(&line);
        if name.is_empty() {
            continue;
        }
        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unrecognized command.")?;
            writeln!(out)?;
            continue;
        };
        if execute(command, session, arg, opts, out)? == Status::Terminate {
            break;
        }
    }
    writeln!(out)?;
    writeln!(out, "Thank you and goodbye!")?;
    Ok(())
}
