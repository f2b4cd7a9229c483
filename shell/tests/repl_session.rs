use search_core::Session;
use search_shell::{run, OutputOptions, PROMPT};
use serde_json::Value;
use std::fs;
use std::io::Cursor;
use tempfile::{tempdir, TempDir};

fn build_session() -> (TempDir, Session) {
    let dir = tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    fs::create_dir_all(&corpus).unwrap();
    fs::write(corpus.join("doc1.txt"), "cat cat").unwrap();
    fs::write(corpus.join("doc2.txt"), "dog bird").unwrap();
    fs::write(corpus.join("doc3.txt"), "bird bird fish").unwrap();
    fs::write(dir.path().join("stop.txt"), "the\na\n").unwrap();
    let session = Session::build(&corpus, dir.path().join("stop.txt")).unwrap();
    (dir, session)
}

fn run_script(session: &mut Session, script: &str, opts: &OutputOptions) -> String {
    let mut out = Vec::new();
    run(session, Cursor::new(script.to_string()), &mut out, opts).unwrap();
    String::from_utf8(out).unwrap().replace(PROMPT, "")
}

#[test]
fn query_then_results_then_type() {
    let (_dir, mut session) = build_session();
    let script = "query the cat\nresults\ntype 0\nexit\n";
    let out = run_script(&mut session, script, &OutputOptions::default());

    assert!(out.contains("Query is: [cat]"));
    assert!(out.contains("Top 1 results:"));
    assert!(out.contains("[ 0] (1.0000) "));
    assert!(out.contains("doc1.txt"));
    assert!(out.contains("cat cat\n"));
    assert!(out.ends_with("\nThank you and goodbye!\n"));
    // Listed once after the query, once by `results`.
    assert_eq!(out.matches("[ 0] (1.0000)").count(), 2);
}

#[test]
fn recoverable_errors_keep_the_loop_running() {
    let (_dir, mut session) = build_session();
    let script = "results\ntype 0\nfrobnicate\nquery zebra\ntype x\ntype -1\n\
        query bird\ntype 5\nexit\n";
    let out = run_script(&mut session, script, &OutputOptions::default());

    assert!(out.contains("There are no current results."));
    assert!(out.contains("Unrecognized command."));
    assert!(out.contains("Query is: []"));
    assert!(out.contains("No results for specified query."));
    assert!(out.contains("Argument cannot be interpreted as an integer."));
    assert_eq!(out.matches("Selected index does not exist.").count(), 3);
    assert!(out.contains("Top 2 results:"));
    assert!(out.contains("Thank you and goodbye!"));
}

#[test]
fn top_limits_query_listing_but_not_results() {
    let (_dir, mut session) = build_session();
    let opts = OutputOptions { top: 1, json: false };
    let out = run_script(&mut session, "query bird\nresults\n", &opts);

    assert!(out.contains("Top 1 results:"));
    assert_eq!(out.matches("[ 0]").count(), 2);
    assert_eq!(out.matches("[ 1]").count(), 1);
}

#[test]
fn end_of_input_exits_cleanly() {
    let (_dir, mut session) = build_session();
    let out = run_script(&mut session, "\n   \nquery cat", &OutputOptions::default());
    assert!(out.contains("Query is: [cat]"));
    assert!(out.ends_with("Thank you and goodbye!\n"));
}

#[test]
fn json_listing() {
    let (_dir, mut session) = build_session();
    let opts = OutputOptions { top: 10, json: true };
    let out = run_script(&mut session, "query fish\n", &opts);
    let line = out.lines().find(|l| l.starts_with('{')).unwrap();
    let json: Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["position"].as_u64(), Some(0));
    assert_eq!(json["doc_id"].as_u64(), Some(2));
    assert!(json["path"].as_str().unwrap().ends_with("doc3.txt"));
    let score = json["score"].as_f64().unwrap();
    assert!(score > 0.0 && score < 1.0);
}
