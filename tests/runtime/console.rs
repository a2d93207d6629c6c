//! Console tests, driven through a scripted editor.

use squawk_foundation::{Directory, Result};
use squawk_runtime::{Console, LineEditor, ReadResult, Reply};

/// Replays a fixed list of lines, then reports end of input.
struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
    completions: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| (*l).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
            completions: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_callsigns(&mut self, callsigns: Vec<String>) {
        self.completions = callsigns;
    }
}

fn reply_text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn scripted_session_builds_roster() {
    let mut console = Console::with_editor(ScriptedEditor::new(&[
        ":add Tower as ATC",
        ":add Delta Air Lines 123 as A320",
        "Tower Delta Air Lines 123 request startup",
        ":quit",
    ]))
    .without_banner();

    console.run().unwrap();

    assert_eq!(console.roster().len(), 2);
    assert!(console.roster().has_prefix("Delta Air"));
}

#[test]
fn save_and_restore_round_trip() {
    let path = std::env::temp_dir().join(format!("squawk_console_{}.msgpack", std::process::id()));
    let path = path.display().to_string();

    let mut console = Console::with_editor(ScriptedEditor::new(&[])).without_banner();
    console.eval(":add Tower").unwrap();
    console.eval(":add GHI789").unwrap();
    assert_eq!(
        reply_text(console.eval(&format!(":save {path}")).unwrap()),
        "saved 2 callsigns"
    );

    let mut fresh = Console::with_editor(ScriptedEditor::new(&[])).without_banner();
    assert_eq!(
        reply_text(fresh.eval(&format!(":restore {path}")).unwrap()),
        "restored 2 callsigns"
    );
    assert_eq!(
        reply_text(fresh.eval("Tower GHI789 roger").unwrap()),
        "GHI789 -> Tower: acknowledgment \"roger\""
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_missing_file_reports_error() {
    let mut console = Console::with_editor(ScriptedEditor::new(&[])).without_banner();
    assert!(console.eval(":load /nonexistent/squawk/roster.json").is_err());
    assert!(console.roster().is_empty());
}

#[test]
fn roster_listing() {
    let mut console = Console::with_editor(ScriptedEditor::new(&[])).without_banner();
    assert_eq!(reply_text(console.eval(":roster").unwrap()), "(empty roster)");

    console.eval(":add Tower as ATC").unwrap();
    console.eval(":add GHI789").unwrap();
    assert_eq!(
        reply_text(console.eval(":roster").unwrap()),
        "  GHI789\n  Tower (ATC)"
    );
}

#[test]
fn unknown_transmission_without_roster() {
    let mut console = Console::with_editor(ScriptedEditor::new(&[])).without_banner();
    assert_eq!(
        reply_text(console.eval("hello world").unwrap()),
        "? -> ?: uninterpreted \"hello world\""
    );
}
