//! The interactive console.
//!
//! Lines starting with `:` are commands; anything else is a transmission
//! parsed against the console's roster.

use std::io::{self, Write};

use squawk_foundation::{Error, Identity, Result, Roster};
use squawk_parser::{MessageParser, Payload, SenderPolicy, Token};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::roster_file;

const HELP: &str = "\
Commands:
  :help                          Show this help
  :roster                        List known callsigns
  :add <callsign> [as <kind>]    Register a callsign
  :load <file>                   Replace the roster from a .json or snapshot file
  :save <file>                   Save a roster snapshot
  :restore <file>                Restore a roster snapshot
  :tokens <text>                 Show how a transmission splits into tokens
  :policy [optional|fallback|required]
                                 Show or set the sender policy
  :quit                          Leave the console

Anything else is parsed as a transmission.";

/// What the console has to say after evaluating a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Text(String),
    /// Nothing to print.
    Silent,
    /// The user asked to leave.
    Quit,
}

/// The interactive console.
pub struct Console<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Callsigns transmissions are parsed against.
    roster: Roster,

    /// Parser with the standard recognizers.
    parser: MessageParser,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Prompt.
    prompt: String,
}

impl Console<RustylineEditor> {
    /// Creates a new console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Console<E> {
    /// Creates a new console with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            roster: Roster::new(),
            parser: MessageParser::standard(),
            show_banner: true,
            prompt: "squawk> ".to_string(),
        }
    }

    /// Sets the roster.
    #[must_use]
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.replace_roster(roster);
        self
    }

    /// Sets the parser.
    #[must_use]
    pub fn with_parser(mut self, parser: MessageParser) -> Self {
        self.parser = parser;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the parser.
    #[must_use]
    pub const fn parser(&self) -> &MessageParser {
        &self.parser
    }

    /// Runs the console loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Reply::Text(text)) => println!("{text}"),
                Ok(Reply::Silent) => {}
                Ok(Reply::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        Ok(())
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, bad arguments, or failed
    /// roster file operations.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Silent);
        }

        let Some(command) = line.strip_prefix(':') else {
            return self.transmit(line);
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));
        debug!(command = name, arg, "console command");

        match name {
            "help" | "h" | "?" => Ok(Reply::Text(HELP.to_string())),
            "quit" | "q" | "exit" => Ok(Reply::Quit),
            "roster" => Ok(Reply::Text(self.describe_roster())),
            "add" => self.add(arg),
            "load" => {
                let roster = roster_file::load(required(name, arg)?)?;
                let count = roster.len();
                self.replace_roster(roster);
                Ok(Reply::Text(format!("loaded {count} callsigns")))
            }
            "save" => {
                roster_file::save_to_file(&self.roster, required(name, arg)?)?;
                Ok(Reply::Text(format!("saved {} callsigns", self.roster.len())))
            }
            "restore" => {
                let roster = roster_file::load_from_file(required(name, arg)?)?;
                let count = roster.len();
                self.replace_roster(roster);
                Ok(Reply::Text(format!("restored {count} callsigns")))
            }
            "tokens" => {
                let tokens = self.parser.tokenize(required(name, arg)?, &self.roster);
                Ok(Reply::Text(format_tokens(&tokens)))
            }
            "policy" => self.policy(arg),
            other => Err(Error::internal(format!(
                "unknown command ':{other}' (try :help)"
            ))),
        }
    }

    fn transmit(&self, raw: &str) -> Result<Reply> {
        let text = match self.parser.parse(raw, &self.roster)? {
            Some(message) => {
                let mut text = message.to_string();
                if let Payload::RequestStartup { companions, .. } = message.payload() {
                    if !companions.is_empty() {
                        text.push_str(" with ");
                        text.push_str(&format_tokens(companions));
                    }
                }
                text
            }
            None => "(no message)".to_string(),
        };
        Ok(Reply::Text(text))
    }

    fn add(&mut self, arg: &str) -> Result<Reply> {
        let arg = required("add", arg)?;
        let identity = match arg.rsplit_once(" as ") {
            Some((callsign, kind)) => Identity::new(callsign.trim()).with_kind(kind.trim()),
            None => Identity::new(arg),
        };

        let added = self.roster.register(identity)?;
        self.sync_completions();
        Ok(Reply::Text(format!("added {added}")))
    }

    fn policy(&mut self, arg: &str) -> Result<Reply> {
        if arg.is_empty() {
            let current = self.parser.config().sender_policy;
            return Ok(Reply::Text(format!("sender policy: {current}")));
        }

        let policy: SenderPolicy = arg.parse()?;
        self.parser.config_mut().sender_policy = policy;
        Ok(Reply::Text(format!("sender policy set to {policy}")))
    }

    fn describe_roster(&self) -> String {
        if self.roster.is_empty() {
            return "(empty roster)".to_string();
        }
        self.roster
            .iter()
            .map(|identity| format!("  {identity}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn replace_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.sync_completions();
    }

    fn sync_completions(&mut self) {
        let callsigns = self
            .roster
            .iter()
            .map(|identity| identity.callsign.to_string())
            .collect();
        self.editor.set_callsigns(callsigns);
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36msquawk\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "{} callsigns known. Type :help for commands, Ctrl+D to exit.\n",
            self.roster.len()
        );

        let _ = io::stdout().flush();
    }
}

/// Renders tokens with callsigns in brackets: `[Tower] request startup`.
fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            if token.is_callsign() {
                format!("[{}]", token.content())
            } else {
                token.content().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn required<'a>(command: &str, arg: &'a str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(Error::internal(format!(":{command} needs an argument")))
    } else {
        Ok(arg)
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
