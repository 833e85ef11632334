//! Interactive local console.
//!
//! Feeds entered lines verbatim through the same orchestrator the server
//! uses, so local play exercises the full protocol including the
//! `player: command` prefix.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tanglewood_engine::Game;
use tanglewood_foundation::{Error, Result};

/// The interactive console.
pub struct Console {
    editor: DefaultEditor,
    game: Game,
    show_banner: bool,
}

impl Console {
    /// Creates a console over the given game.
    ///
    /// # Errors
    ///
    /// Fails when the line editor cannot initialize.
    pub fn new(game: Game) -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| Error::internal(format!("cannot initialize line editor: {e}")))?;
        Ok(Self {
            editor,
            game,
            show_banner: true,
        })
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// The game behind the console.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the read-eval loop. Ctrl-C cancels the current line, Ctrl-D
    /// exits.
    ///
    /// # Errors
    ///
    /// Fails when reading from the terminal fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line.as_str());
                    println!("{}", self.game.handle_command(&line));
                }
                Err(ReadlineError::Interrupted) => println!("^C"),
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(Error::internal(format!("line editor failure: {e}"))),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }
}

fn print_banner() {
    println!(
        "Tanglewood {}\n\
         Type commands as \"<player>: <text>\", e.g. \"mike: look\".\n\
         Ctrl+D exits.",
        env!("CARGO_PKG_VERSION")
    );
}
