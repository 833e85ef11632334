//! Blocking TCP line server.
//!
//! One shared [`Game`] serves every connection. Command resolution is a
//! multi-step read-then-write sequence that must not interleave, so every
//! command passes through a single global critical section; connections
//! only run concurrently up to that lock.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tanglewood_engine::Game;
use tracing::{debug, info, warn};

/// Marks the end of a response block on the wire, so clients can frame
/// multi-line responses.
const END_OF_TRANSMISSION: char = '\u{4}';

/// A blocking TCP server over one shared game.
pub struct GameServer {
    game: Arc<Mutex<Game>>,
}

impl GameServer {
    /// Creates a server around the given game.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    /// A handle to the shared game (tooling and tests).
    #[must_use]
    pub fn game(&self) -> Arc<Mutex<Game>> {
        Arc::clone(&self.game)
    }

    /// Binds the port and serves connections until the process ends.
    ///
    /// Each connection gets a thread and is served line by line: one
    /// command line in, one response block out, terminated by an EOT
    /// marker line. EOF closes the connection.
    ///
    /// # Errors
    ///
    /// Fails when the listener cannot bind.
    pub fn listen(&self, port: u16) -> std::io::Result<()> {
        let listener = TcpListener::bind(("0.0.0.0", port))?;
        info!(port, "server listening");
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let game = Arc::clone(&self.game);
                    thread::spawn(move || {
                        if let Err(e) = serve_connection(&game, stream) {
                            warn!(error = %e, "connection ended with error");
                        }
                    });
                }
                Err(e) => warn!(error = %e, "failed to accept connection"),
            }
        }
        Ok(())
    }
}

fn serve_connection(game: &Mutex<Game>, stream: TcpStream) -> std::io::Result<()> {
    let peer = stream.peer_addr()?;
    info!(%peer, "connection established");

    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim_end_matches(['\r', '\n']);
        debug!(%peer, command, "handling command");

        let response = {
            // A poisoned lock means a handler thread panicked; the game is
            // still serviceable because commands validate before mutating.
            let mut game = game.lock().unwrap_or_else(PoisonError::into_inner);
            game.handle_command(command)
        };

        writer.write_all(response.as_bytes())?;
        writer.write_all(format!("\n{END_OF_TRANSMISSION}\n").as_bytes())?;
        writer.flush()?;
    }

    info!(%peer, "connection closed");
    Ok(())
}
