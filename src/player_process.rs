use std::io::Write;
use std::process::{Child, ChildStdin, Command, Stdio};

use tracing::{debug, warn};

use crate::bridge::EmbeddedWidget;
use crate::error::SlideshowError;

/// Hosts the embed URL in an external helper program. Each load starts a fresh
/// helper (`<program> <args..> <url>`); commands go to its stdin, one JSON message per line.
pub struct ProcessWidget {
    program: String,
    args: Vec<String>,
    process: Option<Child>,
    stdin: Option<ChildStdin>,
}

impl ProcessWidget {
    pub fn new(program: &str, args: &[String]) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
            process: None,
            stdin: None,
        }
    }

    fn spawn(&self, url: &str) -> Result<Child, SlideshowError> {
        Command::new(&self.program)
            .stdin(Stdio::piped())
            .args(&self.args)
            .arg(url)
            .spawn()
            .map_err(|source| SlideshowError::PlayerSpawn {
                program: self.program.clone(),
                source,
            })
    }

    fn shutdown(&mut self) {
        // Closing stdin tells the helper to exit
        self.stdin = None;
        if let Some(mut process) = self.process.take() {
            if let Err(e) = process.kill() {
                debug!("helper already gone: {}", e);
            }
            if let Err(e) = process.wait() {
                warn!("failed to wait for player helper: {}", e);
            }
        }
    }
}

impl EmbeddedWidget for ProcessWidget {
    fn is_live(&self) -> bool {
        self.stdin.is_some()
    }

    fn load(&mut self, url: &str) {
        self.shutdown();
        match self.spawn(url) {
            Ok(mut process) => {
                self.stdin = process.stdin.take();
                self.process = Some(process);
            }
            Err(e) => warn!("{}", e),
        }
    }

    fn post_message(&mut self, message: &str, target_origin: &str) {
        let Some(stdin) = self.stdin.as_mut() else {
            return;
        };
        debug!("-> helper ({}): {}", target_origin, message);
        let written = stdin
            .write_all(message.as_bytes())
            .and_then(|_| stdin.write_all(b"\n"))
            .and_then(|_| stdin.flush());
        if let Err(e) = written {
            warn!("player helper stopped accepting commands: {}", e);
            self.stdin = None;
        }
    }
}

impl Drop for ProcessWidget {
    fn drop(&mut self) {
        self.shutdown();
    }
}
