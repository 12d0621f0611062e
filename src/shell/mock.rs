//! Scripted process runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything. It
//! records every invocation and replays responses queued per command line
//! prefix.
//!
//! # Example
//!
//! ```
//! use podpin::shell::{MockResponse, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond("pod --version", MockResponse::exit(0).with_stdout(["1.2.3\n"]));
//!
//! let code = runner.execute("pod", &["--version".to_string()], None).unwrap();
//! assert_eq!(code, Some(0));
//! assert_eq!(runner.invocations(), ["pod --version"]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::error::{PodpinError, Result};

use super::command::{command_line, ProcessRunner, StdoutCallback};

/// A scripted outcome for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// The process ran and exited with `code`, printing `stdout` chunk by chunk.
    Exit {
        code: Option<i32>,
        stdout: Vec<String>,
    },
    /// The process could not be started.
    SpawnError,
}

impl MockResponse {
    /// A process that exits with `code` and prints nothing.
    pub fn exit(code: i32) -> Self {
        Self::Exit {
            code: Some(code),
            stdout: Vec::new(),
        }
    }

    /// A process killed by a signal.
    pub fn signaled() -> Self {
        Self::Exit {
            code: None,
            stdout: Vec::new(),
        }
    }

    /// Attach stdout chunks, delivered one callback call each.
    pub fn with_stdout<I, S>(self, chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            Self::Exit { code, .. } => Self::Exit {
                code,
                stdout: chunks.into_iter().map(Into::into).collect(),
            },
            Self::SpawnError => Self::SpawnError,
        }
    }
}

/// Mock process runner.
///
/// Responses are matched against the rendered command line by longest
/// registered prefix. Unmatched invocations behave like a missing program.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, VecDeque<MockResponse>>>,
    invocations: RefCell<Vec<(String, bool)>>,
}

impl MockRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for commands starting with `prefix`.
    ///
    /// The last queued response for a prefix is sticky and is replayed
    /// for every further match.
    pub fn respond(&self, prefix: &str, response: MockResponse) {
        self.responses
            .borrow_mut()
            .entry(prefix.to_string())
            .or_default()
            .push_back(response);
    }

    /// Command lines executed so far, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|(line, _)| line.clone())
            .collect()
    }

    /// For each executed command starting with `prefix`, whether its
    /// stdout was captured by a callback rather than inherited.
    pub fn captured(&self, prefix: &str) -> Vec<bool> {
        self.invocations
            .borrow()
            .iter()
            .filter(|(line, _)| line.starts_with(prefix))
            .map(|(_, captured)| *captured)
            .collect()
    }

    /// Number of executed commands starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.invocations
            .borrow()
            .iter()
            .filter(|(line, _)| line.starts_with(prefix))
            .count()
    }

    fn next_response(&self, line: &str) -> Option<MockResponse> {
        let mut responses = self.responses.borrow_mut();
        let key = responses
            .keys()
            .filter(|prefix| line.starts_with(prefix.as_str()))
            .max_by_key(|prefix| prefix.len())
            .cloned()?;
        let queue = responses.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl ProcessRunner for MockRunner {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        on_stdout: Option<StdoutCallback<'_>>,
    ) -> Result<Option<i32>> {
        let line = command_line(program, args);
        self.invocations
            .borrow_mut()
            .push((line.clone(), on_stdout.is_some()));

        match self.next_response(&line) {
            Some(MockResponse::Exit { code, stdout }) => {
                if let Some(callback) = on_stdout {
                    for chunk in &stdout {
                        callback(chunk.as_bytes());
                    }
                }
                Ok(code)
            }
            Some(MockResponse::SpawnError) | None => Err(PodpinError::CommandFailed {
                command: line,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}
