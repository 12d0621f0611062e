//! External process execution.

use crate::error::{PodpinError, Result};
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Callback receiving raw stdout chunks in arrival order.
pub type StdoutCallback<'a> = &'a mut dyn FnMut(&[u8]);

/// Runs external programs on behalf of the installer.
///
/// Implementations block until the child exits. `Ok(Some(code))` is the
/// exit code, `Ok(None)` means the child was killed by a signal, and `Err`
/// means the program could not be run at all (e.g. not found on PATH).
pub trait ProcessRunner {
    /// Run `program` with `args`, forwarding stdout chunks to `on_stdout`.
    fn execute(
        &self,
        program: &str,
        args: &[String],
        on_stdout: Option<StdoutCallback<'_>>,
    ) -> Result<Option<i32>>;
}

/// Render a command line for logs and error messages.
pub fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// [`ProcessRunner`] that spawns real processes.
///
/// Programs are spawned directly, not through a shell, so arguments reach
/// the child verbatim. stdin and stderr are inherited. stdout is inherited
/// unless a callback is supplied, in which case it is piped and forwarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

const READ_CHUNK: usize = 8 * 1024;

impl ProcessRunner for SystemRunner {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        on_stdout: Option<StdoutCallback<'_>>,
    ) -> Result<Option<i32>> {
        let rendered = command_line(program, args);
        let start = Instant::now();
        tracing::debug!("Running: {}", rendered);

        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.stdin(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        if on_stdout.is_some() {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let mut child = cmd.spawn().map_err(|e| {
            tracing::debug!("Failed to start {}: {}", rendered, e);
            PodpinError::CommandFailed {
                command: rendered.clone(),
                source: e,
            }
        })?;

        if let (Some(callback), Some(mut stdout)) = (on_stdout, child.stdout.take()) {
            let mut buf = [0u8; READ_CHUNK];
            loop {
                match stdout.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => callback(&buf[..n]),
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        tracing::debug!("Stopped reading stdout of {}: {}", rendered, e);
                        break;
                    }
                }
            }
        }

        let status = child.wait().map_err(|e| PodpinError::CommandFailed {
            command: rendered.clone(),
            source: e,
        })?;

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            rendered,
            status.code(),
            start.elapsed()
        );

        Ok(status.code())
    }
}
