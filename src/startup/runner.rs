//! Writes generated text to stdout and ends quietly when the run is cut short

use crate::error::{GeneratorError, Result};
use std::io::Write;
use tracing::debug;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All output was written
    Completed,
    /// The reader closed stdout early
    OutputClosed,
    /// SIGINT or SIGTERM arrived first
    Interrupted,
}

/// Render with `job` and write the result to `writer`.
///
/// A broken pipe is an expected ending, not an error.
pub fn write_output<W, F>(writer: &mut W, job: F) -> Result<RunOutcome>
where
    W: Write,
    F: FnOnce() -> Result<String>,
{
    let text = job()?;
    let written = writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(GeneratorError::from);

    match written {
        Ok(()) => Ok(RunOutcome::Completed),
        Err(e) if e.is_broken_pipe() => {
            debug!("Output consumer closed the pipe early");
            Ok(RunOutcome::OutputClosed)
        }
        Err(e) => Err(e),
    }
}

/// Run `job` on a blocking thread and write its output to stdout, racing
/// against interrupt and termination signals.
pub async fn run_to_stdout<F>(job: F) -> Result<RunOutcome>
where
    F: FnOnce() -> Result<String> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(move || {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_output(&mut handle, job)
    });

    tokio::select! {
        joined = task => {
            joined.map_err(|e| GeneratorError::Internal(anyhow::anyhow!("generator task failed: {}", e)))?
        }
        _ = shutdown_signal() => {
            debug!("Interrupted before output was complete");
            Ok(RunOutcome::Interrupted)
        }
    }
}

/// Resolves on SIGINT or SIGTERM. Never resolves if no handler can be
/// installed.
async fn shutdown_signal() {
    let interrupt = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }
}
