//! Line-oriented terminal session
//!
//! Reads commands from a line stream, dispatches them into the app and
//! re-renders. The notification deadline is raced against the next input
//! line so an expired message disappears without waiting for a keystroke.

use crate::command::{self, Command};
use crate::render::render;
use async_trait::async_trait;
use phonebook_core::{Confirm, PhonebookApp};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Stdin};
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

/// Input lines, shared between the command loop and confirmation prompts
pub type SharedLines<S> = Arc<Mutex<S>>;

/// Stdin as shared input lines
pub type InputLines = SharedLines<LinesStream<BufReader<Stdin>>>;

/// Open stdin as a shared line stream
pub fn stdin_lines() -> InputLines {
    shared_lines(tokio::io::stdin())
}

/// Split any reader into shared lines
pub fn shared_lines<R: AsyncRead>(reader: R) -> SharedLines<LinesStream<BufReader<R>>> {
    Arc::new(Mutex::new(LinesStream::new(BufReader::new(reader).lines())))
}

/// Read the next line, `None` on end of input
async fn next_line<S>(input: &SharedLines<S>) -> Option<String>
where
    S: Stream<Item = io::Result<String>> + Unpin,
{
    let mut lines = input.lock().await;
    match lines.next().await {
        Some(Ok(line)) => Some(line),
        Some(Err(e)) => {
            debug!("Failed to read input: {}", e);
            None
        }
        None => None,
    }
}

/// Write and flush, logging instead of failing
fn emit<W: Write>(out: &mut W, text: &str) {
    let written = out.write_all(text.as_bytes()).and_then(|()| out.flush());
    if let Err(e) = written {
        debug!("Failed to write output: {}", e);
    }
}

/// Asks on stdout, reads the answer from the shared input lines
pub struct LineConfirm<S> {
    input: SharedLines<S>,
}

impl<S> LineConfirm<S> {
    /// Create a confirmation prompt reading from `input`
    pub fn new(input: SharedLines<S>) -> Self {
        Self { input }
    }
}

#[async_trait]
impl<S> Confirm for LineConfirm<S>
where
    S: Stream<Item = io::Result<String>> + Unpin + Send + 'static,
{
    async fn confirm(&self, question: &str) -> bool {
        emit(&mut io::stdout(), &format!("{} [y/N] ", question));
        match next_line(&self.input).await {
            Some(answer) => command::is_yes(&answer),
            None => false,
        }
    }
}

/// Run the session until `quit` or end of input
pub async fn run<S, W>(app: &mut PhonebookApp, input: SharedLines<S>, out: &mut W)
where
    S: Stream<Item = io::Result<String>> + Unpin,
    W: Write,
{
    app.load().await;
    emit(out, &render(app));

    loop {
        emit(out, "> ");

        // Idle far-future wake-up when no notification is pending
        let wake = app
            .notifications()
            .deadline()
            .unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

        tokio::select! {
            line = next_line(&input) => {
                let Some(line) = line else {
                    emit(out, "\n");
                    break;
                };
                if !handle_line(app, &line, out).await {
                    break;
                }
            }

            _ = sleep_until(wake) => {
                if app.expire_notification() {
                    emit(out, "\n");
                    emit(out, &render(app));
                }
            }
        }
    }
}

/// Handle one command line
///
/// # Returns
///
/// `false` when the session should end
async fn handle_line<W: Write>(app: &mut PhonebookApp, line: &str, out: &mut W) -> bool {
    match command::parse(line) {
        Ok(Command::Quit) => return false,
        Ok(Command::Empty) => {}
        Ok(Command::Help(text)) => emit(out, &text),
        Ok(Command::List) => emit(out, &render(app)),
        Ok(Command::Dispatch(actions)) => {
            for action in actions {
                app.dispatch(action).await;
            }
            emit(out, &render(app));
        }
        Err(message) => emit(out, &message),
    }
    true
}
