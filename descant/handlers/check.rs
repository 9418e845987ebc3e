//! Background document check: parse the buffer as schema-less YAML off the
//! UI thread and report an error count back through a channel.
//!
//! The UI side only ever touches a [`CheckReport`] pulled from its receiver,
//! so no UI-owned state is reached from the worker.

use thiserror::Error;
use tokio::{
  sync::mpsc::{
    self,
    Receiver,
    Sender,
  },
  time::{
    Duration,
    timeout,
  },
};

/// Outcome of one check, delivered on the UI-side receiver. `message` ends
/// with the `"N error(s)"` summary line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
  pub errors:  usize,
  pub message: String,
}

#[derive(Debug, Error)]
enum CheckError {
  #[error("the file structure represents a string instead of a map")]
  NotAMapping,
  #[error("{0}")]
  Parse(String),
}

/// UI-side handle to the background checker. Requests queued within the
/// quiet period of each other collapse into one parse of the latest text.
/// Dropping the handle flushes any pending request and stops the worker.
pub struct DocumentChecker {
  requests: Sender<String>,
}

impl DocumentChecker {
  /// Spawn the checker task. Must be called from within a tokio runtime.
  pub fn spawn(reports: Sender<CheckReport>, debounce_ms: u64) -> Self {
    let (requests, rx) = mpsc::channel(16);
    tokio::spawn(check_worker(rx, reports, Duration::from_millis(debounce_ms)));
    Self { requests }
  }

  /// Queue the current buffer text. Never blocks the caller: a saturated
  /// worker drops the request, and the next edit resubmits anyway.
  pub fn request(&self, text: String) {
    if self.requests.try_send(text).is_err() {
      log::debug!("document checker is saturated, dropping a request");
    }
  }
}

async fn check_worker(
  mut requests: Receiver<String>,
  reports: Sender<CheckReport>,
  quiet: Duration,
) {
  let mut pending: Option<String> = None;
  loop {
    let next = if pending.is_some() {
      // Every new request restarts the quiet period.
      match timeout(quiet, requests.recv()).await {
        Ok(next) => next,
        Err(_elapsed) => {
          publish(&reports, pending.take()).await;
          continue;
        },
      }
    } else {
      requests.recv().await
    };
    match next {
      Some(text) => pending = Some(text),
      None => {
        // The UI side is gone; check whatever it last queued, then stop.
        publish(&reports, pending.take()).await;
        return;
      },
    }
  }
}

async fn publish(reports: &Sender<CheckReport>, pending: Option<String>) {
  let Some(text) = pending else {
    return;
  };
  // Parsing is CPU work; keep it off the async executor.
  let parsed = tokio::task::spawn_blocking(move || check_document(&text)).await;
  if let Ok(report) = parsed {
    let _ = reports.send(report).await;
  }
}

/// Parse `text` as schema-less YAML. A document whose top level is not a
/// mapping counts as one error, like any parse failure.
pub fn check_document(text: &str) -> CheckReport {
  match parse_as_mapping(text) {
    Ok(()) => CheckReport {
      errors:  0,
      message: summary(0),
    },
    Err(err) => CheckReport {
      errors:  1,
      message: format!("{err}\n{}", summary(1)),
    },
  }
}

fn parse_as_mapping(text: &str) -> Result<(), CheckError> {
  let value: serde_yaml::Value =
    serde_yaml::from_str(text).map_err(|err| CheckError::Parse(err.to_string()))?;
  match value {
    serde_yaml::Value::Mapping(_) => Ok(()),
    _ => Err(CheckError::NotAMapping),
  }
}

fn summary(errors: usize) -> String {
  format!("{errors} error{}", if errors == 1 { "" } else { "s" })
}
