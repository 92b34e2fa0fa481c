use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::error::IpqsError;
use crate::transport::{Fetch, FetchRequest, FetchResponse};

enum Outcome {
    Respond(u16, String),
    Fail(String),
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub url: String,
    pub request: FetchRequest,
}

impl RecordedCall {
    pub fn form_field(&self, name: &str) -> Option<&str> {
        self.request
            .body
            .as_ref()?
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Fetch double that records every call and replays a canned outcome.
pub(crate) struct RecordingFetch {
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingFetch {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            outcome: Outcome::Respond(status, body.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            outcome: Outcome::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one fetch");
        calls[0].clone()
    }
}

impl Fetch for RecordingFetch {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
        request: FetchRequest,
    ) -> BoxFuture<'a, Result<FetchResponse, IpqsError>> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            request,
        });
        let result = match &self.outcome {
            Outcome::Respond(status, body) => Ok(FetchResponse::new(*status, body.clone())),
            Outcome::Fail(message) => Err(IpqsError::Api(message.clone())),
        };
        async move { result }.boxed()
    }
}

/// Global logger that keeps every formatted message for inspection.
struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

/// Installs the capturing logger. Later calls are no-ops.
pub(crate) fn capture_logs() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Captured lines containing `needle`. Tests run in parallel, so filter on a unique marker.
pub(crate) fn logged_lines_containing(needle: &str) -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}
