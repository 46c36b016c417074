// In-memory reporter

use super::{Reporter, TestStatus};
use serde::Serialize;

/// Reporter that only records what happened.
///
/// Useful for exercising assertions whose failure is the expected outcome:
/// the recorder can be inspected afterwards and never fails the enclosing
/// test by itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recorder {
    status: TestStatus,
    messages: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TestStatus {
        self.status
    }

    pub fn is_fatal(&self) -> bool {
        self.status == TestStatus::Fatal
    }

    /// Messages in the order they were logged
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Reporter for Recorder {
    fn fail(&mut self) {
        self.status = self.status.escalate(TestStatus::Fail);
    }

    fn fail_now(&mut self) {
        self.status = self.status.escalate(TestStatus::Fatal);
    }

    fn log(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn failed(&self) -> bool {
        self.status.is_failed()
    }
}
