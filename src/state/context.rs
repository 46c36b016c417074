// Reporter for real test cases

use super::{Recorder, Reporter, TestStatus};
use crate::error::Failures;
use tracing::{debug, error, warn};

/// Reporting context for a single test case.
///
/// Failures are collected while the test keeps running. They reach the
/// test harness either through [`TestContext::finish`] or, if the context
/// is dropped unfinished, by a panic carrying every recorded message.
///
/// ```
/// use expect::{TestContext, equal};
///
/// let mut t = TestContext::new("docs");
/// equal(&mut t, &(1 + 1), &2);
/// t.finish().unwrap();
/// ```
#[derive(Debug)]
pub struct TestContext {
    name: String,
    recorder: Recorder,
    finished: bool,
}

impl TestContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recorder: Recorder::new(),
            finished: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> TestStatus {
        self.recorder.status()
    }

    pub fn messages(&self) -> &[String] {
        self.recorder.messages()
    }

    /// End the test case and hand back the aggregated outcome
    pub fn finish(mut self) -> Result<(), Failures> {
        self.finished = true;
        self.outcome()
    }

    fn outcome(&self) -> Result<(), Failures> {
        if !self.recorder.failed() {
            return Ok(());
        }

        Err(Failures {
            name: self.name.clone(),
            fatal: self.recorder.is_fatal(),
            messages: self.recorder.messages().to_vec(),
        })
    }
}

impl Reporter for TestContext {
    fn fail(&mut self) {
        self.recorder.fail();
    }

    fn fail_now(&mut self) {
        error!(test = %self.name, "test case stopped");
        self.recorder.fail_now();
    }

    fn log(&mut self, message: &str) {
        debug!(test = %self.name, "{}", message);
        self.recorder.log(message);
    }

    fn failed(&self) -> bool {
        self.recorder.failed()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if let Err(failures) = self.outcome() {
            if std::thread::panicking() {
                warn!(test = %self.name, "dropping failures during unwind");
                return;
            }
            panic!("{}", failures);
        }
    }
}
