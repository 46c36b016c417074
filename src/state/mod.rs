// State module - per-test failure tracking
// Reporting contexts handed to every assertion call

pub mod context;
pub mod recorder;

pub use context::TestContext;
pub use recorder::Recorder;

use serde::Serialize;

/// Test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TestStatus {
    #[default]
    Pass,
    Fail,
    /// Failed and further work in the test case was abandoned
    Fatal,
}

impl TestStatus {
    pub fn is_failed(self) -> bool {
        self != TestStatus::Pass
    }

    /// Escalate the status. A test never returns to a less severe state.
    pub fn escalate(self, to: TestStatus) -> TestStatus {
        match (self, to) {
            (TestStatus::Fatal, _) | (_, TestStatus::Fatal) => TestStatus::Fatal,
            (TestStatus::Fail, _) | (_, TestStatus::Fail) => TestStatus::Fail,
            _ => TestStatus::Pass,
        }
    }
}

/// Capabilities an assertion needs from the test it runs in.
///
/// Implementations are owned by the test case and passed by mutable
/// reference; assertions never keep them past a single call.
pub trait Reporter {
    /// Mark the test as failed and keep running.
    fn fail(&mut self);

    /// Mark the test as failed and note that it cannot meaningfully continue.
    ///
    /// This does not unwind. Callers stop the test by propagating the error
    /// that accompanies the call.
    fn fail_now(&mut self);

    /// Attach a diagnostic message to the test.
    fn log(&mut self, message: &str);

    fn failed(&self) -> bool;

    fn error(&mut self, message: &str) {
        self.log(message);
        self.fail();
    }

    fn fatal(&mut self, message: &str) {
        self.log(message);
        self.fail_now();
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn fail(&mut self) {
        (**self).fail()
    }

    fn fail_now(&mut self) {
        (**self).fail_now()
    }

    fn log(&mut self, message: &str) {
        (**self).log(message)
    }

    fn failed(&self) -> bool {
        (**self).failed()
    }
}
