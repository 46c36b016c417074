//! Equality assertions for unit tests.
//!
//! Every assertion takes a [`Reporter`] owned by the running test. A failed
//! comparison marks the reporter failed and the test keeps going; a stream
//! that cannot be decoded is fatal and comes back as an [`ExpectError`] for
//! the test to propagate with `?`.
//!
//! ```
//! use expect::{JsonDecoder, TestContext, equal, not_equal, stream_equal};
//!
//! # fn main() -> Result<(), expect::ExpectError> {
//! let mut t = TestContext::new("starship");
//! equal(&mut t, "enterprise", "enterprise");
//! not_equal(&mut t, "enterprise", "voyager");
//!
//! let body = br#""enterprise""#;
//! stream_equal(&mut t, JsonDecoder::new(&body[..]), &String::from("enterprise"))?;
//! assert!(t.finish().is_ok());
//! # Ok(())
//! # }
//! ```

pub mod assert;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;

pub use assert::{equal, not_equal, stream_equal, stream_not_equal};
pub use codec::{Decoder, JsonDecoder, TomlDecoder};
pub use error::{DecodeError, ExpectError, Failures};
pub use state::{Recorder, Reporter, TestContext, TestStatus};
