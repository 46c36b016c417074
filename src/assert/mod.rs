// Assertion module

pub mod engine;
pub mod message;

pub use engine::{
    AssertionResult, Policy, compare, equal, not_equal, stream_equal, stream_not_equal,
};
