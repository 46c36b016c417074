// Stream assertions - public API only

use expect::{
    DecodeError, ExpectError, JsonDecoder, Recorder, Reporter, TestContext, TomlDecoder,
    stream_equal, stream_not_equal,
};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Starship {
    name: String,
}

fn enterprise() -> Starship {
    Starship {
        name: "enterprise".to_string(),
    }
}

fn voyager() -> Starship {
    Starship {
        name: "voyager".to_string(),
    }
}

/// A recorded HTTP response whose body is the JSON encoding of `enterprise`
fn response() -> http::Response<Vec<u8>> {
    let body = serde_json::to_vec(&enterprise()).expect("failed to marshal payload");
    http::Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(body)
        .expect("failed to build response")
}

#[test]
fn test_stream_equal_succeeds_when_response_matches() {
    // Arrange
    let w = response();
    let mut test = Recorder::new();

    // Act
    let result = stream_equal(&mut test, JsonDecoder::new(w.body().as_slice()), &enterprise());

    // Assert
    assert!(result.is_ok());
    assert!(!test.failed(), "values were not equal");
}

#[test]
fn test_stream_equal_fails_when_response_differs() {
    // Arrange
    let w = response();
    let mut test = Recorder::new();

    // Act
    let result = stream_equal(&mut test, JsonDecoder::new(w.body().as_slice()), &voyager());

    // Assert
    assert!(result.is_ok());
    assert!(test.failed(), "values were equal");
    assert!(!test.is_fatal());
}

#[test]
fn test_stream_not_equal_succeeds_when_response_differs() {
    // Arrange
    let w = response();
    let mut test = Recorder::new();

    // Act
    let result = stream_not_equal(&mut test, JsonDecoder::new(w.body().as_slice()), &voyager());

    // Assert
    assert!(result.is_ok());
    assert!(!test.failed(), "values were equal");
}

#[test]
fn test_stream_not_equal_fails_when_response_matches() {
    // Arrange
    let w = response();
    let mut test = Recorder::new();

    // Act
    let result =
        stream_not_equal(&mut test, JsonDecoder::new(w.body().as_slice()), &enterprise());

    // Assert
    assert!(result.is_ok());
    assert!(test.failed(), "values were not equal");
}

#[test]
fn test_stream_malformed_payload_is_fatal_regardless_of_expected() {
    for expected in [enterprise(), voyager()] {
        let mut eq = Recorder::new();
        let mut ne = Recorder::new();

        let eq_result = stream_equal(&mut eq, JsonDecoder::new(&b"{\"name\":"[..]), &expected);
        let ne_result = stream_not_equal(&mut ne, JsonDecoder::new(&b"not json"[..]), &expected);

        assert!(matches!(eq_result, Err(ExpectError::Decode(DecodeError::Json(_)))));
        assert!(matches!(ne_result, Err(ExpectError::Decode(DecodeError::Json(_)))));
        assert!(eq.is_fatal());
        assert!(ne.is_fatal());
    }
}

#[test]
fn test_stream_drained_body_is_fatal() {
    // Arrange
    let w = response();
    let mut decoder = JsonDecoder::new(w.body().as_slice());
    let mut test = Recorder::new();

    // Act
    let first = stream_equal(&mut test, &mut decoder, &enterprise());
    let second = stream_equal(&mut test, &mut decoder, &enterprise());

    // Assert
    assert!(first.is_ok());
    assert!(matches!(second, Err(ExpectError::Decode(DecodeError::Exhausted))));
    assert!(test.is_fatal());
}

#[test]
fn test_stream_reads_consecutive_values() {
    // Arrange
    let body = r#"{"name":"enterprise"}
{"name":"voyager"}"#;
    let mut decoder = JsonDecoder::new(Cursor::new(body));
    let mut test = Recorder::new();

    // Act
    stream_equal(&mut test, &mut decoder, &enterprise()).unwrap();
    stream_equal(&mut test, &mut decoder, &voyager()).unwrap();

    // Assert
    assert!(!test.failed());
}

#[test]
fn test_stream_equal_with_toml_decoder() {
    // Arrange
    let mut test = Recorder::new();

    // Act
    stream_equal(
        &mut test,
        TomlDecoder::new(Cursor::new("name = \"enterprise\"\n")),
        &enterprise(),
    )
    .unwrap();
    stream_not_equal(
        &mut test,
        TomlDecoder::new(Cursor::new("name = \"enterprise\"\n")),
        &voyager(),
    )
    .unwrap();

    // Assert
    assert!(!test.failed());
}

#[test]
fn test_stream_decode_failure_stops_the_test_case() {
    fn run(t: &mut TestContext) -> anyhow::Result<()> {
        stream_equal(&mut *t, JsonDecoder::new(&b""[..]), &enterprise())?;
        unreachable!("test case continued after a fatal decode failure");
    }

    let mut t = TestContext::new("empty body");
    let err = run(&mut t).unwrap_err();

    assert!(err.to_string().contains("stream is exhausted"));
    let failures = t.finish().unwrap_err();
    assert!(failures.fatal);
}

#[test]
fn test_stream_equal_in_context_passes() -> Result<(), ExpectError> {
    expect::logging::init(false);

    let w = response();
    let mut t = TestContext::new("stream passes");

    stream_equal(&mut t, JsonDecoder::new(w.body().as_slice()), &enterprise())?;
    stream_not_equal(&mut t, JsonDecoder::new(w.body().as_slice()), &voyager())?;

    assert!(t.finish().is_ok());
    Ok(())
}
