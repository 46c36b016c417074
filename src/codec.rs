// Decoders for stream assertions

use crate::error::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::de::IoRead;
use std::io::Read;

/// Produces one value of a requested shape from an underlying stream.
///
/// Each call consumes input. Once the stream is drained further calls
/// return [`DecodeError::Exhausted`] (or a format error for formats that
/// cannot tell the difference).
pub trait Decoder {
    fn decode<T: DeserializeOwned>(&mut self) -> Result<T, DecodeError>;
}

impl<D: Decoder + ?Sized> Decoder for &mut D {
    fn decode<T: DeserializeOwned>(&mut self) -> Result<T, DecodeError> {
        (**self).decode()
    }
}

/// Streaming JSON decoder.
///
/// Values are read one at a time, so a body holding several concatenated
/// JSON documents can be consumed by successive assertions.
pub struct JsonDecoder<R: Read> {
    de: serde_json::Deserializer<IoRead<R>>,
}

impl<R: Read> JsonDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            de: serde_json::Deserializer::from_reader(reader),
        }
    }
}

impl<R: Read> Decoder for JsonDecoder<R> {
    fn decode<T: DeserializeOwned>(&mut self) -> Result<T, DecodeError> {
        // end() succeeds only when nothing but whitespace is left
        match self.de.end() {
            Ok(()) => return Err(DecodeError::Exhausted),
            Err(e) if e.is_io() => return Err(DecodeError::Io(e.into())),
            Err(_) => {}
        }

        Ok(T::deserialize(&mut self.de)?)
    }
}

/// TOML decoder. The remaining stream is read as a single document.
pub struct TomlDecoder<R: Read> {
    reader: R,
}

impl<R: Read> TomlDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> Decoder for TomlDecoder<R> {
    fn decode<T: DeserializeOwned>(&mut self) -> Result<T, DecodeError> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;

        if content.trim().is_empty() {
            return Err(DecodeError::Exhausted);
        }

        Ok(toml::from_str(&content)?)
    }
}
