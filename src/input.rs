//! Password and salt arguments
//!
//! Both accept raw bytes or text. Text is hashed as its UTF-8 encoding;
//! text that arrives in another form (raw bytes claiming to be UTF-8,
//! UTF-16 code units) is validated before any hashing happens.

use std::borrow::Cow;
use std::fmt;

use zeroize::Zeroize;

use crate::error::{BalloonError, Result};

/// Bytes-or-text hashing input
///
/// Owned copies are wiped when the input is dropped. `Debug` shows only
/// the length.
#[derive(Clone, PartialEq, Eq)]
pub struct Input<'a>(Cow<'a, [u8]>);

impl<'a> Input<'a> {
    /// Text given as bytes; rejected unless it is valid UTF-8
    pub fn from_utf8(bytes: &'a [u8]) -> Result<Self> {
        std::str::from_utf8(bytes).map_err(|e| BalloonError::Encoding(e.to_string()))?;
        Ok(Self(Cow::Borrowed(bytes)))
    }

    /// Text given as UTF-16 code units; unpaired surrogates are rejected
    pub fn from_utf16(units: &[u16]) -> Result<Input<'static>> {
        let text = String::from_utf16(units).map_err(|e| BalloonError::Encoding(e.to_string()))?;
        Ok(Input::from(text))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input({} bytes)", self.len())
    }
}

impl Drop for Input<'_> {
    fn drop(&mut self) {
        if let Cow::Owned(bytes) = &mut self.0 {
            bytes.zeroize();
        }
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self(Cow::Borrowed(bytes))
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Input<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Self(Cow::Borrowed(text.as_bytes()))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Self(Cow::Borrowed(text.as_bytes()))
    }
}

impl From<String> for Input<'static> {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text.into_bytes()))
    }
}
