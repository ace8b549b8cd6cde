// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Settings
//!
//! Workspace-wide defaults loaded from TOML. Every field is optional in the
//! file; missing fields take the defaults below.
//!
//! ```toml
//! [buffer]
//! block_size = 65536      # non-zero power of two
//!
//! [codec]
//! byte_order = "big"      # "little" | "big"
//! tail = "shorten"        # "shorten" | "reject"
//!
//! [convert]
//! policy = "truncate"     # "truncate" | "clamp"
//! src_signed = true
//! dst_signed = true
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tessera_array::ArrayElement;
use tessera_buffer::{AnyChunkedBuffer, BufferError, ChunkedBuffer, DEFAULT_BLOCK_SIZE};
use tessera_codec::{ByteCodec, TailPolicy};
use tessera_convert::{Converter, PolicyKind};
use tessera_core::{ByteOrder, NumericKind};
use thiserror::Error;

/// Errors raised while loading or validating [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid buffer settings: {0}")]
    Buffer(#[from] BufferError),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferSettings {
    /// Elements per block of a chunked buffer.
    pub block_size: usize,
}

impl Default for BufferSettings {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecSettings {
    pub byte_order: ByteOrder,
    pub tail: TailPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertSettings {
    pub policy: PolicyKind,
    /// Read integer sources as signed.
    pub src_signed: bool,
    /// Clamp into the signed destination range; only read by `clamp`.
    pub dst_signed: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Truncate,
            src_signed: true,
            dst_signed: true,
        }
    }
}

/// Defaults for the codec, buffer and converter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub buffer: BufferSettings,
    pub codec: CodecSettings,
    pub convert: ConvertSettings,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed TOML, unknown keys or
    /// unknown enum values, and [`SettingsError::Buffer`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks the constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let size = self.buffer.block_size;
        if !size.is_power_of_two() {
            return Err(BufferError::InvalidBlockSize { size }.into());
        }
        Ok(())
    }

    #[inline]
    pub fn byte_codec(&self) -> ByteCodec {
        ByteCodec::with_tail(self.codec.byte_order, self.codec.tail)
    }

    #[inline]
    pub fn converter(&self) -> Converter {
        Converter::new(
            self.convert.policy,
            self.convert.src_signed,
            self.convert.dst_signed,
        )
    }

    /// An empty buffer with the configured block size.
    pub fn chunked_buffer<T: ArrayElement>(&self) -> Result<ChunkedBuffer<T>> {
        Ok(ChunkedBuffer::new(self.buffer.block_size)?)
    }

    /// An empty buffer of `kind` with the configured block size.
    pub fn any_chunked_buffer(&self, kind: NumericKind) -> Result<AnyChunkedBuffer> {
        Ok(AnyChunkedBuffer::new(kind, self.buffer.block_size)?)
    }
}
