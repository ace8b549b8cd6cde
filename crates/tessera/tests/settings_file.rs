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

use std::io::Write;
use tessera::{AnyArray, ByteOrder, NumericKind, PolicyKind, Settings, SettingsError, Strided};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[codec]\nbyte_order = \"little\"\n\n[convert]\npolicy = \"clamp\"\nsrc_signed = false"
    )
    .unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.codec.byte_order, ByteOrder::Little);
    assert_eq!(settings.convert.policy, PolicyKind::Clamp);
    assert!(!settings.convert.src_signed);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    match Settings::load(&path) {
        Err(SettingsError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn test_configured_pipeline() {
    // 16-bit unsigned samples, clamped into unsigned bytes, stored big-endian.
    let settings = Settings::from_toml_str(
        r#"
        [buffer]
        block_size = 4
        [convert]
        policy = "clamp"
        src_signed = false
        dst_signed = false
        "#,
    )
    .unwrap();

    let mut buffer = settings.any_chunked_buffer(NumericKind::Int16).unwrap();
    buffer
        .append_any(&tessera::NumericVec::from(vec![10i16, 300, -1]))
        .unwrap();
    buffer
        .append_any(&tessera::NumericVec::from(vec![255i16, 256]))
        .unwrap();
    let samples = buffer.materialize();

    let bytes = settings.converter().convert(&samples, NumericKind::Int8).unwrap();
    assert_eq!(bytes, AnyArray::from(vec![10i8, -1, -1, -1, -1]));

    let codec = settings.byte_codec();
    let encoded = codec.encode_array(&bytes).unwrap();
    assert_eq!(encoded, vec![10u8, 255, 255, 255, 255]);
    let decoded: Vec<i8> = codec.decode(&encoded, Strided::CONTIGUOUS, None).unwrap();
    assert_eq!(AnyArray::from(decoded), bytes);
}
