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

use serde::{Deserialize, Serialize};
use tessera::{ArrayDescriptor, NumericKind};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Layer {
    descriptor: ArrayDescriptor,
}

#[test]
fn test_descriptor_round_trips_as_text() {
    let layer = Layer {
        descriptor: ArrayDescriptor::new(NumericKind::Float32, 3).unwrap(),
    };
    let text = toml::to_string(&layer).unwrap();
    assert_eq!(text.trim(), "descriptor = \"float32[][][]\"");
    assert_eq!(toml::from_str::<Layer>(&text).unwrap(), layer);
}

#[test]
fn test_descriptor_without_rank_is_rejected() {
    let err = toml::from_str::<Layer>("descriptor = \"int16\"").unwrap_err();
    assert!(err.to_string().contains("invalid rank 0"));

    assert!(toml::from_str::<Layer>("descriptor = { kind = \"int16\", rank = 0 }").is_err());
    assert!(toml::from_str::<Layer>("descriptor = \"int128[]\"").is_err());
}
