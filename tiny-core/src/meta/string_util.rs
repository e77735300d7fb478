// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Named text codec used when strings are written through a byte encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextCodec {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Ascii,
    Latin1,
}

const REPLACEMENT: u8 = b'?';

impl TextCodec {
    /// Looks a codec up by its common name. Matching ignores case, `-` and `_`.
    ///
    /// ```
    /// use tiny_core::TextCodec;
    ///
    /// assert_eq!(TextCodec::from_name("UTF-8").unwrap(), TextCodec::Utf8);
    /// assert_eq!(TextCodec::from_name("iso-8859-1").unwrap(), TextCodec::Latin1);
    /// assert!(TextCodec::from_name("klingon").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<TextCodec, Error> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "utf8" => Ok(TextCodec::Utf8),
            "utf16" | "utf16le" | "unicode" => Ok(TextCodec::Utf16Le),
            "utf16be" | "bigendianunicode" | "unicodefffe" => Ok(TextCodec::Utf16Be),
            "utf32" | "utf32le" => Ok(TextCodec::Utf32Le),
            "ascii" | "usascii" => Ok(TextCodec::Ascii),
            "latin1" | "iso88591" | "l1" => Ok(TextCodec::Latin1),
            _ => Err(Error::invalid_argument(format!(
                "unknown text encoding `{}`",
                name
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextCodec::Utf8 => "utf-8",
            TextCodec::Utf16Le => "utf-16le",
            TextCodec::Utf16Be => "utf-16be",
            TextCodec::Utf32Le => "utf-32le",
            TextCodec::Ascii => "us-ascii",
            TextCodec::Latin1 => "iso-8859-1",
        }
    }

    /// Number of bytes [`TextCodec::encode_into`] writes for `s`.
    pub fn byte_count(self, s: &str) -> usize {
        match self {
            TextCodec::Utf8 => s.len(),
            TextCodec::Utf16Le | TextCodec::Utf16Be => s.encode_utf16().count() * 2,
            TextCodec::Utf32Le => s.chars().count() * 4,
            TextCodec::Ascii | TextCodec::Latin1 => s.chars().count(),
        }
    }

    /// Encodes `s` into `dst`, which must be exactly [`TextCodec::byte_count`] long.
    ///
    /// Characters outside the codec's repertoire become `?` for ASCII and Latin-1.
    pub fn encode_into(self, s: &str, dst: &mut [u8]) -> Result<(), Error> {
        let expected = self.byte_count(s);
        if dst.len() != expected {
            return Err(Error::buffer_capacity(expected, dst.len()));
        }
        match self {
            TextCodec::Utf8 => dst.copy_from_slice(s.as_bytes()),
            TextCodec::Utf16Le => {
                for (unit, chunk) in s.encode_utf16().zip(dst.chunks_exact_mut(2)) {
                    chunk.copy_from_slice(&unit.to_le_bytes());
                }
            }
            TextCodec::Utf16Be => {
                for (unit, chunk) in s.encode_utf16().zip(dst.chunks_exact_mut(2)) {
                    chunk.copy_from_slice(&unit.to_be_bytes());
                }
            }
            TextCodec::Utf32Le => {
                for (c, chunk) in s.chars().zip(dst.chunks_exact_mut(4)) {
                    chunk.copy_from_slice(&(c as u32).to_le_bytes());
                }
            }
            TextCodec::Ascii => {
                for (c, b) in s.chars().zip(dst.iter_mut()) {
                    *b = if c.is_ascii() { c as u8 } else { REPLACEMENT };
                }
            }
            TextCodec::Latin1 => {
                for (c, b) in s.chars().zip(dst.iter_mut()) {
                    *b = if (c as u32) <= 0xFF {
                        c as u8
                    } else {
                        REPLACEMENT
                    };
                }
            }
        }
        Ok(())
    }

    pub fn decode(self, bytes: &[u8]) -> Result<String, Error> {
        match self {
            TextCodec::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| Error::encoding_error(format!("invalid utf-8 payload: {}", e))),
            TextCodec::Utf16Le | TextCodec::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(Error::encoding_error(format!(
                        "utf-16 payload has odd length {}",
                        bytes.len()
                    )));
                }
                let units = bytes.chunks_exact(2).map(|chunk| {
                    let pair = [chunk[0], chunk[1]];
                    if self == TextCodec::Utf16Le {
                        u16::from_le_bytes(pair)
                    } else {
                        u16::from_be_bytes(pair)
                    }
                });
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|e| Error::encoding_error(format!("invalid utf-16 payload: {}", e)))
            }
            TextCodec::Utf32Le => {
                if bytes.len() % 4 != 0 {
                    return Err(Error::encoding_error(format!(
                        "utf-32 payload has length {} not divisible by 4",
                        bytes.len()
                    )));
                }
                bytes
                    .chunks_exact(4)
                    .map(|chunk| {
                        let code = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                        char::from_u32(code).ok_or_else(|| {
                            Error::encoding_error(format!("invalid utf-32 code point {:#x}", code))
                        })
                    })
                    .collect()
            }
            TextCodec::Ascii => bytes
                .iter()
                .map(|b| {
                    if b.is_ascii() {
                        Ok(*b as char)
                    } else {
                        Err(Error::encoding_error(format!(
                            "byte {:#04x} is not ascii",
                            b
                        )))
                    }
                })
                .collect(),
            TextCodec::Latin1 => Ok(latin1_to_string(bytes)),
        }
    }
}

impl FromStr for TextCodec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextCodec::from_name(s)
    }
}

impl fmt::Display for TextCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Each byte maps to the code point of the same value.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| *b as char).collect()
}
