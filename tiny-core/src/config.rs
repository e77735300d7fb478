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

use crate::meta::{MemberKind, TextCodec, Visibility};

/// How string payloads are written after their 4-byte length prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StringEncoding {
    /// UTF-16 code units in host byte order; the prefix counts code units.
    #[default]
    NativeChar,
    /// One byte per UTF-16 code unit, truncated to its low 8 bits; the prefix counts code units.
    RawByte,
    /// Bytes produced by a named text codec; the prefix counts bytes.
    Text(TextCodec),
}

/// Configuration captured by an [`Encoder`](crate::encoder::Encoder) at construction.
///
/// An encoder never changes its settings while it holds encoded output, so a
/// single encoder cannot mix string encodings inside one stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Whether plain fields are serializable members.
    pub serialize_fields: bool,
    /// Whether members marked `#[tiny(property)]` are serializable members.
    pub serialize_properties: bool,
    /// Whether non-`pub` members are included.
    pub allow_private_members: bool,
    /// Whether `#[deprecated]` members are left out.
    pub ignore_obsolete_members: bool,
    /// Encoding used for every string payload.
    pub default_string_encoding: StringEncoding,
    /// Reserved for a compact integer length prefix. Lengths are always 4 bytes today.
    pub variable_length_prefix: bool,
    /// Reserved for bit-packed bool arrays. Bool arrays always use one byte per element today.
    pub compress_bool_array: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            serialize_fields: true,
            serialize_properties: true,
            allow_private_members: false,
            ignore_obsolete_members: true,
            default_string_encoding: StringEncoding::NativeChar,
            variable_length_prefix: false,
            compress_bool_array: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn is_serialize_fields(&self) -> bool {
        self.serialize_fields
    }

    #[inline(always)]
    pub fn is_serialize_properties(&self) -> bool {
        self.serialize_properties
    }

    #[inline(always)]
    pub fn is_allow_private_members(&self) -> bool {
        self.allow_private_members
    }

    #[inline(always)]
    pub fn is_ignore_obsolete_members(&self) -> bool {
        self.ignore_obsolete_members
    }

    #[inline(always)]
    pub fn string_encoding(&self) -> StringEncoding {
        self.default_string_encoding
    }

    /// Member inclusion rule shared by every member list an encoder hands out.
    pub fn includes_member(&self, kind: MemberKind, visibility: Visibility, obsolete: bool) -> bool {
        let kind_enabled = match kind {
            MemberKind::Field => self.serialize_fields,
            MemberKind::Property => self.serialize_properties,
        };
        kind_enabled
            && (visibility == Visibility::Public || self.allow_private_members)
            && !(obsolete && self.ignore_obsolete_members)
    }
}
