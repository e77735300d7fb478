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

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Length prefix written for an absent string, array or list.
pub const NULL_LENGTH: i32 = -1;

/// Every string and container payload starts with a 4-byte length.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Size of the presence byte in front of a nullable payload.
pub const PRESENCE_FLAG_SIZE: usize = 1;

/// Presence byte values for nullable wrappers.
///
/// A nullable bool folds its payload into the flag: `0` absent, `1` false, `2` true.
pub mod presence_flag {
    pub const ABSENT: u8 = 0;
    pub const PRESENT: u8 = 1;
    pub const BOOL_FALSE: u8 = 1;
    pub const BOOL_TRUE: u8 = 2;
}

/// Closed set of byte layouts a type can be serialized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum SerializationKind {
    None = 0,
    Object = 1,
    String = 2,
    Bool = 3,
    I8 = 4,
    U8 = 5,
    I16 = 6,
    U16 = 7,
    I32 = 8,
    U32 = 9,
    I64 = 10,
    U64 = 11,
    Half = 12,
    F32 = 13,
    F64 = 14,
    Char = 15,
    Decimal = 16,
    DateTime = 17,
    DateTimeOffset = 18,
    TimeSpan = 19,
    FixedStruct2F = 20,
    FixedStruct3F = 21,
    FixedStruct4F = 22,
    FixedStruct5F = 23,
    FixedStruct6F = 24,
    FixedStruct2I = 25,
    FixedStruct3I = 26,
    FixedStruct4I = 27,
    PrimitiveArray = 28,
    ObjectArray = 29,
    PrimitiveList = 30,
    ObjectList = 31,
    PrimitiveNullable = 32,
    ObjectNullable = 33,
}

/// Component type of a fixed-layout struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    F32,
    I32,
}

impl Component {
    #[inline(always)]
    pub const fn size(self) -> usize {
        4
    }
}

impl SerializationKind {
    /// Scalars are the well-known single values: numbers, bool, char, decimal and time types.
    #[inline(always)]
    pub const fn is_scalar(self) -> bool {
        (self as u8) >= (SerializationKind::Bool as u8)
            && (self as u8) <= (SerializationKind::TimeSpan as u8)
    }

    #[inline(always)]
    pub const fn is_fixed_struct(self) -> bool {
        (self as u8) >= (SerializationKind::FixedStruct2F as u8)
            && (self as u8) <= (SerializationKind::FixedStruct4I as u8)
    }

    /// Kinds whose encoded size is known from the kind alone.
    #[inline(always)]
    pub const fn is_fixed_layout(self) -> bool {
        self.is_scalar() || self.is_fixed_struct()
    }

    #[inline(always)]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            SerializationKind::PrimitiveArray
                | SerializationKind::ObjectArray
                | SerializationKind::PrimitiveList
                | SerializationKind::ObjectList
        )
    }

    #[inline(always)]
    pub const fn is_nullable(self) -> bool {
        matches!(
            self,
            SerializationKind::PrimitiveNullable | SerializationKind::ObjectNullable
        )
    }

    /// Whether the default dispatch has a routine for this kind.
    #[inline(always)]
    pub const fn is_encodable(self) -> bool {
        self.is_fixed_layout()
            || matches!(
                self,
                SerializationKind::String
                    | SerializationKind::PrimitiveArray
                    | SerializationKind::PrimitiveList
                    | SerializationKind::PrimitiveNullable
            )
    }

    /// Static size table. Zero for kinds without a fixed size.
    pub const fn primitive_size(self) -> usize {
        match self {
            SerializationKind::Bool | SerializationKind::I8 | SerializationKind::U8 => 1,
            SerializationKind::I16 | SerializationKind::U16 | SerializationKind::Half => 2,
            SerializationKind::I32
            | SerializationKind::U32
            | SerializationKind::F32
            | SerializationKind::Char => 4,
            SerializationKind::I64
            | SerializationKind::U64
            | SerializationKind::F64
            | SerializationKind::DateTime
            | SerializationKind::DateTimeOffset
            | SerializationKind::TimeSpan => 8,
            SerializationKind::Decimal => 16,
            SerializationKind::FixedStruct2F
            | SerializationKind::FixedStruct3F
            | SerializationKind::FixedStruct4F
            | SerializationKind::FixedStruct5F
            | SerializationKind::FixedStruct6F
            | SerializationKind::FixedStruct2I
            | SerializationKind::FixedStruct3I
            | SerializationKind::FixedStruct4I => match self.fixed_components() {
                Some((component, count)) => component.size() * count,
                None => 0,
            },
            _ => 0,
        }
    }

    /// Component type and count of a fixed-layout struct kind.
    pub const fn fixed_components(self) -> Option<(Component, usize)> {
        match self {
            SerializationKind::FixedStruct2F => Some((Component::F32, 2)),
            SerializationKind::FixedStruct3F => Some((Component::F32, 3)),
            SerializationKind::FixedStruct4F => Some((Component::F32, 4)),
            SerializationKind::FixedStruct5F => Some((Component::F32, 5)),
            SerializationKind::FixedStruct6F => Some((Component::F32, 6)),
            SerializationKind::FixedStruct2I => Some((Component::I32, 2)),
            SerializationKind::FixedStruct3I => Some((Component::I32, 3)),
            SerializationKind::FixedStruct4I => Some((Component::I32, 4)),
            _ => None,
        }
    }

    /// Inverse of [`SerializationKind::fixed_components`].
    pub const fn fixed_struct(component: Component, count: usize) -> Option<SerializationKind> {
        match (component, count) {
            (Component::F32, 2) => Some(SerializationKind::FixedStruct2F),
            (Component::F32, 3) => Some(SerializationKind::FixedStruct3F),
            (Component::F32, 4) => Some(SerializationKind::FixedStruct4F),
            (Component::F32, 5) => Some(SerializationKind::FixedStruct5F),
            (Component::F32, 6) => Some(SerializationKind::FixedStruct6F),
            (Component::I32, 2) => Some(SerializationKind::FixedStruct2I),
            (Component::I32, 3) => Some(SerializationKind::FixedStruct3I),
            (Component::I32, 4) => Some(SerializationKind::FixedStruct4I),
            _ => None,
        }
    }
}
