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
use crate::meta::TypeShape;
use std::fmt;

type StoreFn<T> = fn(&T, &mut [u8]) -> Result<(), Error>;
type LoadFn<T> = fn(&mut T, &[u8]) -> Result<(), Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

/// One serializable member of `T` together with its bound accessors.
///
/// The accessors are plain function pointers generated per member by
/// `#[derive(TinyObject)]`; each is monomorphized for the member's concrete
/// type, so reading or writing a member never goes through `dyn Any`.
pub struct MemberDescriptor<T> {
    name: &'static str,
    kind: MemberKind,
    visibility: Visibility,
    obsolete: bool,
    shape: fn() -> TypeShape,
    store: StoreFn<T>,
    load: LoadFn<T>,
}

impl<T> MemberDescriptor<T> {
    pub fn new(
        name: &'static str,
        kind: MemberKind,
        visibility: Visibility,
        obsolete: bool,
        shape: fn() -> TypeShape,
        store: StoreFn<T>,
        load: LoadFn<T>,
    ) -> MemberDescriptor<T> {
        MemberDescriptor {
            name,
            kind,
            visibility,
            obsolete,
            shape,
            store,
            load,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline(always)]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline(always)]
    pub fn is_obsolete(&self) -> bool {
        self.obsolete
    }

    #[inline(always)]
    pub fn shape(&self) -> TypeShape {
        (self.shape)()
    }

    /// Writes the member's fixed-layout image into `dst`.
    #[inline(always)]
    pub fn store(&self, owner: &T, dst: &mut [u8]) -> Result<(), Error> {
        (self.store)(owner, dst)
    }

    /// Replaces the member's value with the one decoded from `src`.
    #[inline(always)]
    pub fn load(&self, owner: &mut T, src: &[u8]) -> Result<(), Error> {
        (self.load)(owner, src)
    }
}

impl<T> Clone for MemberDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MemberDescriptor<T> {}

impl<T> fmt::Debug for MemberDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("visibility", &self.visibility)
            .field("obsolete", &self.obsolete)
            .field("type", &(self.shape)().name)
            .finish()
    }
}
