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

//! Exact-type encoding overrides.
//!
//! A resolver registered for `T` replaces the kind-based routine whenever
//! `T` itself is the top-level value being encoded or decoded.

use crate::buffer::Reader;
use crate::error::Error;
use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

/// Hand-written encoding for one concrete type.
pub trait CustomResolver<T>: Send + Sync + 'static {
    /// Exact number of bytes `encode` writes for `value`.
    fn size(&self, value: &T) -> Result<usize, Error>;

    /// Writes `value` into `dst`, which is exactly `size(value)` bytes long.
    fn encode(&self, value: &T, dst: &mut [u8]) -> Result<(), Error>;

    /// Reads a value starting at the reader's cursor and leaves the cursor after it.
    fn decode(&self, reader: &mut Reader) -> Result<T, Error>;
}

/// Type-erased resolver that names its target type at runtime.
///
/// Useful when resolvers are assembled from configuration rather than at
/// compile time. Register one with
/// [`Encoder::register_dyn_resolver`](crate::encoder::Encoder::register_dyn_resolver),
/// which rejects it unless `target_type()` is the type it is registered under.
pub trait DynResolver: Send + Sync + 'static {
    fn target_type(&self) -> TypeId;

    fn size(&self, value: &dyn Any) -> Result<usize, Error>;

    fn encode(&self, value: &dyn Any, dst: &mut [u8]) -> Result<(), Error>;

    fn decode(&self, reader: &mut Reader) -> Result<Box<dyn Any>, Error>;
}

/// Presents a [`DynResolver`] as a typed [`CustomResolver`].
pub(crate) struct DynAdapter<T> {
    inner: Arc<dyn DynResolver>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> DynAdapter<T> {
    pub(crate) fn new(inner: Arc<dyn DynResolver>) -> Result<DynAdapter<T>, Error> {
        if inner.target_type() != TypeId::of::<T>() {
            return Err(Error::invalid_argument(format!(
                "resolver registered for `{}` declares a different target type",
                std::any::type_name::<T>()
            )));
        }
        Ok(DynAdapter {
            inner,
            _marker: PhantomData,
        })
    }
}

impl<T: 'static> CustomResolver<T> for DynAdapter<T> {
    fn size(&self, value: &T) -> Result<usize, Error> {
        self.inner.size(value)
    }

    fn encode(&self, value: &T, dst: &mut [u8]) -> Result<(), Error> {
        self.inner.encode(value, dst)
    }

    fn decode(&self, reader: &mut Reader) -> Result<T, Error> {
        self.inner
            .decode(reader)?
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| {
                Error::invalid_argument(format!(
                    "resolver for `{}` decoded a value of another type",
                    std::any::type_name::<T>()
                ))
            })
    }
}

struct ResolverEntry {
    type_id: TypeId,
    type_name: &'static str,
    /// Holds an `Arc<dyn CustomResolver<T>>` for the entry's type.
    resolver: Box<dyn Any + Send + Sync>,
}

/// Ordered list of resolvers, at most one per exact type.
///
/// Lookups scan linearly; applications register a handful of resolvers,
/// usually at startup.
#[derive(Default)]
pub struct CustomResolverRegistry {
    entries: Vec<ResolverEntry>,
}

impl CustomResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `resolver` for `T`, replacing an earlier one in place.
    pub fn register<T: 'static>(&mut self, resolver: Arc<dyn CustomResolver<T>>) {
        let type_id = TypeId::of::<T>();
        let entry = ResolverEntry {
            type_id,
            type_name: std::any::type_name::<T>(),
            resolver: Box::new(resolver),
        };
        match self.entries.iter_mut().find(|e| e.type_id == type_id) {
            Some(existing) => {
                log::info!("replacing custom resolver for `{}`", entry.type_name);
                *existing = entry;
            }
            None => self.entries.push(entry),
        }
    }

    /// Resolver registered for exactly `T`, if any.
    pub fn find<T: 'static>(&self) -> Result<Option<&dyn CustomResolver<T>>, Error> {
        let type_id = TypeId::of::<T>();
        let Some(entry) = self.entries.iter().find(|e| e.type_id == type_id) else {
            return Ok(None);
        };
        match entry.resolver.downcast_ref::<Arc<dyn CustomResolver<T>>>() {
            Some(resolver) => Ok(Some(resolver.as_ref())),
            None => Err(Error::invalid_argument(format!(
                "resolver stored for `{}` does not resolve `{}`",
                entry.type_name,
                std::any::type_name::<T>()
            ))),
        }
    }

    pub fn contains<T: 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.entries.iter().any(|e| e.type_id == type_id)
    }

    /// Registered type names, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
