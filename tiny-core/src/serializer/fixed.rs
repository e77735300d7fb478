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

//! Member-wise layout for structs deriving `TinyObject` with `#[tiny(fixed)]`.
//!
//! Members are written in declaration order, each in one component slot,
//! with no padding. The classifier has already checked that every member is
//! the same `f32` or `i32` component type.

use crate::{bail_unsupported, ensure};
use crate::error::Error;
use crate::meta::MemberDescriptor;
use crate::resolver::classifier::classifier;
use crate::serializer::util::check_slot;
use crate::serializer::Serializer;
use crate::types::Component;
use std::sync::Arc;

fn layout<T: Serializer>() -> Result<(Component, usize), Error> {
    let descriptor = classifier().classify::<T>();
    match descriptor.kind.fixed_components() {
        Some(layout) => Ok(layout),
        None => bail_unsupported!(
            "`{}` of kind {:?} has no fixed layout",
            descriptor.type_name,
            descriptor.kind
        ),
    }
}

fn members<T: Serializer>(count: usize) -> Result<Arc<Vec<MemberDescriptor<T>>>, Error> {
    let members = classifier().members::<T>();
    ensure!(
        members.len() == count,
        Error::invalid_argument(format!(
            "`{}` lays out {} components but declares {} members",
            std::any::type_name::<T>(),
            count,
            members.len()
        ))
    );
    Ok(members)
}

pub fn store_members<T: Serializer>(value: &T, dst: &mut [u8]) -> Result<(), Error> {
    let (component, count) = layout::<T>()?;
    check_slot::<T>(dst.len(), component.size() * count)?;
    let members = members::<T>(count)?;
    for (member, slot) in members.iter().zip(dst.chunks_exact_mut(component.size())) {
        member.store(value, slot)?;
    }
    Ok(())
}

pub fn load_members<T: Serializer>(target: &mut T, src: &[u8]) -> Result<(), Error> {
    let (component, count) = layout::<T>()?;
    check_slot::<T>(src.len(), component.size() * count)?;
    let members = members::<T>(count)?;
    for (member, slot) in members.iter().zip(src.chunks_exact(component.size())) {
        member.load(target, slot)?;
    }
    Ok(())
}
