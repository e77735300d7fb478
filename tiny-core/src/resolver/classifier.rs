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

//! Type classification and the process-wide descriptor cache.
//!
//! A type is classified once, from the [`TypeShape`] it reports, into a
//! [`TypeDescriptor`]. Descriptors are shared as `Arc`s and never evicted:
//! a Rust type cannot change shape while the process runs.

use crate::geometry::{
    Bounds, Color, Quaternion, Ray, Rect, RectInt, Vector2, Vector2Int, Vector3, Vector3Int,
    Vector4,
};
use crate::meta::{MemberDescriptor, ShapeCategory, TypeShape};
use crate::serializer::Serializer;
use crate::types::{Component, SerializationKind};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use dashmap::DashMap;
use half::f16;
use rust_decimal::Decimal;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Classification result for one type. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub kind: SerializationKind,
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub is_value_type: bool,
    /// Whether the type has a fixed-size layout, i.e. is a scalar or a fixed-layout struct.
    pub is_primitive: bool,
    pub primitive_size: usize,
    pub is_array: bool,
    /// Dimensions of an array type; zero for everything else.
    pub array_rank: u32,
    /// Set for the generic wrappers, lists and nullables.
    pub is_generic: bool,
    pub element_type: Option<TypeId>,
    pub element_type_name: Option<&'static str>,
    /// `SerializationKind::None` when the type has no element.
    pub element_kind: SerializationKind,
    pub element_is_primitive: bool,
    pub element_primitive_size: usize,
}

impl TypeDescriptor {
    fn new(shape: &TypeShape, kind: SerializationKind) -> TypeDescriptor {
        let is_primitive = kind.is_fixed_layout();
        TypeDescriptor {
            kind,
            type_id: shape.type_id,
            type_name: shape.name,
            is_value_type: shape.is_value_type(),
            is_primitive,
            primitive_size: if is_primitive { kind.primitive_size() } else { 0 },
            is_array: false,
            array_rank: 0,
            is_generic: false,
            element_type: None,
            element_type_name: None,
            element_kind: SerializationKind::None,
            element_is_primitive: false,
            element_primitive_size: 0,
        }
    }

    fn with_element(mut self, element: &TypeDescriptor) -> TypeDescriptor {
        self.element_type = Some(element.type_id);
        self.element_type_name = Some(element.type_name);
        self.element_kind = element.kind;
        self.element_is_primitive = element.is_primitive;
        self.element_primitive_size = element.primitive_size;
        self
    }
}

thread_local! {
    /// Most recently classified type on this thread.
    static LAST_CLASSIFIED: RefCell<Option<Arc<TypeDescriptor>>> = const { RefCell::new(None) };
}

static CLASSIFIER: OnceLock<TypeClassifier> = OnceLock::new();

/// The process-wide classifier.
pub fn classifier() -> &'static TypeClassifier {
    CLASSIFIER.get_or_init(TypeClassifier::new)
}

/// Memoizing classifier keyed by [`TypeId`].
///
/// Lookups take a thread-local single-slot fast path, then the shared
/// concurrent map. Two threads may classify the same new type at the same
/// time; both compute the same descriptor and the map keeps the first one
/// inserted, so every caller ends up sharing a single `Arc`.
pub struct TypeClassifier {
    well_known: HashMap<TypeId, SerializationKind>,
    descriptors: DashMap<TypeId, Arc<TypeDescriptor>>,
    members: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl TypeClassifier {
    fn new() -> TypeClassifier {
        TypeClassifier {
            well_known: well_known_types(),
            descriptors: DashMap::new(),
            members: DashMap::new(),
        }
    }

    /// Descriptor of `T`, computed on first use.
    #[inline]
    pub fn classify<T: Serializer>(&self) -> Arc<TypeDescriptor> {
        let type_id = TypeId::of::<T>();
        let hit = LAST_CLASSIFIED.with(|last| {
            last.borrow()
                .as_ref()
                .filter(|descriptor| descriptor.type_id == type_id)
                .cloned()
        });
        if let Some(descriptor) = hit {
            return descriptor;
        }
        let descriptor = self.classify_shape(T::tiny_shape());
        LAST_CLASSIFIED.with(|last| *last.borrow_mut() = Some(descriptor.clone()));
        descriptor
    }

    /// Descriptor for a shape. Element shapes are classified recursively.
    pub fn classify_shape(&self, shape: TypeShape) -> Arc<TypeDescriptor> {
        if let Some(descriptor) = self.descriptors.get(&shape.type_id) {
            return descriptor.value().clone();
        }
        // Computed without holding a map guard: classifying a container
        // re-enters this function for its element.
        let computed = Arc::new(self.compute(&shape));
        let descriptor = self
            .descriptors
            .entry(shape.type_id)
            .or_insert(computed)
            .value()
            .clone();
        log::debug!(
            "classified `{}` as {:?} (size {})",
            descriptor.type_name,
            descriptor.kind,
            descriptor.primitive_size
        );
        descriptor
    }

    /// Members of `T` with their bound accessors, cached on first use.
    pub fn members<T: Serializer>(&self) -> Arc<Vec<MemberDescriptor<T>>> {
        let type_id = TypeId::of::<T>();
        let cached = self
            .members
            .get(&type_id)
            .map(|entry| entry.value().clone());
        if let Some(Ok(members)) = cached.map(|any| any.downcast::<Vec<MemberDescriptor<T>>>()) {
            return members;
        }
        let members: Arc<dyn Any + Send + Sync> = Arc::new(T::tiny_members());
        let entry = self.members.entry(type_id).or_insert(members).value().clone();
        match entry.downcast::<Vec<MemberDescriptor<T>>>() {
            Ok(members) => members,
            // Keyed by `TypeId`, so the stored list always has type `T`.
            Err(_) => Arc::new(T::tiny_members()),
        }
    }

    /// Whether `type_id` is one of the built-in scalar or geometry types.
    pub fn is_well_known(&self, type_id: TypeId) -> bool {
        self.well_known.contains_key(&type_id)
    }

    /// Number of descriptors cached so far.
    pub fn cached_count(&self) -> usize {
        self.descriptors.len()
    }

    fn compute(&self, shape: &TypeShape) -> TypeDescriptor {
        if let Some(&kind) = self.well_known.get(&shape.type_id) {
            return TypeDescriptor::new(shape, kind);
        }
        match shape.category {
            ShapeCategory::Value => TypeDescriptor::new(shape, SerializationKind::Object),
            ShapeCategory::Enum { underlying } => {
                let underlying = self.classify_shape(underlying());
                TypeDescriptor::new(shape, underlying.kind)
            }
            ShapeCategory::Str => TypeDescriptor::new(shape, SerializationKind::String),
            ShapeCategory::Array { rank, element } => {
                let element = self.classify_shape(element());
                // Only single-dimension arrays have a flat element layout.
                let kind = if rank == 1 && element.is_primitive {
                    SerializationKind::PrimitiveArray
                } else {
                    SerializationKind::ObjectArray
                };
                let mut descriptor = TypeDescriptor::new(shape, kind).with_element(&element);
                descriptor.is_array = true;
                descriptor.array_rank = rank;
                descriptor
            }
            ShapeCategory::List { element } => {
                let element = self.classify_shape(element());
                let kind = if element.is_primitive {
                    SerializationKind::PrimitiveList
                } else {
                    SerializationKind::ObjectList
                };
                let mut descriptor = TypeDescriptor::new(shape, kind).with_element(&element);
                descriptor.is_generic = true;
                descriptor
            }
            ShapeCategory::Nullable { element } => {
                let element = self.classify_shape(element());
                let kind = if element.is_primitive {
                    SerializationKind::PrimitiveNullable
                } else {
                    SerializationKind::ObjectNullable
                };
                let mut descriptor = TypeDescriptor::new(shape, kind).with_element(&element);
                descriptor.is_generic = true;
                descriptor
            }
            ShapeCategory::Struct {
                value_type,
                components,
            } => {
                let kind = match components {
                    Some(components) => fixed_layout_kind(shape, value_type, &components()),
                    None => SerializationKind::Object,
                };
                TypeDescriptor::new(shape, kind)
            }
        }
    }
}

/// Fixed-layout kind for a struct whose members are all `f32` (2 to 6) or
/// all `i32` (2 to 4). Anything else falls back to `Object`.
fn fixed_layout_kind(
    shape: &TypeShape,
    value_type: bool,
    components: &[TypeShape],
) -> SerializationKind {
    let component = match components.first() {
        Some(first) if first.type_id == TypeId::of::<f32>() => Some(Component::F32),
        Some(first) if first.type_id == TypeId::of::<i32>() => Some(Component::I32),
        _ => None,
    };
    let uniform = components
        .iter()
        .all(|c| Some(c.type_id) == components.first().map(|first| first.type_id));
    let kind = match component {
        Some(component) if value_type && uniform => {
            SerializationKind::fixed_struct(component, components.len())
        }
        _ => None,
    };
    match kind {
        Some(kind) => kind,
        None => {
            log::warn!(
                "`{}` asks for a fixed layout but its {} members are not 2-6 f32 or 2-4 i32 \
                 values of a value type; classifying as Object",
                shape.name,
                components.len()
            );
            SerializationKind::Object
        }
    }
}

fn well_known_types() -> HashMap<TypeId, SerializationKind> {
    HashMap::from([
        (TypeId::of::<bool>(), SerializationKind::Bool),
        (TypeId::of::<i8>(), SerializationKind::I8),
        (TypeId::of::<u8>(), SerializationKind::U8),
        (TypeId::of::<i16>(), SerializationKind::I16),
        (TypeId::of::<u16>(), SerializationKind::U16),
        (TypeId::of::<i32>(), SerializationKind::I32),
        (TypeId::of::<u32>(), SerializationKind::U32),
        (TypeId::of::<i64>(), SerializationKind::I64),
        (TypeId::of::<u64>(), SerializationKind::U64),
        (TypeId::of::<f16>(), SerializationKind::Half),
        (TypeId::of::<f32>(), SerializationKind::F32),
        (TypeId::of::<f64>(), SerializationKind::F64),
        (TypeId::of::<char>(), SerializationKind::Char),
        (TypeId::of::<Decimal>(), SerializationKind::Decimal),
        (TypeId::of::<NaiveDateTime>(), SerializationKind::DateTime),
        (TypeId::of::<DateTime<Utc>>(), SerializationKind::DateTimeOffset),
        (TypeId::of::<TimeDelta>(), SerializationKind::TimeSpan),
        (TypeId::of::<Vector2>(), SerializationKind::FixedStruct2F),
        (TypeId::of::<Vector3>(), SerializationKind::FixedStruct3F),
        (TypeId::of::<Vector4>(), SerializationKind::FixedStruct4F),
        (TypeId::of::<Quaternion>(), SerializationKind::FixedStruct4F),
        (TypeId::of::<Color>(), SerializationKind::FixedStruct4F),
        (TypeId::of::<Rect>(), SerializationKind::FixedStruct4F),
        (TypeId::of::<Bounds>(), SerializationKind::FixedStruct6F),
        (TypeId::of::<Ray>(), SerializationKind::FixedStruct6F),
        (TypeId::of::<Vector2Int>(), SerializationKind::FixedStruct2I),
        (TypeId::of::<Vector3Int>(), SerializationKind::FixedStruct3I),
        (TypeId::of::<RectInt>(), SerializationKind::FixedStruct4I),
    ])
}
