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

use syn::{Attribute, Field, Ident};

/// Options from `#[tiny(...)]` on the type.
#[derive(Debug, Default)]
pub struct TypeAttrs {
    pub fixed: bool,
    pub class: bool,
}

/// Options from `#[tiny(...)]` and `#[deprecated]` on one field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub property: bool,
    pub skip: bool,
    pub obsolete: bool,
}

pub fn parse_type_attrs(attrs: &[Attribute]) -> syn::Result<TypeAttrs> {
    let mut parsed = TypeAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("tiny")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("fixed") {
                parsed.fixed = true;
                Ok(())
            } else if meta.path.is_ident("class") {
                parsed.class = true;
                Ok(())
            } else {
                Err(meta.error("expected `fixed` or `class`"))
            }
        })?;
    }
    Ok(parsed)
}

pub fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs {
        obsolete: field.attrs.iter().any(|a| a.path().is_ident("deprecated")),
        ..FieldAttrs::default()
    };
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("tiny")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("property") {
                parsed.property = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `property` or `skip`"))
            }
        })?;
    }
    Ok(parsed)
}

const INT_REPRS: [&str; 8] = ["i8", "u8", "i16", "u16", "i32", "u32", "i64", "u64"];

/// Integer type named by `#[repr(..)]`, if the enum has one.
pub fn parse_int_repr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    let mut repr = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.input.peek(syn::token::Paren) {
                // align(N) and packed(N)
                let _args;
                syn::parenthesized!(_args in meta.input);
            } else if let Some(ident) = meta.path.get_ident() {
                if INT_REPRS.contains(&ident.to_string().as_str()) {
                    repr = Some(ident.clone());
                }
            }
            Ok(())
        })?;
    }
    Ok(repr)
}
