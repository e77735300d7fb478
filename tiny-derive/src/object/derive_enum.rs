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

use crate::object::attrs::{parse_int_repr, parse_type_attrs};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, DataEnum, DeriveInput, Fields};

/// Unit-only enums are stored as their integer discriminant.
pub fn derive(ast: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &ast.generics,
            "TinyObject enums cannot be generic",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "TinyObject cannot be derived for an enum without variants",
        ));
    }
    if let Some(variant) = data
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "TinyObject enums must have unit variants only",
        ));
    }

    reject_tiny_attrs(ast, data)?;

    let repr = parse_int_repr(&ast.attrs)?.unwrap_or_else(|| format_ident!("i32"));
    let variants: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();
    let type_name = name.to_string();

    Ok(quote! {
        #[allow(deprecated)]
        impl ::tiny_core::Serializer for #name {
            type Element = Self;

            fn tiny_shape() -> ::tiny_core::TypeShape {
                ::tiny_core::TypeShape::of::<Self>(::tiny_core::ShapeCategory::Enum {
                    underlying: <#repr as ::tiny_core::Serializer>::tiny_shape,
                })
            }

            fn tiny_store(&self, dst: &mut [u8]) -> Result<(), ::tiny_core::Error> {
                let discriminant: #repr = match self {
                    #(Self::#variants => Self::#variants as #repr,)*
                };
                <#repr as ::tiny_core::Serializer>::tiny_store(&discriminant, dst)
            }

            fn tiny_load(src: &[u8]) -> Result<Self, ::tiny_core::Error> {
                let discriminant = <#repr as ::tiny_core::Serializer>::tiny_load(src)?;
                #(
                    if discriminant == Self::#variants as #repr {
                        return Ok(Self::#variants);
                    }
                )*
                Err(::tiny_core::Error::invalid_data(format!(
                    "unknown discriminant {} for `{}`",
                    discriminant, #type_name
                )))
            }
        }
    })
}

fn tiny_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|a| a.path().is_ident("tiny"))
}

/// `fixed` and `class` describe struct layouts; enums take no `#[tiny]` options.
fn reject_tiny_attrs(ast: &DeriveInput, data: &DataEnum) -> syn::Result<()> {
    if let Some(attr) = tiny_attr(&ast.attrs) {
        // Names the offending option when it is not a known type attribute.
        parse_type_attrs(&ast.attrs)?;
        return Err(syn::Error::new_spanned(
            attr,
            "`#[tiny(...)]` options apply to structs only",
        ));
    }
    match data.variants.iter().find_map(|v| tiny_attr(&v.attrs)) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "`#[tiny(...)]` is not supported on enum variants",
        )),
        None => Ok(()),
    }
}
