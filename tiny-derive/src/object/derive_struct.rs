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

use crate::object::attrs::{parse_field_attrs, parse_type_attrs};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, DeriveInput, GenericParam, Member, Type};

struct MemberField<'a> {
    member: Member,
    name: String,
    ty: &'a Type,
    public: bool,
    property: bool,
    obsolete: bool,
}

pub fn derive(ast: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let type_attrs = parse_type_attrs(&ast.attrs)?;

    if let Some(lifetime) = ast.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "TinyObject types must be 'static; lifetime parameters are not supported",
        ));
    }

    let mut generics = ast.generics.clone();
    let type_params: Vec<_> = generics
        .params
        .iter()
        .filter_map(|p| match p {
            GenericParam::Type(tp) => Some(tp.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = generics.make_where_clause();
    for param in &type_params {
        where_clause
            .predicates
            .push(syn::parse_quote!(#param: ::tiny_core::Serializer));
        // Fixed-layout decoding starts from a defaulted value.
        if type_attrs.fixed {
            where_clause
                .predicates
                .push(syn::parse_quote!(#param: ::core::default::Default));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut fields = Vec::new();
    let mut all_members = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(index.into()),
        };
        all_members.push(member.clone());
        let attrs = parse_field_attrs(field)?;
        if attrs.skip {
            continue;
        }
        let name = match &field.ident {
            Some(ident) => ident.to_string(),
            None => index.to_string(),
        };
        fields.push(MemberField {
            member,
            name,
            ty: &field.ty,
            public: matches!(field.vis, syn::Visibility::Public(_)),
            property: attrs.property,
            obsolete: attrs.obsolete,
        });
    }

    let member_descriptors = fields.iter().map(gen_member_descriptor);
    let value_type = !type_attrs.class;
    let components = if type_attrs.fixed {
        let types = fields.iter().map(|f| f.ty);
        quote! {
            Some(|| vec![#(<#types as ::tiny_core::Serializer>::tiny_shape()),*])
        }
    } else {
        quote! { None }
    };
    let fixed_layout = if type_attrs.fixed {
        quote! {
            fn tiny_store(&self, dst: &mut [u8]) -> Result<(), ::tiny_core::Error> {
                ::tiny_core::serializer::fixed::store_members(self, dst)
            }

            fn tiny_load(src: &[u8]) -> Result<Self, ::tiny_core::Error> {
                let mut value = Self {
                    #(#all_members: ::core::default::Default::default(),)*
                };
                ::tiny_core::serializer::fixed::load_members(&mut value, src)?;
                Ok(value)
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #[allow(deprecated)]
        impl #impl_generics ::tiny_core::Serializer for #name #ty_generics #where_clause {
            type Element = Self;

            fn tiny_shape() -> ::tiny_core::TypeShape {
                ::tiny_core::TypeShape::of::<Self>(::tiny_core::ShapeCategory::Struct {
                    value_type: #value_type,
                    components: #components,
                })
            }

            fn tiny_members() -> Vec<::tiny_core::MemberDescriptor<Self>> {
                vec![#(#member_descriptors),*]
            }

            #fixed_layout
        }
    })
}

fn gen_member_descriptor(field: &MemberField) -> TokenStream {
    let MemberField {
        member, name, ty, ..
    } = field;
    let kind = if field.property {
        quote! { ::tiny_core::MemberKind::Property }
    } else {
        quote! { ::tiny_core::MemberKind::Field }
    };
    let visibility = if field.public {
        quote! { ::tiny_core::Visibility::Public }
    } else {
        quote! { ::tiny_core::Visibility::Private }
    };
    let obsolete = field.obsolete;
    quote! {
        ::tiny_core::MemberDescriptor::new(
            #name,
            #kind,
            #visibility,
            #obsolete,
            <#ty as ::tiny_core::Serializer>::tiny_shape,
            |this: &Self, dst: &mut [u8]| {
                <#ty as ::tiny_core::Serializer>::tiny_store(&this.#member, dst)
            },
            |this: &mut Self, src: &[u8]| {
                this.#member = <#ty as ::tiny_core::Serializer>::tiny_load(src)?;
                Ok(())
            },
        )
    }
}
