//! `#[derive(NamedVecOps)]` for structs whose named fields are the components
//! of a `fixed_vec::FixedVector`.
//!
//! ```
//! use fixed_vec::{NamedVecOps, vec3};
//! use fixed_vec_derive::NamedVecOps;
//!
//! #[derive(Debug, Copy, Clone, PartialEq, NamedVecOps)]
//! struct ViewAngles<T> {
//!     pitch: T,
//!     yaw: T,
//!     roll: T,
//! }
//!
//! let view = ViewAngles { pitch: 100.0_f32, yaw: 30.0, roll: 4.0 };
//! let mut fixed = view.to_fixed();
//! fixed.clamp_angle();
//! assert_eq!(fixed, vec3(89.0, 30.0, 0.0));
//! ```
//!
//! Every field must be spelled with the same type tokens as the first one;
//! `f32` and `core::primitive::f32` count as different.
//!
//! ```compile_fail
//! use fixed_vec_derive::NamedVecOps;
//!
//! #[derive(Copy, Clone, NamedVecOps)]
//! struct Mixed {
//!     x: f32,
//!     y: core::primitive::f32,
//! }
//! ```
//!
//! Tuple structs have no field names to order by:
//!
//! ```compile_fail
//! use fixed_vec_derive::NamedVecOps;
//!
//! #[derive(Copy, Clone, NamedVecOps)]
//! struct Pair(f32, f32);
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields};

#[proc_macro_derive(NamedVecOps)]
pub fn named_vec_ops_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data_struct) => {
            if let Fields::Named(fields_named) = &data_struct.fields {
                &fields_named.named
            } else {
                return Err(syn::Error::new_spanned(
                    name,
                    "NamedVecOps can only be derived for structs with named fields",
                ));
            }
        }
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "NamedVecOps can only be derived for structs",
            ));
        }
    };

    // The first field decides the scalar, the rest have to agree with it
    let scalar = match fields.first() {
        Some(field) => &field.ty,
        None => {
            return Err(syn::Error::new_spanned(
                name,
                "NamedVecOps needs at least one field",
            ));
        }
    };
    let scalar_repr = quote!(#scalar).to_string();
    for field in fields.iter().skip(1) {
        let ty = &field.ty;
        if quote!(#ty).to_string() != scalar_repr {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "every NamedVecOps field must be spelled as the same type `{scalar_repr}` as the first field"
                ),
            ));
        }
    }

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote! { #scalar: ::fixed_vec::Scalar });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let n_literal = syn::Index::from(fields.len());
    let field_names: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let field_indexes: Vec<_> = (0..fields.len()).map(syn::Index::from).collect();

    Ok(quote! {
        impl #impl_generics ::fixed_vec::NamedVecOps<#scalar, #n_literal> for #name #ty_generics #where_clause {
            fn to_fixed(&self) -> ::fixed_vec::FixedVector<#scalar, #n_literal> {
                ::fixed_vec::FixedVector::new([
                    #(self.#field_names),*
                ])
            }
            fn from_fixed(v: &::fixed_vec::FixedVector<#scalar, #n_literal>) -> Self {
                Self {
                    #(#field_names: v[#field_indexes]),*
                }
            }
        }
    })
}
