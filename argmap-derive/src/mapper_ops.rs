//! Implementation of the `#[derive(MapperOps)]` macro.
//!
//! This module contains the procedural macro implementation that generates
//! the capability marker and the operator overload set for a mapper type.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Generics, Ident, parse_macro_input, parse_quote};

/// Binary operators as `(trait, method, operator tag)`.
const BINARY_OPERATORS: &[(&str, &str, &str)] = &[
    ("Add", "add", "Plus"),
    ("Sub", "sub", "Minus"),
    ("Mul", "mul", "Times"),
    ("Div", "div", "Divide"),
    ("Rem", "rem", "Modulo"),
    ("BitAnd", "bitand", "BitwiseAnd"),
    ("BitOr", "bitor", "BitwiseOr"),
    ("BitXor", "bitxor", "BitwiseXor"),
];

/// Unary operators as `(trait, method, operator tag)`.
const UNARY_OPERATORS: &[(&str, &str, &str)] =
    &[("Neg", "neg", "Negate"), ("Not", "not", "Complement")];

/// Plain value types that may appear on the left of a mapper.
const PRIMITIVES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64", "bool",
];

/// Main implementation of the `MapperOps` derive macro.
pub fn derive_mapper_ops_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

/// Expands a parsed type definition into the generated impls.
pub fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(_) | Data::Enum(_) => generate_mapper_ops(&input.ident, &input.generics),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "MapperOps cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

fn generate_mapper_ops(name: &Ident, generics: &Generics) -> TokenStream2 {
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let mut with_rhs = generics.clone();
    with_rhs
        .params
        .push(parse_quote!(__ArgmapRhs: ::argmap::IntoMapper));
    let (rhs_impl_generics, _, rhs_where_clause) = with_rhs.split_for_impl();

    let binary_impls = BINARY_OPERATORS.iter().map(|(trait_name, method, tag)| {
        let trait_ident = format_ident!("{}", trait_name);
        let method_ident = format_ident!("{}", method);
        let tag_ident = format_ident!("{}", tag);

        let primitive_impls = PRIMITIVES.iter().map(|primitive| {
            let primitive_ident = format_ident!("{}", primitive);
            quote! {
                impl #impl_generics ::core::ops::#trait_ident<#name #type_generics> for #primitive_ident
                #where_clause
                {
                    type Output = ::argmap::Binary<
                        ::argmap::operator::#tag_ident,
                        ::argmap::Value<#primitive_ident>,
                        #name #type_generics,
                    >;

                    #[inline]
                    fn #method_ident(self, rhs: #name #type_generics) -> Self::Output {
                        ::argmap::Binary::new(::argmap::Value::new(self), rhs)
                    }
                }
            }
        });

        quote! {
            impl #rhs_impl_generics ::core::ops::#trait_ident<__ArgmapRhs> for #name #type_generics
            #rhs_where_clause
            {
                type Output = ::argmap::Binary<
                    ::argmap::operator::#tag_ident,
                    Self,
                    <__ArgmapRhs as ::argmap::IntoMapper>::Mapper,
                >;

                #[inline]
                fn #method_ident(self, rhs: __ArgmapRhs) -> Self::Output {
                    ::argmap::Binary::new(self, ::argmap::IntoMapper::into_mapper(rhs))
                }
            }

            #(#primitive_impls)*
        }
    });

    let unary_impls = UNARY_OPERATORS.iter().map(|(trait_name, method, tag)| {
        let trait_ident = format_ident!("{}", trait_name);
        let method_ident = format_ident!("{}", method);
        let tag_ident = format_ident!("{}", tag);

        quote! {
            impl #impl_generics ::core::ops::#trait_ident for #name #type_generics #where_clause {
                type Output = ::argmap::Unary<::argmap::operator::#tag_ident, Self>;

                #[inline]
                fn #method_ident(self) -> Self::Output {
                    ::argmap::Unary::new(self)
                }
            }
        }
    });

    quote! {
        impl #impl_generics ::argmap::Composable for #name #type_generics #where_clause {}

        #(#binary_impls)*

        #(#unary_impls)*
    }
}
