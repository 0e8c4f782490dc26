use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DeriveInput};

use crate::common::{combined_error, named_fields, parse_generics, ParsedGenerics, TraitInfo};

pub fn vec_op(input: DeriveInput, full_name: &str) -> TokenStream {
    let TraitInfo {
        ident: trait_ident,
        fn_ident,
        is_scalar_op,
        is_assign_op,
    } = TraitInfo::new(full_name);

    let ParsedGenerics {
        generic_param,
        impl_generics,
        type_generics,
        where_clause,
    } = match parse_generics(&input.generics) {
        Ok(v) => v,
        Err(errors) => {
            return combined_error(
                &format!("Derive '{}'", full_name),
                input.ident.span(),
                errors,
            )
            .to_compile_error();
        }
    };
    let type_ident = &input.ident;

    let fields = match named_fields(&input.data, input.ident.span()) {
        Ok(fields) => fields,
        Err(err) => return err,
    };

    // Scalar ops use other: T
    let other_tokens = if is_scalar_op {
        quote!(#generic_param)
    } else {
        quote!(#type_ident #type_generics)
    };

    // Scalars are checked by the caller, not all T have is_nan()
    let other_check = if is_scalar_op {
        quote!()
    } else {
        quote!(debug_assert!(!other.has_nans());)
    };

    let component_ops = fields.iter().map(|f| {
        let c = &f.ident;
        let rhs = if is_scalar_op {
            quote!(other)
        } else {
            quote!(other.#c)
        };
        if is_assign_op {
            quote_spanned! {f.span() =>
                ::std::ops::#trait_ident::#fn_ident(&mut self.#c, #rhs);
            }
        } else {
            quote_spanned! {f.span() =>
                #c: ::std::ops::#trait_ident::#fn_ident(self.#c, #rhs),
            }
        }
    });

    if is_assign_op {
        quote! {
            impl #impl_generics ::std::ops::#trait_ident<#other_tokens> for #type_ident #type_generics
            #where_clause
            {
                #[inline]
                fn #fn_ident(&mut self, other: #other_tokens) {
                    debug_assert!(!self.has_nans());
                    #other_check

                    #(#component_ops)*
                }
            }
        }
    } else {
        quote! {
            impl #impl_generics ::std::ops::#trait_ident<#other_tokens> for #type_ident #type_generics
            #where_clause
            {
                type Output = Self;

                #[inline]
                fn #fn_ident(self, other: #other_tokens) -> Self {
                    debug_assert!(!self.has_nans());
                    #other_check

                    Self {
                        #(#component_ops)*
                    }
                }
            }
        }
    }
}

pub fn neg(input: DeriveInput, _: &str) -> TokenStream {
    let ParsedGenerics {
        impl_generics,
        type_generics,
        where_clause,
        ..
    } = match parse_generics(&input.generics) {
        Ok(v) => v,
        Err(errors) => {
            return combined_error("Derive 'Neg'", input.ident.span(), errors).to_compile_error();
        }
    };
    let type_ident = &input.ident;

    let fields = match named_fields(&input.data, input.ident.span()) {
        Ok(fields) => fields,
        Err(err) => return err,
    };

    let negated_components = fields.iter().map(|f| {
        let c = &f.ident;
        quote_spanned! {f.span() => #c: -self.#c, }
    });

    quote! {
        impl #impl_generics ::std::ops::Neg for #type_ident #type_generics
        #where_clause
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                debug_assert!(!self.has_nans());

                Self {
                    #(#negated_components)*
                }
            }
        }
    }
}
