use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{parse_quote, spanned::Spanned, DeriveInput, Ident};

use crate::common::{combined_error, named_fields, parse_generics, ParsedGenerics};

// Both impls compare per component with the component type's own epsilon,
// e.g. Vec3<f64> uses f64 as its Epsilon.

fn with_approx_bound(input: &DeriveInput, bound: TokenStream) -> syn::Generics {
    let mut generics = input.generics.clone();
    let param: Option<Ident> = generics.type_params().next().map(|t| t.ident.clone());
    if let Some(t) = param {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#t: #bound<Epsilon = #t>));
    }
    generics
}

pub fn abs_diff_eq(input: DeriveInput, _: &str) -> TokenStream {
    let generics = with_approx_bound(&input, quote!(::approx::AbsDiffEq));
    let ParsedGenerics {
        generic_param: t,
        impl_generics,
        type_generics,
        where_clause,
    } = match parse_generics(&generics) {
        Ok(v) => v,
        Err(errors) => {
            return combined_error("Derive 'AbsDiffEq'", input.ident.span(), errors)
                .to_compile_error();
        }
    };
    let type_ident = &input.ident;

    let fields = match named_fields(&input.data, input.ident.span()) {
        Ok(fields) => fields,
        Err(err) => return err,
    };

    let component_eqs = fields.iter().map(|f| {
        let c = &f.ident;
        quote_spanned! {f.span() =>
            <#t as ::approx::AbsDiffEq>::abs_diff_eq(&self.#c, &other.#c, epsilon)
        }
    });

    quote! {
        impl #impl_generics ::approx::AbsDiffEq for #type_ident #type_generics
        #where_clause
        {
            type Epsilon = #t;

            fn default_epsilon() -> Self::Epsilon {
                <#t as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                #(#component_eqs)&&*
            }
        }
    }
}

pub fn relative_eq(input: DeriveInput, _: &str) -> TokenStream {
    let generics = with_approx_bound(&input, quote!(::approx::RelativeEq));
    let ParsedGenerics {
        generic_param: t,
        impl_generics,
        type_generics,
        where_clause,
    } = match parse_generics(&generics) {
        Ok(v) => v,
        Err(errors) => {
            return combined_error("Derive 'RelativeEq'", input.ident.span(), errors)
                .to_compile_error();
        }
    };
    let type_ident = &input.ident;

    let fields = match named_fields(&input.data, input.ident.span()) {
        Ok(fields) => fields,
        Err(err) => return err,
    };

    let component_eqs = fields.iter().map(|f| {
        let c = &f.ident;
        quote_spanned! {f.span() =>
            <#t as ::approx::RelativeEq>::relative_eq(&self.#c, &other.#c, epsilon, max_relative)
        }
    });

    quote! {
        impl #impl_generics ::approx::RelativeEq for #type_ident #type_generics
        #where_clause
        {
            fn default_max_relative() -> Self::Epsilon {
                <#t as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                #(#component_eqs)&&*
            }
        }
    }
}
