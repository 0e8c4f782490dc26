use proc_macro2::{Span, TokenStream};
use syn::{
    spanned::Spanned, Data, Field, Fields, GenericParam, Generics, Ident, ImplGenerics,
    TypeGenerics, WhereClause,
};

pub struct TraitInfo {
    /// The std::ops trait to implement
    pub ident: Ident,
    /// The trait's method, e.g. `add_assign`
    pub fn_ident: Ident,
    pub is_scalar_op: bool,
    pub is_assign_op: bool,
}

impl TraitInfo {
    pub fn new(full_name: &str) -> Self {
        // *Scalar is our own indicator
        // Check if its present and get the real trait to implement
        let (trait_name, is_scalar_op) = match full_name.strip_suffix("Scalar") {
            Some(name) => (name, true),
            None => (full_name, false),
        };

        let is_assign_op = trait_name.ends_with("Assign");

        // AddAssign -> add_assign
        let snake_case: String = trait_name.chars().fold(String::new(), |mut acc, c| {
            if c.is_uppercase() && !acc.is_empty() {
                acc.push('_');
            }
            acc.extend(c.to_lowercase());
            acc
        });

        Self {
            ident: Ident::new(trait_name, Span::call_site()),
            fn_ident: Ident::new(&snake_case, Span::call_site()),
            is_scalar_op,
            is_assign_op,
        }
    }
}

pub struct ParsedGenerics<'a> {
    pub generic_param: Ident,
    pub impl_generics: ImplGenerics<'a>,
    pub type_generics: TypeGenerics<'a>,
    pub where_clause: Option<&'a WhereClause>,
}

pub fn parse_generics(generics: &Generics) -> Result<ParsedGenerics, Vec<(&str, Option<Span>)>> {
    let mut generic_param = None;
    let mut errors = vec![];
    for g in generics.params.iter() {
        match g {
            GenericParam::Type(t) => {
                if generic_param.is_some() {
                    errors.push(("Only one generic type param supported", Some(t.span())));
                }
                generic_param = Some(t.ident.clone());
            }
            GenericParam::Lifetime(l) => {
                errors.push(("Lifetimes not supported", Some(l.span())));
            }
            GenericParam::Const(c) => {
                errors.push(("Consts not supported", Some(c.span())));
            }
        }
    }

    let generic_param = match generic_param {
        Some(g) if errors.is_empty() => g,
        Some(_) => return Err(errors),
        None => {
            errors.push(("A single generic param expected", None));
            return Err(errors);
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(ParsedGenerics {
        generic_param,
        impl_generics,
        type_generics,
        where_clause,
    })
}

pub fn combined_error(
    prefix: &str,
    default_span: Span,
    errors: Vec<(&str, Option<Span>)>,
) -> syn::Error {
    let mut errors = errors.into_iter().map(|(err, span)| {
        syn::Error::new(span.unwrap_or(default_span), format!("{}: {}", prefix, err))
    });
    // parse_generics never returns an empty error list
    let mut ret = match errors.next() {
        Some(e) => e,
        None => syn::Error::new(default_span, prefix),
    };
    for e in errors {
        ret.combine(e);
    }
    ret
}

/// Returns the named fields of a struct or a compile error for anything else.
pub fn named_fields<'a>(data: &'a Data, span: Span) -> Result<Vec<&'a Field>, TokenStream> {
    match data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.iter().collect()),
            _ => Err(syn::Error::new(span, "Only structs with named fields are supported")
                .to_compile_error()),
        },
        Data::Enum(_) | Data::Union(_) => {
            Err(syn::Error::new(span, "Only structs are supported").to_compile_error())
        }
    }
}
