//! sheen-macros - Derive macros for the Decodable/Encodable contract
//!
//! This crate provides:
//! - `#[derive(Decodable)]` - Build a struct from a JSON object
//! - `#[derive(Encodable)]` - Render a struct as a JSON object
//!
//! `Option<T>` fields are optional; every other field is required. Field
//! behaviour is adjusted with `#[sheen(...)]`:
//!
//! | attribute            | meaning                                            |
//! |----------------------|----------------------------------------------------|
//! | `key = "owner.id"`   | JSON key or key path (defaults to the field name)  |
//! | `nested`             | the field is itself Decodable/Encodable            |
//! | `nested_array`       | the field is a `Vec` of Decodable/Encodable values |
//! | `parsed`             | decoded with `FromStr`, encoded with `Display`     |
//! | `skip`               | never encoded, decoded as `Default::default()`     |
//!
//! Generated code refers to `::sheen`; use `#[sheen(crate = "sheen_core")]` on
//! the struct when depending on `sheen-core` directly.

use darling::ast::Data;
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericArgument, PathArguments, Type, parse_macro_input};

/// Options for the container (`#[sheen(crate = "...")]`)
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sheen), supports(struct_named))]
struct ContainerOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<Ignored, FieldOpts>,

    /// Path to the crate exporting the contract traits
    #[darling(rename = "crate", default)]
    krate: Option<syn::Path>,
}

/// Options for a single field
#[derive(Debug, FromField)]
#[darling(attributes(sheen))]
struct FieldOpts {
    ident: Option<syn::Ident>,
    ty: Type,

    #[darling(default)]
    key: Option<String>,
    #[darling(default)]
    nested: bool,
    #[darling(default)]
    nested_array: bool,
    #[darling(default)]
    parsed: bool,
    #[darling(default)]
    skip: bool,
}

/// How a field maps onto JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Plain,
    Nested,
    NestedArray,
    Parsed,
    Skip,
}

/// A field after validation
struct FieldPlan<'a> {
    ident: &'a syn::Ident,
    key: String,
    kind: FieldKind,
    optional: bool,
}

impl FieldOpts {
    fn kind(&self) -> darling::Result<FieldKind> {
        let flags = [
            (self.nested, FieldKind::Nested),
            (self.nested_array, FieldKind::NestedArray),
            (self.parsed, FieldKind::Parsed),
            (self.skip, FieldKind::Skip),
        ];
        let mut selected = flags.iter().filter(|(set, _)| *set).map(|(_, kind)| *kind);

        match (selected.next(), selected.next()) {
            (None, _) => Ok(FieldKind::Plain),
            (Some(kind), None) => Ok(kind),
            (Some(_), Some(_)) => Err(darling::Error::custom(
                "use at most one of `nested`, `nested_array`, `parsed`, `skip`",
            )),
        }
    }

    fn plan(&self) -> darling::Result<FieldPlan<'_>> {
        let ident = self
            .ident
            .as_ref()
            .ok_or_else(|| darling::Error::unsupported_shape("tuple field"))?;
        let kind = self.kind().map_err(|e| e.with_span(ident))?;
        let key = self.key.clone().unwrap_or_else(|| unraw(ident));

        Ok(FieldPlan {
            ident,
            key,
            kind,
            optional: option_inner(&self.ty).is_some(),
        })
    }
}

impl ContainerOpts {
    fn crate_path(&self) -> TokenStream2 {
        match &self.krate {
            Some(path) => quote!(#path),
            None => quote!(::sheen),
        }
    }

    fn plans(&self) -> darling::Result<Vec<FieldPlan<'_>>> {
        let fields = match &self.data {
            Data::Struct(fields) => fields,
            Data::Enum(_) => return Err(darling::Error::unsupported_shape("enum")),
        };

        let mut errors = darling::Error::accumulator();
        let plans: Vec<FieldPlan<'_>> = fields
            .iter()
            .filter_map(|field| errors.handle(field.plan()))
            .collect();
        errors.finish()?;
        Ok(plans)
    }
}

/// Derive the `Decodable` trait
///
/// # Example
///
/// ```ignore
/// #[derive(Decodable)]
/// struct Repo {
///     id: u64,
///     name: String,
///     #[sheen(key = "description")]
///     desc: Option<String>,
///     #[sheen(nested)]
///     owner: Owner,
///     #[sheen(key = "owner.html_url")]
///     owner_url: url::Url,
/// }
/// ```
#[proc_macro_derive(Decodable, attributes(sheen))]
pub fn derive_decodable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_decodable(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}

/// Derive the `Encodable` trait
///
/// Accepts the same `#[sheen(...)]` attributes as `Decodable`.
#[proc_macro_derive(Encodable, attributes(sheen))]
pub fn derive_encodable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_encodable(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}

fn expand_decodable(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let opts = ContainerOpts::from_derive_input(input)?;
    let krate = opts.crate_path();
    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let fields = opts.plans()?.into_iter().map(|plan| {
        let ident = plan.ident;
        let key = &plan.key;
        let extract = match plan.kind {
            FieldKind::Skip => {
                return quote! { #ident: ::core::default::Default::default() };
            }
            FieldKind::Plain => quote! { decoder.field(#key) },
            FieldKind::Nested => quote! { decoder.nested(#key) },
            FieldKind::NestedArray => quote! { decoder.nested_array(#key) },
            FieldKind::Parsed => quote! { decoder.parsed(#key) },
        };
        if plan.optional {
            quote! { #ident: #extract }
        } else {
            quote! { #ident: #extract? }
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::Decodable for #name #ty_generics #where_clause {
            fn from_json(json: &#krate::JsonObject) -> ::core::option::Option<Self> {
                let decoder = #krate::Decoder::new(json);
                ::core::option::Option::Some(Self {
                    #(#fields,)*
                })
            }
        }
    })
}

fn expand_encodable(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let opts = ContainerOpts::from_derive_input(input)?;
    let krate = opts.crate_path();
    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let steps = opts.plans()?.into_iter().filter_map(|plan| {
        let ident = plan.ident;
        let key = &plan.key;
        let step = match (plan.kind, plan.optional) {
            (FieldKind::Skip, _) => return None,
            (FieldKind::Plain, false) => quote! { .field(#key, &self.#ident) },
            (FieldKind::Plain, true) => quote! { .optional(#key, &self.#ident) },
            (FieldKind::Nested, false) => quote! { .nested(#key, &self.#ident) },
            (FieldKind::Nested, true) => quote! { .optional_nested(#key, &self.#ident) },
            (FieldKind::NestedArray, false) => {
                quote! { .nested_array(#key, self.#ident.as_slice()) }
            }
            (FieldKind::NestedArray, true) => {
                quote! { .optional_nested_array(#key, &self.#ident) }
            }
            (FieldKind::Parsed, false) => quote! { .display(#key, &self.#ident) },
            (FieldKind::Parsed, true) => quote! { .optional_display(#key, &self.#ident) },
        };
        Some(step)
    });

    Ok(quote! {
        impl #impl_generics #krate::Encodable for #name #ty_generics #where_clause {
            fn to_json(&self) -> #krate::JsonObject {
                #krate::Encoder::new()
                    #(#steps)*
                    .build()
            }
        }
    })
}

/// The `T` in `Option<T>`, if `ty` is spelled as an `Option`
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Field name without a raw-identifier prefix (`r#type` -> `type`)
fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
