use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, DataEnum, DeriveInput, GenericArgument, PathArguments, Type,
    TypePath,
};

// Check if theres `skip_update` attribute on the field.
pub(crate) fn has_skip_update_attr(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("skip_update"))
}

pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(TypePath { path, .. }) = ty {
        if let Some(segment) = path.segments.last() {
            if segment.ident == "Option" {
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(GenericArgument::Type(inner_type)) = args.args.first() {
                        return Some(inner_type);
                    }
                }
            }
        }
    }
    None
}

// Merges the variants of two enums.
pub(crate) fn merge_variants(
    metadata: TokenStream,
    left: TokenStream,
    right: TokenStream,
) -> TokenStream {
    use syn::Data::Enum;

    if !metadata.is_empty() {
        return syn::Error::new(proc_macro2::Span::call_site(), "macro takes no arguments")
            .to_compile_error()
            .into();
    }

    let mut left: DeriveInput = parse_macro_input!(left);
    let right: DeriveInput = parse_macro_input!(right);

    if let (
        Enum(DataEnum { variants, .. }),
        Enum(DataEnum {
            variants: to_add, ..
        }),
    ) = (&mut left.data, right.data)
    {
        variants.extend(to_add);

        quote! { #left }.into()
    } else {
        syn::Error::new(left.ident.span(), "variants may only be added for enums")
            .to_compile_error()
            .into()
    }
}
