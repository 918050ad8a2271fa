mod helpers;

use helpers::{get_option_inner_type, has_skip_update_attr, merge_variants};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Generates `<Name>Update` for a library config struct.
///
/// Every field `T` becomes `Option<T>` and every `Option<T>` becomes `OptionUpdate<T>`.
/// Fields annotated with `#[skip_update]` are left out and can only be set at instantiation.
#[proc_macro_derive(ValenceLibraryInterface, attributes(skip_update))]
pub fn valence_library_interface_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;
    let update_name = format_ident!("{}Update", name);
    let vis = &ast.vis;

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields,
            _ => {
                return syn::Error::new(
                    name.span(),
                    "ValenceLibraryInterface only works on structs with named fields",
                )
                .to_compile_error()
                .into()
            }
        },
        _ => {
            return syn::Error::new(name.span(), "ValenceLibraryInterface only works on structs")
                .to_compile_error()
                .into()
        }
    };

    let updatable_fields: Vec<_> = fields
        .named
        .iter()
        .filter(|f| !has_skip_update_attr(&f.attrs))
        .collect();

    let update_fields = updatable_fields.iter().map(|f| {
        let name = &f.ident;
        let ty = &f.ty;
        let vis = &f.vis;

        if let Some(inner_type) = get_option_inner_type(ty) {
            quote! {
                #vis #name: OptionUpdate<#inner_type>,
            }
        } else {
            quote! {
                #[serde(skip_serializing_if = "Option::is_none")]
                #vis #name: Option<#ty>,
            }
        }
    });

    let update_raw_fields = updatable_fields.iter().map(|f| {
        let name = &f.ident;

        if get_option_inner_type(&f.ty).is_some() {
            quote! {
                match &self.#name {
                    OptionUpdate::Set(value) => raw_config.#name = value.clone(),
                    OptionUpdate::None => {}
                }
            }
        } else {
            quote! {
                if let Some(value) = &self.#name {
                    raw_config.#name = value.clone();
                }
            }
        }
    });

    let expanded = quote! {
        use valence_library_utils::{
            raw_config::{load_raw_library_config, save_raw_library_config},
            LibraryConfigUpdateTrait, OptionUpdate,
        };

        #[cw_serde]
        #[derive(Default)]
        #vis struct #update_name {
            #(#update_fields)*
        }

        impl LibraryConfigUpdateTrait for #update_name {
            fn update_raw(
                &self,
                storage: &mut dyn cosmwasm_std::Storage,
            ) -> cosmwasm_std::StdResult<()> {
                let mut raw_config = load_raw_library_config::<#name>(storage)?;

                #(#update_raw_fields)*

                save_raw_library_config(storage, &raw_config)
            }
        }
    };

    TokenStream::from(expanded)
}

/// Adds the queries every library answers: processor, validated config and raw config.
#[proc_macro_attribute]
pub fn valence_library_query(metadata: TokenStream, input: TokenStream) -> TokenStream {
    merge_variants(
        metadata,
        input,
        quote!(
            enum ValenceLibraryQuery {
                /// Query to get the processor address.
                #[returns(Addr)]
                GetProcessor {},
                /// Query to get the library configuration.
                #[returns(Config)]
                GetLibraryConfig {},
                #[returns(LibraryConfig)]
                GetRawLibraryConfig {},
            }
        )
        .into(),
    )
}
