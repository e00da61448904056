use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_injectable_impl(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_injectable_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::userhub::di::Injectable for #struct_name #ty_generics #where_clause {
                        fn inject(
                            _container: &::userhub::di::Container
                        ) -> ::userhub::di::Result<Self> {
                            Ok(Self)
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "#[derive(Injectable)] only supports unit structs and structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[derive(Injectable)] can only be applied to structs",
            ))
        }
    };

    let field_injections = fields.iter().map(|field| {
        let field_name = &field.ident;
        let field_type = injectable_type(&field.ty);
        let resolve_method = resolve_method_for(&field_type);

        quote! {
            #field_name: container.#resolve_method::<#field_type>()?
        }
    });

    Ok(quote! {
        impl #impl_generics ::userhub::di::Injectable for #struct_name #ty_generics #where_clause {
            fn inject(
                container: &::userhub::di::Container
            ) -> ::userhub::di::Result<Self> {
                Ok(Self {
                    #(#field_injections),*
                })
            }
        }
    })
}

/// `dyn Trait` fields go through the container's trait bindings.
pub(crate) fn resolve_method_for(ty: &Type) -> TokenStream2 {
    match ty {
        Type::TraitObject(_) => quote!(resolve_trait),
        _ => quote!(resolve),
    }
}

/// Extract the inner type from `Arc<T>` or `Arc<dyn Trait>`
pub(crate) fn injectable_type(ty: &Type) -> Type {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "Arc" {
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(syn::GenericArgument::Type(inner_type)) = args.args.first() {
                        return inner_type.clone();
                    }
                }
            }
        }
    }

    ty.clone()
}
