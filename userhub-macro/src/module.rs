use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Attribute, ItemStruct, Path, Token, Type,
};

struct ModuleItem {
    attrs: Vec<Attribute>,
    path: Path,
}

impl Parse for ModuleItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let path = input.parse()?;
        Ok(ModuleItem { attrs, path })
    }
}

/// A trait binding: `(dyn Trait => Impl)`
struct BindingItem {
    trait_type: Type,
    impl_type: Path,
}

impl Parse for BindingItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        syn::parenthesized!(content in input);

        let trait_type: Type = content.parse()?;
        content.parse::<Token![=>]>()?;
        let impl_type: Path = content.parse()?;

        Ok(BindingItem {
            trait_type,
            impl_type,
        })
    }
}

#[derive(Default)]
struct ModuleArgs {
    imports: Vec<ModuleItem>,
    controllers: Vec<ModuleItem>,
    providers: Vec<ModuleItem>,
    bindings: Vec<BindingItem>,
}

impl Parse for ModuleArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = ModuleArgs::default();

        while !input.is_empty() {
            let name: syn::Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let content;
            syn::bracketed!(content in input);

            match name.to_string().as_str() {
                "imports" => {
                    args.imports = content
                        .parse_terminated(ModuleItem::parse, Token![,])?
                        .into_iter()
                        .collect();
                }
                "controllers" => {
                    args.controllers = content
                        .parse_terminated(ModuleItem::parse, Token![,])?
                        .into_iter()
                        .collect();
                }
                "providers" => {
                    args.providers = content
                        .parse_terminated(ModuleItem::parse, Token![,])?
                        .into_iter()
                        .collect();
                }
                "bindings" => {
                    args.bindings = content
                        .parse_terminated(BindingItem::parse, Token![,])?
                        .into_iter()
                        .collect();
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        name,
                        "unknown #[module] key, expected imports, controllers, providers or bindings",
                    ))
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

pub fn module_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ModuleArgs);
    let input = parse_macro_input!(item as ItemStruct);
    let expanded = generate_module_impl(&args, &input);

    TokenStream::from(expanded)
}

fn generate_module_impl(args: &ModuleArgs, input: &ItemStruct) -> TokenStream2 {
    let module_name = &input.ident;

    let import_registrations = args.imports.iter().map(|item| {
        let path = &item.path;
        let attrs = &item.attrs;
        quote! {
            #(#attrs)*
            <#path as ::userhub::module::Module>::register(container)?;
        }
    });

    let binding_registrations = args.bindings.iter().map(|binding| {
        let trait_type = &binding.trait_type;
        let impl_type = &binding.impl_type;
        quote! {
            container.register_trait::<#trait_type, #impl_type, _>(|i| {
                i as ::std::sync::Arc<#trait_type>
            });
        }
    });

    // Providers and controllers are constructed the same way; the order of
    // the list is the resolution order.
    let instance_registrations = args
        .providers
        .iter()
        .chain(args.controllers.iter())
        .map(|item| {
            let path = &item.path;
            let attrs = &item.attrs;
            quote! {
                #(#attrs)*
                {
                    let instance = <#path as ::userhub::di::Injectable>::inject(container)?;
                    container.register(instance);
                }
            }
        });

    let module_label = module_name.to_string();

    quote! {
        #input

        impl ::userhub::module::Module for #module_name {
            fn name() -> &'static str {
                #module_label
            }

            fn register(
                container: &mut ::userhub::di::Container
            ) -> ::userhub::di::Result<()> {
                ::tracing::debug!(module = #module_label, "registering module");

                #(#binding_registrations)*

                #(#import_registrations)*

                #(#instance_registrations)*

                Ok(())
            }
        }
    }
}
