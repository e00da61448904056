use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Attribute, FnArg, ImplItem, ImplItemFn,
    ItemImpl, ItemStruct, LitStr, Meta, Token,
};

use crate::injectable::{injectable_type, resolve_method_for};

const HTTP_METHODS: [&str; 4] = ["get", "post", "delete", "patch"];
const PARAM_MARKERS: [&str; 3] = ["body", "param", "query"];

struct ControllerArgs {
    path: String,
}

impl Parse for ControllerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut path = None;
        while !input.is_empty() {
            let name: syn::Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            if name == "path" {
                let lit: LitStr = input.parse()?;
                path = Some(lit.value());
            } else {
                return Err(syn::Error::new_spanned(
                    name,
                    "unknown #[controller] argument, expected `path`",
                ));
            }
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(ControllerArgs {
            path: path.unwrap_or_default(),
        })
    }
}

pub fn controller_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ControllerArgs);
    let input = parse_macro_input!(item as ItemStruct);
    match generate_controller_impl(&args, &input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_controller_impl(args: &ControllerArgs, input: &ItemStruct) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let base_path = args.path.trim_end_matches('/');
    let injectable_impl = generate_injectable_for_controller(input)?;
    Ok(quote! {
        #input
        #injectable_impl
        impl #struct_name {
            /// Prefix prepended to every route of this controller
            pub fn base_path() -> &'static str { #base_path }
        }
    })
}

fn generate_injectable_for_controller(input: &ItemStruct) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let fields = match &input.fields {
        syn::Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[controller] only supports structs with named fields",
            ))
        }
    };
    let field_injections = fields.iter().map(|field| {
        let field_name = &field.ident;
        let field_type = injectable_type(&field.ty);
        let resolve_method = resolve_method_for(&field_type);
        quote! { #field_name: container.#resolve_method::<#field_type>()? }
    });
    Ok(quote! {
        impl ::userhub::di::Injectable for #struct_name {
            fn inject(container: &::userhub::di::Container) -> ::userhub::di::Result<Self> {
                Ok(Self { #(#field_injections),* })
            }
        }
    })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ParamKind {
    Body,
    Param,
    Query,
    Raw,
}

struct ParamInfo {
    ty: syn::Type,
    kind: ParamKind,
}

struct RouteInfo {
    method: String,
    path: String,
    fn_name: syn::Ident,
    params: Vec<ParamInfo>,
}

pub fn routes_attribute(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemImpl);
    match generate_routes_impl(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_routes_impl(input: ItemImpl) -> syn::Result<TokenStream2> {
    let mut routes: Vec<RouteInfo> = Vec::new();
    let mut clean_items: Vec<ImplItem> = Vec::new();

    for item in input.items.iter() {
        let ImplItem::Fn(method) = item else {
            clean_items.push(item.clone());
            continue;
        };
        match extract_route_info(method)? {
            Some(route_info) => {
                routes.push(route_info);
                let mut clean_method = method.clone();
                clean_method.attrs.retain(|attr| !is_http_method_attr(attr));
                for input in clean_method.sig.inputs.iter_mut() {
                    if let FnArg::Typed(pat_type) = input {
                        pat_type.attrs.retain(|attr| !is_param_attr(attr));
                    }
                }
                clean_items.push(ImplItem::Fn(clean_method));
            }
            None => clean_items.push(item.clone()),
        }
    }

    let route_registrations = routes.iter().map(|route| {
        let method_router = match route.method.as_str() {
            "POST" => quote! { ::axum::routing::post },
            "DELETE" => quote! { ::axum::routing::delete },
            "PATCH" => quote! { ::axum::routing::patch },
            _ => quote! { ::axum::routing::get },
        };

        let path = &route.path;
        let fn_name = &route.fn_name;

        let extractor_patterns: Vec<_> = route
            .params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let temp_ident = format_ident!("__p_{}", i);
                let ty = &p.ty;
                match p.kind {
                    ParamKind::Body => quote! { ::axum::Json(#temp_ident): ::axum::Json<#ty> },
                    ParamKind::Param => {
                        quote! { ::axum::extract::Path(#temp_ident): ::axum::extract::Path<#ty> }
                    }
                    ParamKind::Query => {
                        quote! { ::axum::extract::Query(#temp_ident): ::axum::extract::Query<#ty> }
                    }
                    ParamKind::Raw => quote! { #temp_ident: #ty },
                }
            })
            .collect();

        let internal_args: Vec<_> = (0..route.params.len())
            .map(|i| format_ident!("__p_{}", i))
            .collect();

        // A "/" route is also served on the bare base path
        quote! {
            {
                let method_router = #method_router({
                    let controller = ::std::sync::Arc::clone(&controller);
                    move |#(#extractor_patterns),*| {
                        let controller = ::std::sync::Arc::clone(&controller);
                        async move {
                            use ::axum::response::IntoResponse;
                            controller.#fn_name(#(#internal_args),*).await.into_response()
                        }
                    }
                });
                if #path == "/" && !Self::base_path().is_empty() {
                    router = router.route(Self::base_path(), method_router.clone());
                }
                router = router.route(
                    &::std::format!("{}{}", Self::base_path(), #path),
                    method_router,
                );
            }
        }
    });

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #self_ty #where_clause {
            #(#clean_items)*

            /// Build an axum router serving every annotated route of this controller
            pub fn router<S>(controller: ::std::sync::Arc<Self>) -> ::axum::Router<S>
            where
                S: Clone + Send + Sync + 'static,
            {
                let mut router = ::axum::Router::new();
                #(#route_registrations)*
                router
            }
        }
    })
}

fn extract_route_info(method: &ImplItemFn) -> syn::Result<Option<RouteInfo>> {
    let mut http_method = None;
    let mut path = String::new();

    for attr in method.attrs.iter().filter(|attr| is_http_method_attr(attr)) {
        if let Some(ident) = attr.path().get_ident() {
            http_method = Some(ident.to_string().to_uppercase());
            if let Meta::List(_) = &attr.meta {
                path = attr.parse_args::<LitStr>()?.value();
            }
        }
    }
    let Some(http_method) = http_method else {
        return Ok(None);
    };

    let mut params = Vec::new();
    for input in method.sig.inputs.iter() {
        if let FnArg::Typed(pat_type) = input {
            let ty = (*pat_type.ty).clone();
            let kind = param_kind(&pat_type.attrs);
            params.push(ParamInfo { ty, kind });
        }
    }

    // axum only lets the body extractor consume the request as the last argument
    if let Some(position) = params.iter().position(|p| p.kind == ParamKind::Body) {
        if position + 1 != params.len() {
            return Err(syn::Error::new_spanned(
                &method.sig,
                "#[body] must be the last parameter of a route",
            ));
        }
    }

    Ok(Some(RouteInfo {
        method: http_method,
        path,
        fn_name: method.sig.ident.clone(),
        params,
    }))
}

fn param_kind(attrs: &[Attribute]) -> ParamKind {
    for attr in attrs {
        if let Some(ident) = attr.path().get_ident() {
            match ident.to_string().as_str() {
                "body" => return ParamKind::Body,
                "param" => return ParamKind::Param,
                "query" => return ParamKind::Query,
                _ => {}
            }
        }
    }
    ParamKind::Raw
}

fn is_http_method_attr(attr: &Attribute) -> bool {
    attr.path()
        .get_ident()
        .is_some_and(|ident| HTTP_METHODS.contains(&ident.to_string().as_str()))
}

fn is_param_attr(attr: &Attribute) -> bool {
    attr.path()
        .get_ident()
        .is_some_and(|ident| PARAM_MARKERS.contains(&ident.to_string().as_str()))
}
