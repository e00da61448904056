use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ImplItemFn};

pub fn http_method_attribute(_method: &str, _attr: TokenStream, item: TokenStream) -> TokenStream {
    // Routing is generated by #[routes], which strips these attributes from the
    // impl block before they expand; on their own they leave the method as is.
    let input = parse_macro_input!(item as ImplItemFn);

    TokenStream::from(quote! {
        #input
    })
}
