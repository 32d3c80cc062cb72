use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Instruments a function with a [`tracing`] span, records its return value
/// at trace level and emits a `call` trace event on entry.
///
/// Accepts the same arguments as `#[tracing::instrument]`, e.g.
/// `#[trace_instrument(skip(self))]`.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    let ret = if matches!(sig.output, syn::ReturnType::Default) {
        quote! {}
    } else {
        quote! { ret(level = "trace"), }
    };

    quote! {
        #[::tracing::instrument(#ret #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
