mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use canon_attrs::ErrorKind;
/// use canon_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "the equation is empty", labels = ["add an equation here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                  |
/// | --------- | ---------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error when it is displayed.          |
/// | `labels`  | The labels that point to the spans of the error, one per span, in order.     |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` and `help` accept an expression that should evaluate to a [`String`]; `labels`
/// accepts an expression that evaluates to an iterator of label messages. For structs with named
/// fields, the expressions are evaluated with the members of the struct in scope, so they can be
/// used in the expressions (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            #target
        }
    }.into()
}
