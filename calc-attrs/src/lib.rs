mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `calc_error::ErrorKind` trait for the given struct, along with
/// [`std::fmt::Display`] (which writes the error message) and [`std::error::Error`].
///
/// This trait can be derived for any kind of struct, except tuple structs.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use calc_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of expression", labels = ["add something here"])]
/// pub struct Foo;
///
/// assert_eq!(Foo.to_string(), "unexpected end of expression");
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to each span of the error, in order.       |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` is required. `message` and `help` accept an expression that evaluates to anything
/// implementing [`ToString`]; `labels` accepts an expression that can be iterated over to produce
/// such values (an array of `&str`, a `Vec<String>`, ...). For structs with named fields, the
/// expressions are evaluated with the members of the struct in scope, so they can be used in the
/// expression.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    quote! { #target }.into()
}
