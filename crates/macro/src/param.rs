//! Param derive macro implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Expr, LitStr, Path, Type, parse_macro_input};

/// How the generated `initial()` obtains its value.
enum Initial {
	Zero,
	Constant(Expr),
	Producer(Path),
}

/// Entry point for `#[derive(Param)]`.
///
/// ```ignore
/// #[derive(Param)]
/// #[param(value = String, init = default_locale)]
/// pub enum Locale {}
/// ```
///
/// Generates:
/// - `impl ::scoparg::Param for Locale` with `Value = String`
/// - a `thread_local!` slot private to `Locale::slot`
pub fn derive_param(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	if !input.generics.params.is_empty() {
		return syn::Error::new_spanned(
			&input.generics,
			"Param cannot be derived for generic types: each identity needs its own slot",
		)
		.to_compile_error()
		.into();
	}

	match &input.data {
		Data::Enum(data) if data.variants.is_empty() => {}
		Data::Enum(data) => {
			return syn::Error::new_spanned(
				&data.variants,
				"Param identities are never instantiated: declare an enum without variants",
			)
			.to_compile_error()
			.into();
		}
		_ => {
			return syn::Error::new_spanned(
				&input.ident,
				"Param can only be derived for variant-less enums, e.g. `enum Name {}`",
			)
			.to_compile_error()
			.into();
		}
	}

	let Some(param_attr) = input.attrs.iter().find(|a| a.path().is_ident("param")) else {
		return syn::Error::new_spanned(&input.ident, "missing #[param(...)] attribute")
			.to_compile_error()
			.into();
	};

	let mut value_ty: Option<Type> = None;
	let mut initial = Initial::Zero;
	let mut name: Option<LitStr> = None;

	if let Err(e) = param_attr.parse_nested_meta(|meta| {
		if meta.path.is_ident("value") {
			value_ty = Some(meta.value()?.parse()?);
			Ok(())
		} else if meta.path.is_ident("default") {
			if !matches!(initial, Initial::Zero) {
				return Err(meta.error("'default' and 'init' are mutually exclusive"));
			}
			initial = Initial::Constant(meta.value()?.parse()?);
			Ok(())
		} else if meta.path.is_ident("init") {
			if !matches!(initial, Initial::Zero) {
				return Err(meta.error("'default' and 'init' are mutually exclusive"));
			}
			initial = Initial::Producer(meta.value()?.parse()?);
			Ok(())
		} else if meta.path.is_ident("name") {
			name = Some(meta.value()?.parse()?);
			Ok(())
		} else {
			Err(meta.error("unknown param attribute"))
		}
	}) {
		return e.to_compile_error().into();
	}

	let Some(value_ty) = value_ty else {
		return syn::Error::new_spanned(param_attr, "missing required 'value' attribute")
			.to_compile_error()
			.into();
	};

	let ident = &input.ident;

	let name = match name {
		Some(lit) => quote! { #lit },
		None => quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)) },
	};

	let (policy, initial_body): (_, TokenStream2) = match initial {
		Initial::Zero => (
			format_ident!("Zero"),
			quote! { <#value_ty as ::core::default::Default>::default() },
		),
		Initial::Constant(expr) => (
			format_ident!("Constant"),
			quote! { ::core::convert::Into::<#value_ty>::into(#expr) },
		),
		Initial::Producer(path) => (format_ident!("Producer"), quote! { #path() }),
	};

	let expanded = quote! {
		impl ::scoparg::Param for #ident {
			type Value = #value_ty;

			const NAME: &'static str = #name;
			const POLICY: ::scoparg::InitPolicy = ::scoparg::InitPolicy::#policy;

			fn initial() -> #value_ty {
				#initial_body
			}

			fn slot() -> &'static ::std::thread::LocalKey<::scoparg::Slot<#value_ty>> {
				::std::thread_local! {
					static SLOT: ::scoparg::Slot<#value_ty> = ::scoparg::Slot::seeded::<#ident>();
				}
				&SLOT
			}
		}
	};

	expanded.into()
}
