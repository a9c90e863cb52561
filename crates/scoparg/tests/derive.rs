use bitflags::bitflags;
use scoparg::{BitMerge, InitPolicy, Opt, Override, Param, registry};

bitflags! {
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Style: u8 {
		const BOLD = 1;
		const ITALIC = 1 << 1;
		const UNDERLINE = 1 << 2;
	}
}

#[derive(Param)]
#[param(value = u8)]
enum Retries {}

#[derive(Param)]
#[param(value = String, default = "en-US")]
/// Locale used when formatting.
enum Locale {}

fn default_workers() -> usize {
	8
}

#[derive(Param)]
#[param(value = usize, init = default_workers, name = "workers")]
enum Workers {}

#[derive(Param)]
#[param(value = Style, default = Style::BOLD)]
enum TextStyle {}

#[test]
fn test_derive_follows_declared_policy() {
	assert_eq!(Retries::POLICY, InitPolicy::Zero);
	assert_eq!(Retries::initial(), 0);

	assert_eq!(Locale::POLICY, InitPolicy::Constant);
	assert_eq!(Locale::initial(), "en-US");

	assert_eq!(Workers::POLICY, InitPolicy::Producer);
	assert_eq!(Workers::initial(), 8);
}

#[test]
fn test_derive_names() {
	assert_eq!(Workers::NAME, "workers");
	assert!(Locale::NAME.ends_with("::Locale"));
}

#[test]
fn test_derived_params_resolve_through_opt() {
	fn render(text: &str, locale: Opt<Locale>) -> String {
		locale.with(|locale| format!("[{locale}] {text}"))
	}

	assert_eq!(render("hi", Opt::none()), "[en-US] hi");
	{
		let _fr = Override::<Locale>::new("fr-FR".into());
		assert_eq!(render("salut", Opt::none()), "[fr-FR] salut");
		assert_eq!(render("hola", Opt::make("es-ES")), "[es-ES] hola");
	}
	assert_eq!(render("hi", Opt::none()), "[en-US] hi");
}

#[test]
fn test_bitflags_defaults_merge_by_policy() {
	assert_eq!(registry::get::<TextStyle>(), Style::BOLD);
	{
		let _emphasis = Override::<TextStyle>::bits(Style::ITALIC | Style::UNDERLINE, BitMerge::Union);
		assert_eq!(registry::get::<TextStyle>(), Style::all());
		{
			let _plain = Override::<TextStyle>::bits(Style::BOLD, BitMerge::Clear);
			assert_eq!(
				Opt::<TextStyle>::none().into_value(),
				Style::ITALIC | Style::UNDERLINE
			);
			{
				let _flip = Override::<TextStyle>::bits(Style::all(), BitMerge::Toggle);
				assert_eq!(registry::get::<TextStyle>(), Style::BOLD);
			}
		}
		assert_eq!(registry::get::<TextStyle>(), Style::all());
	}
	assert_eq!(registry::get::<TextStyle>(), Style::BOLD);
}

#[test]
fn test_explicit_flags_are_untouched_by_overrides() {
	let explicit = Opt::<TextStyle>::new(Style::UNDERLINE);
	scoparg::scope_bits::<TextStyle, _>(Style::ITALIC, BitMerge::Union, || {
		assert_eq!(explicit.get(), Style::UNDERLINE);
	});
}
