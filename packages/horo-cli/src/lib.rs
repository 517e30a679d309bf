//! Shared command-line surface for the horo binaries.

use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};

/// `<crate version>-<git sha>-<target triple>`.
pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Magenta.on_default() | Effects::BOLD)
		.usage(AnsiColor::Magenta.on_default() | Effects::BOLD)
		.literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Yellow.on_default())
}
