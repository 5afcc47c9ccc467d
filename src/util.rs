// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Declares one `dayNN` module per (zero-padded) day literal.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*
} } }

pub(crate) use mod_days;


/// Installs the stderr `tracing` subscriber. `RUST_LOG` takes precedence
/// over the verbosity counted from `-v` flags.
pub(crate) fn init_tracing(verbosity: u8) {
	use tracing_subscriber::{filter::LevelFilter, EnvFilter};

	let level = match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	};
	let filter = EnvFilter::builder()
		.with_default_directive(level.into())
		.from_env_lossy();

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact()
		.init();
}
