//! Dump-and-print conveniences.

use std::io::{self, Write};

use printobject_foundation::{Result, Value};

use crate::config::DumpConfig;
use crate::dumper::Dumper;
use crate::pretty::{PrettyConfig, pretty_print_with_config};

/// Dumps `value` with a fresh dumper and returns the pretty-printed text.
#[must_use]
pub fn pformat(value: &Value, config: DumpConfig) -> String {
    let node = Dumper::new(config).dump(value);
    pretty_print_with_config(&node, &PrettyConfig::default())
}

/// Dumps `value` and writes the pretty-printed text plus a newline.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn pp_to<W: Write>(
    writer: &mut W,
    value: &Value,
    config: DumpConfig,
    pretty: &PrettyConfig,
) -> Result<()> {
    let node = Dumper::new(config).dump(value);
    writeln!(writer, "{}", pretty_print_with_config(&node, pretty))?;
    Ok(())
}

/// Pretty-prints `value` to stdout.
///
/// This is the one-call entry point for debugging sessions.
pub fn pp(value: &Value, collapse_duplicates: bool) {
    let config = DumpConfig::default().with_collapse_duplicates(collapse_duplicates);
    let mut stdout = io::stdout().lock();
    if let Err(err) = pp_to(&mut stdout, value, config, &PrettyConfig::default()) {
        tracing::warn!(error = %err, "failed to write dump to stdout");
    }
}
