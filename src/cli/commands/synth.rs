//! Synth command - show the synthetic id for a name

use super::MappingOptions;
use crate::cli::args::SynthArgs;
use crate::config::Config;
use crate::error::IdmapResult;
use crate::mapping::{synthetic_digest, synthetic_id};
use crate::ui;

/// Execute the synth command
///
/// Only applies the generator; the host directory is not consulted.
pub fn execute(args: SynthArgs, opts: &MappingOptions, config: &Config) -> IdmapResult<()> {
    let salt = opts.salt(&config.mapping);
    let id = synthetic_id(salt, &args.name);

    if !args.digest {
        println!("{}", id);
        return Ok(());
    }

    ui::section(&args.name);
    ui::key_value("digest", &hex::encode(synthetic_digest(salt, &args.name)));
    ui::key_value("id", &id.to_string());
    Ok(())
}
