//! Dump command - print the seeded mapping table

use super::resolve::print_accounts;
use super::MappingOptions;
use crate::cli::args::{DumpArgs, OutputFormat};
use crate::config::Config;
use crate::error::IdmapResult;
use crate::ui;

/// Execute the dump command
pub fn execute(args: DumpArgs, opts: &MappingOptions, config: &Config) -> IdmapResult<()> {
    let mapping = opts.build(&config.mapping);
    let snapshot = mapping.snapshot();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        format => {
            if matches!(format, OutputFormat::Table) {
                ui::section("Users");
            }
            print_accounts(&snapshot.users, format)?;
            if matches!(format, OutputFormat::Table) {
                println!();
                ui::section("Groups");
            }
            print_accounts(&snapshot.groups, format)?;
            if matches!(format, OutputFormat::Table) {
                let stats = mapping.stats();
                println!();
                println!("{} user(s), {} group(s)", stats.user_ids, stats.group_ids);
            }
        }
    }

    Ok(())
}
