//! CLI argument definitions using clap derive

use crate::directory::Id;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// idmap - consistent user/group identity mapping
///
/// Resolves user and group names to numeric ids and back. Names with no
/// host account get a stable synthetic id derived from a salt.
#[derive(Parser, Debug)]
#[command(name = "idmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "IDMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Salt for synthetic ids (overrides mapping.salt)
    #[arg(long, global = true, env = "IDMAP_SALT", hide_env_values = true)]
    pub salt: Option<String>,

    /// Skip seeding from the host account databases
    #[arg(long, global = true)]
    pub no_seed: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve user names to uids
    User(NamesArgs),

    /// Resolve group names to gids
    Group(NamesArgs),

    /// Resolve uids to user names
    Uid(IdsArgs),

    /// Resolve gids to group names
    Gid(IdsArgs),

    /// Show the synthetic id a name would receive
    Synth(SynthArgs),

    /// Print the seeded mapping table
    Dump(DumpArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for name lookups
#[derive(Parser, Debug)]
pub struct NamesArgs {
    /// Names to resolve
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for id lookups
#[derive(Parser, Debug)]
pub struct IdsArgs {
    /// Numeric ids to resolve
    #[arg(required = true)]
    pub ids: Vec<Id>,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the synth command
#[derive(Parser, Debug)]
pub struct SynthArgs {
    /// Name to derive an id for
    pub name: String,

    /// Also print the hex MD5 digest the id is folded from
    #[arg(long)]
    pub digest: bool,
}

/// Arguments for the dump command
#[derive(Parser, Debug)]
pub struct DumpArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., mapping.salt)
        key: String,

        /// Value to set
        value: String,
    },
}

/// Output format for lookups and dumps
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
    /// One `name id` pair per line
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_uid_list() {
        let cli = Cli::try_parse_from(["idmap", "uid", "0", "1000"]).unwrap();
        match cli.command {
            Commands::Uid(args) => assert_eq!(args.ids, vec![0, 1000]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_id() {
        assert!(Cli::try_parse_from(["idmap", "gid", "-5"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["idmap", "user", "alice", "--salt", "x", "--no-seed", "-vv"])
                .unwrap();
        assert_eq!(cli.salt.as_deref(), Some("x"));
        assert!(cli.no_seed);
        assert_eq!(cli.verbose, 2);
    }
}
