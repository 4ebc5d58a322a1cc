//! Lookup commands - resolve names to ids and ids to names

use super::MappingOptions;
use crate::cli::args::{IdsArgs, NamesArgs, OutputFormat};
use crate::config::Config;
use crate::directory::{Account, Id};
use crate::error::IdmapResult;
use crate::mapping::IdMapping;
use console::style;

/// Execute the user command
pub fn execute_users(
    args: NamesArgs,
    opts: &MappingOptions,
    config: &Config,
) -> IdmapResult<()> {
    let mapping = opts.build(&config.mapping);
    let accounts = resolve_names(&args.names, |n| mapping.resolve_user_name(n));
    print_accounts(&accounts, args.format)
}

/// Execute the group command
pub fn execute_groups(
    args: NamesArgs,
    opts: &MappingOptions,
    config: &Config,
) -> IdmapResult<()> {
    let mapping = opts.build(&config.mapping);
    let accounts = resolve_names(&args.names, |n| mapping.resolve_group_name(n));
    print_accounts(&accounts, args.format)
}

/// Execute the uid command
pub fn execute_uids(
    args: IdsArgs,
    opts: &MappingOptions,
    config: &Config,
) -> IdmapResult<()> {
    let mapping = opts.build(&config.mapping);
    let accounts = resolve_ids(&args, &mapping, IdMapping::resolve_user_id);
    print_accounts(&accounts, args.format)
}

/// Execute the gid command
pub fn execute_gids(
    args: IdsArgs,
    opts: &MappingOptions,
    config: &Config,
) -> IdmapResult<()> {
    let mapping = opts.build(&config.mapping);
    let accounts = resolve_ids(&args, &mapping, IdMapping::resolve_group_id);
    print_accounts(&accounts, args.format)
}

fn resolve_names(names: &[String], resolve: impl Fn(&str) -> Id) -> Vec<Account> {
    names
        .iter()
        .map(|name| Account::new(resolve(name), name.clone()))
        .collect()
}

fn resolve_ids(
    args: &IdsArgs,
    mapping: &IdMapping,
    resolve: fn(&IdMapping, Id) -> String,
) -> Vec<Account> {
    args.ids
        .iter()
        .map(|&id| Account::new(id, resolve(mapping, id)))
        .collect()
}

pub(crate) fn print_accounts(accounts: &[Account], format: OutputFormat) -> IdmapResult<()> {
    match format {
        OutputFormat::Table => print_table(accounts),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(accounts)?),
        OutputFormat::Plain => {
            for account in accounts {
                println!("{} {}", account.name, account.id);
            }
        }
    }
    Ok(())
}

fn print_table(accounts: &[Account]) {
    println!("{:<12} {:<49}", style("ID").bold(), style("NAME").bold());
    println!("{}", "-".repeat(62));
    for account in accounts {
        println!("{:<12} {:<49}", account.id, account.name);
    }
}
