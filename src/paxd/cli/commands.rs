use super::print::{print_messages, print_reports};
use super::setup::{Cli, Commands};
use clap::Parser;
use paxd::api::PaxApi;
use paxd::commands::show::ShowOptions;
use paxd::commands::CmdResult;
use paxd::config::{PaxdConfig, CONF_ENV};
use paxd::error::Result;
use paxd::store::fs::XattrBackend;
use std::path::PathBuf;

struct AppContext {
    api: PaxApi<XattrBackend>,
    verbose: bool,
}

/// Parse arguments and dispatch. Returns Ok(false) when the command ran to
/// the end but something along the way failed.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    let config = PaxdConfig::resolve(cli.config, std::env::var_os(CONF_ENV));
    let ctx = AppContext {
        api: PaxApi::system(config),
        verbose: cli.verbose,
    };

    match cli.command {
        None | Some(Commands::Apply) => handle_apply(&ctx),
        Some(Commands::Show {
            recursive,
            filter,
            json,
            paths,
        }) => handle_show(&ctx, ShowOptions { recursive, filter }, json, paths),
        Some(Commands::Set { flags, paths }) => handle_set(&ctx, flags, paths),
        Some(Commands::Clear { paths }) => Ok(finish(&ctx, ctx.api.clear(&paths))),
    }
}

fn finish(ctx: &AppContext, result: CmdResult) -> bool {
    print_messages(&result.messages, ctx.verbose);
    result.is_success()
}

fn handle_apply(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.apply()?;
    Ok(finish(ctx, result))
}

fn handle_show(
    ctx: &AppContext,
    options: ShowOptions,
    json: bool,
    paths: Vec<PathBuf>,
) -> Result<bool> {
    let result = ctx.api.show(&paths, options);
    print_reports(&result.reports, json)?;
    Ok(finish(ctx, result))
}

fn handle_set(ctx: &AppContext, flags: String, paths: Vec<PathBuf>) -> Result<bool> {
    let result = ctx.api.set(&flags, &paths)?;
    Ok(finish(ctx, result))
}
