//! The `flagctl` command tree.
//!
//! Every flag apart from `--config` comes from a shared descriptor, so the
//! same `--region` or `--yes` definition is reused across subcommands.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};
use command_flags_core::*;
use serde::Serialize;

use crate::output::OutputFormat;

pub const CONFIG_ARG: &str = "config";
pub const FORMAT_ARG: &str = "format";
pub const TARGET_ARG: &str = "command";

pub const WAIT_TIMEOUT_NAME: &str = "wait-timeout";
pub const ENV_NAME: &str = "env";

pub const LAUNCH: &str = "launch";
pub const DEPLOY: &str = "deploy";
pub const FLAGS: &str = "flags";

/// Flags accepted by the root command.
pub fn global_flags() -> FlagSet {
    FlagSet::new()
        .with(access_token())
        .with(verbose())
        .with(json_output())
        .with(local_only())
}

/// Flags accepted by `launch`.
pub fn launch_flags() -> FlagSet {
    FlagSet::new()
        .with(org())
        .with(app_name())
        .with(region())
        .with(image())
        .with(now())
        .with(no_deploy())
        .with(generate_name())
        .with(remote_only())
        .with(yes())
}

/// Flags accepted by `deploy`.
pub fn deploy_flags() -> FlagSet {
    FlagSet::new()
        .with(app_name())
        .with(region())
        .with(image())
        .with(remote_only())
        .with(yes())
        .with(
            IntFlag::new(WAIT_TIMEOUT_NAME, "Seconds to wait for instances to become healthy")
                .with_default(120),
        )
        .with(
            StringSliceFlag::new(ENV_NAME, "Set of environment variables in the form NAME=VALUE")
                .with_shorthand('e')
                .with_config_name(ENV_NAME),
        )
}

/// Descriptor set behind a command, `None` meaning the root.
pub fn flag_set_for(command: Option<&str>) -> Option<FlagSet> {
    match command {
        None => Some(global_flags()),
        Some(LAUNCH) => Some(launch_flags()),
        Some(DEPLOY) => Some(deploy_flags()),
        Some(FLAGS) => Some(FlagSet::new()),
        Some(_) => None,
    }
}

/// Builds the full command tree.
pub fn build_cli() -> Command {
    let root = Command::new("flagctl")
        .about("Launch and deploy applications")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(CONFIG_ARG)
                .long(CONFIG_ARG)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a flagctl YAML config file"),
        );

    global_flags()
        .add_to(root)
        .subcommand(launch_flags().add_to(
            Command::new(LAUNCH).about("Create and configure a new application"),
        ))
        .subcommand(
            deploy_flags().add_to(Command::new(DEPLOY).about("Deploy an application")),
        )
        .subcommand(
            Command::new(FLAGS)
                .about("List the flags registered on a command")
                .arg(
                    Arg::new(TARGET_ARG)
                        .value_name("COMMAND")
                        .help("Subcommand to inspect (defaults to the root command)"),
                )
                .arg(
                    Arg::new(FORMAT_ARG)
                        .long(FORMAT_ARG)
                        .value_parser(value_parser!(OutputFormat))
                        .help("Output format (defaults to the config file setting)"),
                ),
        )
}

/// Root-level switches, read back by flag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalOptions {
    pub access_token: String,
    pub verbose: bool,
    pub json: bool,
    pub local_only: bool,
}

impl GlobalOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            access_token: string(matches, ACCESS_TOKEN_NAME),
            verbose: matches.get_flag(VERBOSE_NAME),
            json: matches.get_flag(JSON_OUTPUT_NAME),
            local_only: matches.get_flag(LOCAL_ONLY_NAME),
        }
    }
}

/// What `launch` would do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub org: String,
    pub name: String,
    pub region: String,
    pub image: String,
    pub now: bool,
    pub no_deploy: bool,
    pub generate_name: bool,
    pub remote_only: bool,
    pub yes: bool,
}

impl LaunchPlan {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            org: string(matches, ORG_NAME),
            name: string(matches, APP_NAME_FLAG_NAME),
            region: string(matches, REGION_NAME),
            image: string(matches, IMAGE_NAME),
            now: matches.get_flag(NOW_NAME),
            no_deploy: matches.get_flag(NO_DEPLOY_NAME),
            generate_name: matches.get_flag(GENERATE_NAME_FLAG_NAME),
            remote_only: matches.get_flag(REMOTE_ONLY_NAME),
            yes: matches.get_flag(YES_NAME),
        }
    }
}

/// What `deploy` would do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployPlan {
    pub name: String,
    pub region: String,
    pub image: String,
    pub remote_only: bool,
    pub yes: bool,
    pub wait_timeout: i64,
    pub env: Vec<String>,
}

impl DeployPlan {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            name: string(matches, APP_NAME_FLAG_NAME),
            region: string(matches, REGION_NAME),
            image: string(matches, IMAGE_NAME),
            remote_only: matches.get_flag(REMOTE_ONLY_NAME),
            yes: matches.get_flag(YES_NAME),
            wait_timeout: matches
                .get_one::<i64>(WAIT_TIMEOUT_NAME)
                .copied()
                .unwrap_or_default(),
            env: string_slice_values(matches, ENV_NAME),
        }
    }
}

fn string(matches: &ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}
