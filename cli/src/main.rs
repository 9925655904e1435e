mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;

use clap::ArgMatches;
use command_flags_core::list_flags;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{
    CONFIG_ARG, DEPLOY, DeployPlan, FLAGS, FORMAT_ARG, GlobalOptions, LAUNCH, LaunchPlan,
    TARGET_ARG, build_cli, flag_set_for,
};
use config::CliConfig;
use error::{CliError, Result};
use output::{FlagReport, OutputFormat, format_plan, format_report};

fn main() {
    let matches = build_cli().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<PathBuf>(CONFIG_ARG);
    let config = CliConfig::load_optional(config_path.map(PathBuf::as_path))?;
    let global = GlobalOptions::from_matches(matches);

    init_logging(&global, &config);
    debug!(
        authenticated = !global.access_token.is_empty(),
        local_only = global.local_only,
        "resolved global options"
    );

    match matches.subcommand() {
        Some((LAUNCH, sub)) => {
            let plan = LaunchPlan::from_matches(sub);
            info!(app = %plan.name, region = %plan.region, "planned launch");
            print!("{}", with_newline(format_plan(&plan, global.json)?));
        }
        Some((DEPLOY, sub)) => {
            let plan = DeployPlan::from_matches(sub);
            info!(app = %plan.name, env_count = plan.env.len(), "planned deploy");
            print!("{}", with_newline(format_plan(&plan, global.json)?));
        }
        Some((FLAGS, sub)) => run_flags(sub, &config)?,
        // subcommand_required(true) makes clap reject anything else.
        _ => {}
    }

    Ok(())
}

fn run_flags(matches: &ArgMatches, config: &CliConfig) -> Result<()> {
    let target = matches.get_one::<String>(TARGET_ARG).map(String::as_str);
    let format = matches
        .get_one::<OutputFormat>(FORMAT_ARG)
        .copied()
        .unwrap_or(config.format);

    let cli = build_cli();
    let cmd = match target {
        Some(name) => cli
            .find_subcommand(name)
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?,
        None => &cli,
    };
    let bindings = flag_set_for(target)
        .map(|set| set.bindings())
        .unwrap_or_default();

    let report = FlagReport {
        command: cmd.get_name().to_string(),
        flags: list_flags(cmd),
        bindings,
    };
    debug!(command = %report.command, count = report.flags.len(), "listing flags");

    print!("{}", with_newline(format_report(&report, format)?));
    Ok(())
}

fn init_logging(global: &GlobalOptions, config: &CliConfig) {
    let fallback = if global.verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn with_newline(mut raw: String) -> String {
    if !raw.ends_with('\n') {
        raw.push('\n');
    }
    raw
}
