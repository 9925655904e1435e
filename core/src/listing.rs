//! Read-back of the flags installed on a command.
//!
//! [`list_flags`] reports what clap actually holds after registration, which
//! is how callers (and the tests) confirm names, shorthands, defaults and
//! visibility without going through a parse.

use clap::{Arg, ArgAction, Command};
use serde::{Deserialize, Serialize};

/// One flag as registered on a command.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use command_flags_core::*;
///
/// let cmd = add(Command::new("launch"), &[&yes(), &local_only()]);
/// let yes = find_flag(&cmd, YES_NAME).unwrap();
/// assert_eq!(yes.shorthand, Some('y'));
/// assert_eq!(yes.defaults, ["false"]);
/// assert!(!yes.hidden);
///
/// assert!(find_flag(&cmd, LOCAL_ONLY_NAME).unwrap().hidden);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagListing {
    /// Argument id.
    pub name: String,
    /// Long form without the leading dashes.
    pub long: Option<String>,
    /// Single-character alias.
    pub shorthand: Option<char>,
    /// Help text.
    pub description: Option<String>,
    /// Default values as clap stores them.
    pub defaults: Vec<String>,
    /// Omitted from help output.
    pub hidden: bool,
    /// Accumulates values across occurrences.
    pub multiple: bool,
}

impl FlagListing {
    fn from_arg(arg: &Arg) -> Self {
        Self {
            name: arg.get_id().to_string(),
            long: arg.get_long().map(String::from),
            shorthand: arg.get_short(),
            description: arg.get_help().map(ToString::to_string),
            defaults: arg
                .get_default_values()
                .iter()
                .map(|value| value.to_string_lossy().into_owned())
                .collect(),
            hidden: arg.is_hide_set(),
            multiple: matches!(arg.get_action(), ArgAction::Append),
        }
    }
}

/// Lists the flags registered on `cmd`, in registration order.
///
/// clap's generated `help` and `version` arguments are skipped.
pub fn list_flags(cmd: &Command) -> Vec<FlagListing> {
    cmd.get_arguments()
        .filter(|arg| !is_generated(arg))
        .map(FlagListing::from_arg)
        .collect()
}

/// Finds a registered flag by name.
pub fn find_flag(cmd: &Command, name: &str) -> Option<FlagListing> {
    cmd.get_arguments()
        .find(|arg| arg.get_id() == name)
        .map(FlagListing::from_arg)
}

fn is_generated(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}
