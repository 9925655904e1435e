//! Flag descriptor definitions.
//!
//! Each descriptor is a plain value describing one flag: its name, optional
//! single-character shorthand, help text, default and the metadata its
//! variant supports. Descriptors do nothing until they are handed to
//! [`add`](crate::add) or a [`FlagSet`](crate::FlagSet), which install them
//! on a [`clap::Command`].
//!
//! The variants deliberately carry different field sets. Only
//! [`StringFlag`] and [`StringSliceFlag`] record configuration and
//! environment aliases, and [`StringSliceFlag`] has no `hidden` field.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use serde::{Deserialize, Serialize};

/// A descriptor that knows how to install itself on a command.
///
/// Implementors register exactly one argument. Name collisions are not
/// checked here; clap reports them when the command is built.
pub trait Flag {
    /// Long name of the flag.
    fn name(&self) -> &str;

    /// Installs this flag on `cmd` and returns the extended command.
    fn add_to(&self, cmd: Command) -> Command;

    /// Returns the configuration/environment aliases recorded for this flag.
    fn binding(&self) -> Option<Binding> {
        None
    }
}

/// Aliases under which a flag's value may also be supplied.
///
/// This is a record only. Resolving values from configuration files or the
/// environment is left to whatever consumes the binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Flag name the aliases belong to.
    pub flag: String,
    /// Configuration key, if any.
    pub config_name: Option<String>,
    /// Environment variable name, if any.
    pub env_name: Option<String>,
}

impl Binding {
    fn recorded(flag: &str, config_name: Option<&str>, env_name: Option<&str>) -> Option<Self> {
        if config_name.is_none() && env_name.is_none() {
            return None;
        }
        Some(Self {
            flag: flag.to_string(),
            config_name: config_name.map(String::from),
            env_name: env_name.map(String::from),
        })
    }
}

/// Boolean flag.
///
/// Passing `--name` alone sets the flag to `true`; `--name=false` and
/// `--name=true` are accepted as well, so a flag defaulting to `true` can
/// still be switched off.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use command_flags_core::{BoolFlag, Flag};
///
/// let force = BoolFlag::new("force", "Skip safety checks").with_shorthand('f');
/// let cmd = force.add_to(Command::new("destroy"));
///
/// let matches = cmd.clone().try_get_matches_from(["destroy", "-f"]).unwrap();
/// assert!(matches.get_flag("force"));
///
/// let matches = cmd.try_get_matches_from(["destroy"]).unwrap();
/// assert!(!matches.get_flag("force"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolFlag {
    /// Long name, also used as the argument id.
    pub name: String,
    /// Single-character alias.
    pub shorthand: Option<char>,
    /// Help text.
    pub description: String,
    /// Value used when the flag is absent.
    pub default: bool,
    /// Omit from help output.
    pub hidden: bool,
}

impl BoolFlag {
    /// Creates a visible flag defaulting to `false` with no shorthand.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Sets the single-character alias.
    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Sets visibility in help output.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Flag for BoolFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_to(&self, cmd: Command) -> Command {
        let arg = base_arg(&self.name, self.shorthand, &self.description)
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .default_value(if self.default { "true" } else { "false" })
            .hide_default_value(!self.default)
            .value_parser(value_parser!(bool))
            .hide(self.hidden);
        cmd.arg(arg)
    }
}

/// String flag.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use command_flags_core::{Flag, StringFlag};
///
/// let token = StringFlag::new("access-token", "API token")
///     .with_shorthand('t')
///     .with_env_name("FLY_ACCESS_TOKEN");
/// let cmd = token.add_to(Command::new("apps"));
///
/// let matches = cmd.try_get_matches_from(["apps", "-t", "secret"]).unwrap();
/// assert_eq!(matches.get_one::<String>("access-token").unwrap(), "secret");
/// assert_eq!(token.binding().unwrap().env_name.as_deref(), Some("FLY_ACCESS_TOKEN"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringFlag {
    /// Long name, also used as the argument id.
    pub name: String,
    /// Single-character alias.
    pub shorthand: Option<char>,
    /// Help text.
    pub description: String,
    /// Value used when the flag is absent.
    pub default: String,
    /// Configuration key the value may also come from.
    pub config_name: Option<String>,
    /// Environment variable the value may also come from.
    pub env_name: Option<String>,
    /// Omit from help output.
    pub hidden: bool,
}

impl StringFlag {
    /// Creates a visible flag defaulting to the empty string with no shorthand.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Sets the single-character alias.
    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Records a configuration key alias.
    pub fn with_config_name(mut self, config_name: impl Into<String>) -> Self {
        self.config_name = Some(config_name.into());
        self
    }

    /// Records an environment variable alias.
    pub fn with_env_name(mut self, env_name: impl Into<String>) -> Self {
        self.env_name = Some(env_name.into());
        self
    }

    /// Sets visibility in help output.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Flag for StringFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_to(&self, cmd: Command) -> Command {
        let arg = base_arg(&self.name, self.shorthand, &self.description)
            .action(ArgAction::Set)
            .value_parser(value_parser!(String))
            .default_value(self.default.clone())
            .hide_default_value(self.default.is_empty())
            .hide(self.hidden);
        cmd.arg(arg)
    }

    fn binding(&self) -> Option<Binding> {
        Binding::recorded(
            &self.name,
            self.config_name.as_deref(),
            self.env_name.as_deref(),
        )
    }
}

/// Integer flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntFlag {
    /// Long name, also used as the argument id.
    pub name: String,
    /// Single-character alias.
    pub shorthand: Option<char>,
    /// Help text.
    pub description: String,
    /// Value used when the flag is absent.
    pub default: i64,
    /// Omit from help output.
    pub hidden: bool,
}

impl IntFlag {
    /// Creates a visible flag defaulting to `0` with no shorthand.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Sets the single-character alias.
    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: i64) -> Self {
        self.default = default;
        self
    }

    /// Sets visibility in help output.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Flag for IntFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_to(&self, cmd: Command) -> Command {
        let arg = base_arg(&self.name, self.shorthand, &self.description)
            .action(ArgAction::Set)
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .default_value(self.default.to_string())
            .hide_default_value(self.default == 0)
            .hide(self.hidden);
        cmd.arg(arg)
    }
}

/// String-sequence flag.
///
/// Values accumulate across repeated occurrences and may also be given
/// comma-separated (`--env A=1,B=2`). Read them back with
/// [`string_slice_values`], which splits what the user typed but keeps each
/// registered default element whole. This variant is always visible; it has
/// no `hidden` field:
///
/// ```compile_fail
/// use command_flags_core::StringSliceFlag;
///
/// let flag = StringSliceFlag {
///     name: "env".into(),
///     hidden: true,
///     ..Default::default()
/// };
/// ```
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use command_flags_core::{Flag, StringSliceFlag, string_slice_values};
///
/// let env = StringSliceFlag::new("env", "Environment variables").with_shorthand('e');
/// let cmd = env.add_to(Command::new("deploy"));
///
/// let matches = cmd
///     .try_get_matches_from(["deploy", "-e", "A=1,B=2", "--env", "C=3"])
///     .unwrap();
/// assert_eq!(string_slice_values(&matches, "env"), ["A=1", "B=2", "C=3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSliceFlag {
    /// Long name, also used as the argument id.
    pub name: String,
    /// Single-character alias.
    pub shorthand: Option<char>,
    /// Help text.
    pub description: String,
    /// Values used when the flag is absent.
    pub default: Vec<String>,
    /// Configuration key the values may also come from.
    pub config_name: Option<String>,
    /// Environment variable the values may also come from.
    pub env_name: Option<String>,
}

impl StringSliceFlag {
    /// Creates a flag with no default values and no shorthand.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Sets the single-character alias.
    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    /// Sets the default values.
    pub fn with_default<I, S>(mut self, default: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default = default.into_iter().map(Into::into).collect();
        self
    }

    /// Records a configuration key alias.
    pub fn with_config_name(mut self, config_name: impl Into<String>) -> Self {
        self.config_name = Some(config_name.into());
        self
    }

    /// Records an environment variable alias.
    pub fn with_env_name(mut self, env_name: impl Into<String>) -> Self {
        self.env_name = Some(env_name.into());
        self
    }
}

impl Flag for StringSliceFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_to(&self, cmd: Command) -> Command {
        let mut arg = base_arg(&self.name, self.shorthand, &self.description)
            .action(ArgAction::Append)
            .value_parser(value_parser!(String));
        // An empty default list registers no defaults at all.
        if !self.default.is_empty() {
            arg = arg.default_values(self.default.clone());
        }
        cmd.arg(arg)
    }

    fn binding(&self) -> Option<Binding> {
        Binding::recorded(
            &self.name,
            self.config_name.as_deref(),
            self.env_name.as_deref(),
        )
    }
}

/// Reads back the values of a string-sequence flag.
///
/// Occurrences given on the command line are split on commas. Registered
/// defaults are returned element for element, commas included. An absent
/// flag with no defaults yields an empty list.
///
/// # Panics
///
/// Panics if `name` is not a string argument of the parsed command, like
/// [`ArgMatches::get_many`].
pub fn string_slice_values(matches: &ArgMatches, name: &str) -> Vec<String> {
    let Some(values) = matches.get_many::<String>(name) else {
        return Vec::new();
    };
    if matches.value_source(name) == Some(ValueSource::DefaultValue) {
        return values.cloned().collect();
    }
    values
        .flat_map(|value| value.split(','))
        .map(String::from)
        .collect()
}

fn base_arg(name: &str, shorthand: Option<char>, description: &str) -> Arg {
    let arg = Arg::new(name.to_string())
        .long(name.to_string())
        .help(description.to_string());
    match shorthand {
        Some(short) => arg.short(short),
        None => arg,
    }
}
