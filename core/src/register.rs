//! Attaching descriptors to commands.
//!
//! [`add`] applies a borrowed batch of descriptors in order. [`FlagSet`]
//! owns an ordered batch so it can be assembled in one place and attached
//! later. Neither deduplicates names: two descriptors with the same name
//! are both forwarded to clap, which rejects the command when it is built.
//!
//! # Example
//!
//! ```
//! use clap::Command;
//! use command_flags_core::*;
//!
//! let cmd = add(Command::new("launch"), &[&org(), &yes(), &remote_only()]);
//! let matches = cmd.try_get_matches_from(["launch", "-y"]).unwrap();
//!
//! assert!(matches.get_flag(YES_NAME));
//! assert!(matches.get_flag(REMOTE_ONLY_NAME));
//! assert_eq!(matches.get_one::<String>(ORG_NAME).unwrap(), "");
//! ```

use std::fmt;

use clap::Command;
use tracing::{debug, trace};

use crate::{Binding, Flag};

/// Attaches `flags` to `cmd` in the given order.
pub fn add(cmd: Command, flags: &[&dyn Flag]) -> Command {
    debug!(
        command = cmd.get_name(),
        count = flags.len(),
        "attaching flags"
    );
    flags.iter().fold(cmd, |cmd, flag| {
        trace!(command = cmd.get_name(), flag = flag.name(), "attaching flag");
        flag.add_to(cmd)
    })
}

/// Ordered, owned collection of descriptors destined for one command.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use command_flags_core::*;
///
/// let set = FlagSet::new()
///     .with(app_name())
///     .with(StringSliceFlag::new("env", "Set environment variables").with_config_name("env"));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.bindings()[0].flag, "env");
///
/// let cmd = set.add_to(Command::new("deploy"));
/// assert_eq!(cmd.get_arguments().count(), 2);
/// ```
#[derive(Default)]
pub struct FlagSet {
    flags: Vec<Box<dyn Flag>>,
}

impl FlagSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor, builder style.
    pub fn with(mut self, flag: impl Flag + 'static) -> Self {
        self.push(flag);
        self
    }

    /// Appends a descriptor.
    pub fn push(&mut self, flag: impl Flag + 'static) {
        self.flags.push(Box::new(flag));
    }

    /// Number of descriptors in the set.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the set holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Aliases recorded by the descriptors, in set order.
    pub fn bindings(&self) -> Vec<Binding> {
        self.flags.iter().filter_map(|flag| flag.binding()).collect()
    }

    /// Attaches every descriptor to `cmd`, consuming the set.
    pub fn add_to(self, cmd: Command) -> Command {
        let borrowed: Vec<&dyn Flag> = self.flags.iter().map(|flag| &**flag).collect();
        add(cmd, &borrowed)
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("len", &self.flags.len())
            .finish()
    }
}
