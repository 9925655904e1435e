//! Declarative flag registration for clap command trees.
//!
//! This crate describes command-line flags as small typed values and
//! installs them on [`clap::Command`]s, so many subcommands can share one
//! definition of "the organization flag" or "the confirmation flag":
//!
//! - [`BoolFlag`], [`StringFlag`], [`IntFlag`], [`StringSliceFlag`]: flag
//!   descriptors, each carrying only the fields its variant supports.
//! - [`Flag`]: the registration trait every descriptor implements.
//! - [`add`] and [`FlagSet`]: attach an ordered batch of descriptors to a
//!   command.
//! - Named constructors such as [`org`], [`yes`] and [`remote_only`] that
//!   encode the conventions for recurring flags, plus the stable flag name
//!   constants ([`ORG_NAME`], [`YES_NAME`], ...) used to read parsed values
//!   back.
//! - [`list_flags`] / [`find_flag`]: inspect what a command ended up with, and
//!   [`string_slice_values`] to read a sequence flag back.
//!
//! Parsing, help rendering and duplicate-name detection all belong to clap.
//! Nothing here validates values.
//!
//! # Example
//!
//! ```
//! use clap::Command;
//! use command_flags_core::*;
//!
//! let launch = FlagSet::new()
//!     .with(org())
//!     .with(region())
//!     .with(yes())
//!     .with(remote_only())
//!     .add_to(Command::new("launch"));
//!
//! let matches = launch
//!     .try_get_matches_from(["launch", "--region", "ams", "-y"])
//!     .unwrap();
//!
//! assert_eq!(matches.get_one::<String>(REGION_NAME).unwrap(), "ams");
//! assert!(matches.get_flag(YES_NAME));
//! assert!(matches.get_flag(REMOTE_ONLY_NAME));
//! ```

mod listing;
mod names;
mod presets;
mod register;
mod types;

pub use listing::{FlagListing, find_flag, list_flags};
pub use names::*;
pub use presets::*;
pub use register::{FlagSet, add};
pub use types::{
    Binding, BoolFlag, Flag, IntFlag, StringFlag, StringSliceFlag, string_slice_values,
};
