//! Stable flag names.
//!
//! Downstream code reads parsed values back from [`clap::ArgMatches`] using
//! these identifiers, so renaming one is a breaking change.

/// Name of the access token flag.
pub const ACCESS_TOKEN_NAME: &str = "access-token";

/// Name of the verbose flag.
pub const VERBOSE_NAME: &str = "verbose";

/// Name of the JSON output flag.
pub const JSON_OUTPUT_NAME: &str = "json";

/// Name of the local-only flag.
pub const LOCAL_ONLY_NAME: &str = "local-only";

/// Name of the organization flag.
pub const ORG_NAME: &str = "org";

/// Name of the application name flag.
pub const APP_NAME_FLAG_NAME: &str = "name";

/// Name of the region flag.
pub const REGION_NAME: &str = "region";

/// Name of the image flag.
pub const IMAGE_NAME: &str = "image";

/// Name of the yes (accept all confirmations) flag.
pub const YES_NAME: &str = "yes";

/// Name of the deploy-now flag.
pub const NOW_NAME: &str = "now";

/// Name of the no-deploy flag.
pub const NO_DEPLOY_NAME: &str = "no-deploy";

/// Name of the generate-name flag.
pub const GENERATE_NAME_FLAG_NAME: &str = "generate-name";

/// Name of the remote-only build flag.
pub const REMOTE_ONLY_NAME: &str = "remote-only";
