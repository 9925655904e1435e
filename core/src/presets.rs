//! Named constructors for flags shared across subcommands.
//!
//! Each constructor hard-codes its name, description and default. Callers
//! that need a different default can adjust the returned value with the
//! descriptor's `with_*` builders.

use crate::names::*;
use crate::{BoolFlag, StringFlag};

/// Environment variable recorded as the access token alias.
pub const ACCESS_TOKEN_ENV: &str = "FLY_ACCESS_TOKEN";

/// Configuration key recorded as the access token alias.
pub const ACCESS_TOKEN_CONFIG: &str = "access_token";

/// `--access-token`, `-t`: the API token, also bindable from config and env.
pub fn access_token() -> StringFlag {
    StringFlag::new(ACCESS_TOKEN_NAME, "Fly API Access Token")
        .with_shorthand('t')
        .with_config_name(ACCESS_TOKEN_CONFIG)
        .with_env_name(ACCESS_TOKEN_ENV)
}

/// `--verbose`: more detailed output.
pub fn verbose() -> BoolFlag {
    BoolFlag::new(VERBOSE_NAME, "Verbose output")
}

/// `--json`, `-j`: machine-readable JSON output.
pub fn json_output() -> BoolFlag {
    BoolFlag::new(JSON_OUTPUT_NAME, "JSON output").with_shorthand('j')
}

/// `--local-only`: hidden switch restricting work to the local machine.
pub fn local_only() -> BoolFlag {
    BoolFlag::new(LOCAL_ONLY_NAME, "Only perform actions locally").with_hidden(true)
}

/// `--org`: the organization to operate on.
pub fn org() -> StringFlag {
    StringFlag::new(ORG_NAME, "The organization to operate on")
}

/// `--yes`, `-y`: accept all confirmations.
pub fn yes() -> BoolFlag {
    BoolFlag::new(YES_NAME, "Accept all confirmations").with_shorthand('y')
}

/// `--name`: the name of the application to create.
pub fn app_name() -> StringFlag {
    StringFlag::new(APP_NAME_FLAG_NAME, "The name of the application to create")
}

/// `--region`: the target region.
pub fn region() -> StringFlag {
    StringFlag::new(REGION_NAME, "The target region for the operation")
}

/// `--image`: the image to deploy.
pub fn image() -> StringFlag {
    StringFlag::new(IMAGE_NAME, "The image to deploy")
}

/// `--now`: deploy without confirmation.
pub fn now() -> BoolFlag {
    BoolFlag::new(NOW_NAME, "Deploy now without confirmation")
}

/// `--no-deploy`: skip the deployment prompt.
pub fn no_deploy() -> BoolFlag {
    BoolFlag::new(NO_DEPLOY_NAME, "Do not prompt for deployment")
}

/// `--generate-name`: always generate an application name.
pub fn generate_name() -> BoolFlag {
    BoolFlag::new(GENERATE_NAME_FLAG_NAME, "Always generate a name for the app")
}

/// `--remote-only`: build on a remote builder. Defaults to `true`.
pub fn remote_only() -> BoolFlag {
    BoolFlag::new(
        REMOTE_ONLY_NAME,
        "Perform builds on a remote builder instance instead of using the local docker daemon",
    )
    .with_default(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Flag;

    #[test]
    fn test_yes_preset() {
        let flag = yes();
        assert_eq!(flag.name, "yes");
        assert_eq!(flag.shorthand, Some('y'));
        assert!(!flag.default);
        assert!(!flag.hidden);
    }

    #[test]
    fn test_remote_only_defaults_true() {
        assert!(remote_only().default);
    }

    #[test]
    fn test_string_presets_have_empty_defaults_and_no_shorthand() {
        for flag in [org(), app_name(), region(), image()] {
            assert!(flag.default.is_empty(), "{} default", flag.name);
            assert_eq!(flag.shorthand, None, "{} shorthand", flag.name);
            assert_eq!(flag.binding(), None, "{} binding", flag.name);
        }
    }

    #[test]
    fn test_deploy_prompt_presets_default_false() {
        for flag in [now(), no_deploy(), generate_name()] {
            assert!(!flag.default, "{} default", flag.name);
            assert_eq!(flag.shorthand, None);
        }
    }

    #[test]
    fn test_access_token_records_aliases() {
        let binding = access_token().binding().unwrap();
        assert_eq!(binding.flag, ACCESS_TOKEN_NAME);
        assert_eq!(binding.config_name.as_deref(), Some(ACCESS_TOKEN_CONFIG));
        assert_eq!(binding.env_name.as_deref(), Some(ACCESS_TOKEN_ENV));
    }

    #[test]
    fn test_local_only_is_hidden() {
        assert!(local_only().hidden);
        assert!(!verbose().hidden);
        assert_eq!(json_output().shorthand, Some('j'));
    }
}
