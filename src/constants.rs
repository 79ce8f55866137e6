// Constants shared across sigscan

/// Receiver prefix a qualifying resolver signature must start with.
pub const DEFAULT_RECEIVER_PREFIX: &str = "func (r *Resolver) ";
/// Leading context parameter that precedes the captured parameter list.
pub const DEFAULT_LEADING_PARAM: &str = "ctx context.Context";
/// File name suffix of resolver files considered by the directory driver.
pub const DEFAULT_FILE_SUFFIX: &str = ".resolvers.go";
/// Name of the struct parameter that replaces positional resolver parameters.
pub const ARGS_PARAM_NAME: &str = "args";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV_VAR: &str = "SIGSCAN_CONFIG_PATH";
/// Application directory name under the platform config dir.
pub const APP_NAME: &str = "sigscan";
/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
