/// Names shared between configuration loading and the command-line surface
pub const APP_NAME: &str = "obsidian-tasks";

pub const ENV_PREFIX: &str = "OBSIDIAN";
pub const NOTES_DIR_ENV: &str = const_str::concat!(ENV_PREFIX, "_NOTES_DIR");

pub const CONFIG_FILE_STEM: &str = "config";
pub const CONFIG_FILE_YAML: &str = const_str::concat!(CONFIG_FILE_STEM, ".yaml");
pub const CONFIG_FILE_YML: &str = const_str::concat!(CONFIG_FILE_STEM, ".yml");

/// Directory that marks the root of an Obsidian vault
pub const VAULT_MARKER_DIR: &str = ".obsidian";
pub const VAULT_URI_PREFIX: &str = "obsidian://open";

/// Label shown in place of a rule for one-time tasks
pub const ONE_TIME_LABEL: &str = "ONCE";
