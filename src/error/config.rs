use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A watcher was configured with a check interval it cannot run at.
    #[error("Invalid check interval for {watcher} watcher: interval must be greater than zero")]
    InvalidInterval {
        /// Source type label of the watcher
        watcher: String,
    },

    /// A second watcher was added for a source type that already has one.
    #[error("A watcher for {watcher} sources is already registered")]
    DuplicateWatcher {
        /// Source type label of the watcher
        watcher: String,
    },
}
