use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but could not be parsed.
    ///
    /// Every configuration variable has a default, so only a malformed value
    /// (such as a non-numeric `PORT`) can fail configuration loading.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
