use super::ConfigDiagnostics;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why `popchip.toml` could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file `{}` not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to parse `{}`", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    // Not a #[source]: the problems are already part of the message
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_file() {
        let missing = ConfigError::NotFound(PathBuf::from("shop.toml"));
        assert_eq!(missing.to_string(), "config file `shop.toml` not found");

        let io = ConfigError::Io(
            PathBuf::from("popchip.toml"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(io.to_string().contains("popchip.toml"));
    }
}
