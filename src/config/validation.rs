use crate::config::types::Config;
use crate::ConfigError;

/// Validates a loaded configuration
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError::Validation)` - A field is out of range
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetch.user-agent must not be empty".to_string(),
        ));
    }

    if config.fetch.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config.fetch.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.connect-timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config
        .extractor
        .noise_phrases
        .iter()
        .any(|phrase| phrase.trim().is_empty())
    {
        return Err(ConfigError::Validation(
            "extractor.noise-phrases must not contain empty phrases".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = Config::default();
        config.fetch.user_agent = "  ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_noise_phrase_rejected() {
        let mut config = Config::default();
        config.extractor.noise_phrases.push(String::new());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_phrase_list_is_valid() {
        // No phrases just means the length threshold does all the work
        let mut config = Config::default();
        config.extractor.noise_phrases.clear();
        assert!(validate(&config).is_ok());
    }
}
