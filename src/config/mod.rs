use crate::exporters::OutputFormat;
use crate::sampling::IntervalWidth;
use anyhow::{Error, anyhow};
use confique::Config;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Config)]
pub struct VitalsConfig {
    #[config(env = "VITALS_INTERVAL_MINUTES", default = 5)]
    pub interval_minutes: u32,

    #[config(env = "VITALS_OUTPUT_FORMAT", default = "text")]
    pub output_format: String,
}

impl VitalsConfig {
    pub fn load() -> Result<VitalsConfig, Error> {
        let c = VitalsConfig::builder()
            .env()
            .file("settings.toml")
            .load()?;

        Ok(c)
    }

    pub fn interval(&self) -> Result<IntervalWidth, Error> {
        Ok(IntervalWidth::from_minutes(self.interval_minutes)?)
    }

    pub fn parse_output_format(&self) -> Result<OutputFormat, Error> {
        self.output_format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow!(e))
    }
}

static VITALS_CONFIG: OnceLock<Arc<VitalsConfig>> = OnceLock::new();

pub fn get() -> Result<Arc<VitalsConfig>, Error> {
    VITALS_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

pub fn load_configuration() -> Result<(), Error> {
    // Check if the configuration has already been loaded
    if VITALS_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = VitalsConfig::load()?;
    VITALS_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        temp_env::with_vars_unset(["VITALS_INTERVAL_MINUTES", "VITALS_OUTPUT_FORMAT"], || {
            let config = VitalsConfig::load().unwrap();
            assert_eq!(config.interval_minutes, 5);
            assert_eq!(config.output_format, "text");
        });

        temp_env::with_var("VITALS_INTERVAL_MINUTES", Some("15"), || {
            let config = VitalsConfig::load().unwrap();
            assert_eq!(config.interval_minutes, 15);
            assert_eq!(config.interval().unwrap().seconds(), 900);
        });
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        temp_env::with_var("VITALS_INTERVAL_MINUTES", Some("0"), || {
            let config = VitalsConfig::load().unwrap();
            assert!(config.interval().is_err());
        });
    }

    #[test]
    fn test_parse_output_format() {
        temp_env::with_var("VITALS_OUTPUT_FORMAT", Some("jsonl"), || {
            let config = VitalsConfig::load().unwrap();
            assert_eq!(config.parse_output_format().unwrap(), OutputFormat::Jsonl);
        });

        temp_env::with_var("VITALS_OUTPUT_FORMAT", Some("xml"), || {
            let config = VitalsConfig::load().unwrap();
            assert!(config.parse_output_format().is_err());
        });
    }

    #[test]
    fn test_load_configuration() {
        temp_env::with_vars_unset(["VITALS_INTERVAL_MINUTES", "VITALS_OUTPUT_FORMAT"], || {
            load_configuration().unwrap();
            assert!(VITALS_CONFIG.get().is_some());

            let config = get().unwrap();
            assert_eq!(config.interval_minutes, 5);
        });
    }
}
