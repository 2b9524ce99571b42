use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the Leadscope tools.
///
/// The tier and freemium fields override the engine's built-in policy
/// constants; their defaults equal those constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub searches_path: PathBuf,
    pub export_dir: PathBuf,
    pub tier_excellent_min: u8,
    pub tier_okay_min: u8,
    pub preview_min: usize,
    pub preview_max: usize,
    pub price_units_per_block: u32,
}
