use std::env;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::money::Money;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub lending: LendingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut lending = LendingConfig::default();
        if let Ok(raw) = env::var("APP_ANNUAL_RATE_PERCENT") {
            lending.annual_interest_rate_percent = raw
                .trim()
                .parse::<Decimal>()
                .map_err(|_| ConfigError::InvalidRate { value: raw })?;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            lending,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// One rung of the credit-score ladder: the lowest score that qualifies for
/// the given maximum loan amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditScoreTier {
    pub min_score: u16,
    pub max_loan_amount: Money,
}

/// Dormant FOIR (fixed-obligation-to-income-ratio) affordability policy.
///
/// Not part of the default decision path; see
/// [`LendingConfig::foir`]. The assumed tenure feeds the inverse EMI formula
/// when deriving a capacity-implied maximum principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoirPolicy {
    pub max_foir: Decimal,
    pub assumed_tenure_months: u32,
}

impl Default for FoirPolicy {
    fn default() -> Self {
        Self {
            max_foir: dec!(0.50),
            assumed_tenure_months: 12,
        }
    }
}

/// Immutable platform lending parameters, passed into both the eligibility
/// engine and the amortization calculator at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct LendingConfig {
    pub annual_interest_rate_percent: Decimal,
    pub allowed_tenures: Vec<u32>,
    pub min_loan_amount: Money,
    pub platform_max_loan_amount: Money,
    /// Ordered descending by `min_score`; the first rung at or below the
    /// applicant score wins.
    pub tiers: Vec<CreditScoreTier>,
    /// `None` keeps the FOIR capacity check disabled, which is the platform
    /// default. Setting it is a deliberate configuration choice.
    pub foir: Option<FoirPolicy>,
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            annual_interest_rate_percent: dec!(12.0),
            allowed_tenures: vec![3, 6, 9, 12],
            min_loan_amount: dec!(5000),
            platform_max_loan_amount: dec!(20000),
            tiers: vec![
                CreditScoreTier {
                    min_score: 800,
                    max_loan_amount: dec!(20000),
                },
                CreditScoreTier {
                    min_score: 750,
                    max_loan_amount: dec!(15000),
                },
                CreditScoreTier {
                    min_score: 700,
                    max_loan_amount: dec!(10000),
                },
                CreditScoreTier {
                    min_score: 650,
                    max_loan_amount: dec!(5000),
                },
            ],
            foir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRate { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRate { value } => {
                write!(
                    f,
                    "APP_ANNUAL_RATE_PERCENT must be a decimal percentage, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
