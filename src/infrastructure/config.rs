use crate::domain::{error::DomainError, models::cost::Cost};

pub const COST_ENV_VAR: &str = "PASSWORD_HASH_COST";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HasherConfig {
    pub cost: Cost,
}

impl HasherConfig {
    pub fn new(cost: Cost) -> Self {
        Self { cost }
    }

    /// Load from the process environment (and `.env`, if present).
    ///
    /// An unset `PASSWORD_HASH_COST` falls back to the default cost.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_value(dotenvy::var(COST_ENV_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self, DomainError> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };

        let cost = raw.parse::<u32>().map_err(|_| {
            DomainError::InvalidConfig(format!("{COST_ENV_VAR} must be an integer, got {raw:?}"))
        })?;

        Ok(Self::new(Cost::new(cost)?))
    }
}
