use std::fmt;

use crate::domain::error::DomainError;

/// bcrypt work factor, validated against the range the library accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u32);

impl Cost {
    pub const MIN: u32 = 4;
    pub const MAX: u32 = 31;
    pub const DEFAULT: u32 = bcrypt::DEFAULT_COST;

    pub fn new(cost: u32) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&cost) {
            Ok(Self(cost))
        } else {
            Err(DomainError::InvalidCost(cost))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for Cost {
    type Error = DomainError;

    fn try_from(cost: u32) -> Result<Self, Self::Error> {
        Self::new(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
