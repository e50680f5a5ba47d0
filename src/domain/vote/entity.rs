// src/domain/vote/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ids::{UserId, VoteId};
use crate::domain::post::PostRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    pub fn as_i64(self) -> i64 {
        match self {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = DomainError;

    fn try_from(value: i64) -> DomainResult<Self> {
        match value {
            1 => Ok(VoteValue::Up),
            -1 => Ok(VoteValue::Down),
            other => Err(DomainError::Validation(format!(
                "vote must be 1 or -1, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: VoteId,
    pub target: PostRef,
    pub voter: UserId,
    pub value: VoteValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unit_values_are_votes() {
        assert_eq!(VoteValue::try_from(1).unwrap(), VoteValue::Up);
        assert_eq!(VoteValue::try_from(-1).unwrap().as_i64(), -1);
        assert!(VoteValue::try_from(0).is_err());
        assert!(VoteValue::try_from(2).is_err());
    }
}
