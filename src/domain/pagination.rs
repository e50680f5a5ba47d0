// src/domain/pagination.rs

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Offset window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub skip: u32,
}

impl PageRequest {
    /// `limit == 0` asks for everything, which is capped at
    /// [`MAX_PAGE_LIMIT`] like any other limit.
    pub fn new(limit: u32, skip: u32) -> Self {
        let limit = if limit == 0 {
            MAX_PAGE_LIMIT
        } else {
            limit.min(MAX_PAGE_LIMIT)
        };
        Self { limit, skip }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(limit, 0)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_means_max() {
        assert_eq!(PageRequest::new(0, 3).limit, MAX_PAGE_LIMIT);
        assert_eq!(PageRequest::new(0, 3).skip, 3);
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(PageRequest::new(500, 0).limit, MAX_PAGE_LIMIT);
        assert_eq!(PageRequest::new(5, 0).limit, 5);
        assert_eq!(PageRequest::default().limit, DEFAULT_PAGE_LIMIT);
    }
}
