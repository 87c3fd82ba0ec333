use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Returns `(page, per_page, offset)`. The offset saturates at `i64::MAX`
    /// so it always fits a Postgres `BIGINT`.
    pub fn normalize(&self) -> (u64, u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page).min(i64::MAX as u64);
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: Meta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        Self {
            items,
            meta: Meta {
                page,
                per_page,
                total,
            },
        }
    }
}
