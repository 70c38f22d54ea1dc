//! Paging and sorting of post listings.

use std::str::FromStr;

use crate::error::DomainError;

/// Post columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Author,
    CreatedAt,
    UpdatedAt,
}

impl FromStr for SortField {
    type Err = DomainError;

    /// Accepts the JSON field names (`createdAt`) as well as column names (`created_at`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            other => Err(DomainError::Validation(format!(
                "sortBy: unsupported sort field '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// `DESC` in any case is descending; everything else is ascending.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Sort {
    pub fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    pub fn newest_first() -> Self {
        Self::new(SortField::CreatedAt, Direction::Desc)
    }

    pub fn from_params(sort_by: &str, direction: &str) -> Result<Self, DomainError> {
        Ok(Self::new(sort_by.parse()?, Direction::from_param(direction)))
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::newest_first()
    }
}

/// Zero-based page index, page size and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl PageRequest {
    /// A size of zero is bumped to one.
    pub fn new(page: u64, size: u64, sort: Sort) -> Self {
        Self {
            page,
            size: size.max(1),
            sort,
        }
    }
}

/// One page of results plus the totals of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            current_page: self.current_page,
            size: self.size,
        }
    }
}
