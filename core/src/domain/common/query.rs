//! Request-scoped list query translation.
//!
//! A listing request travels through three stages before it reaches a
//! repository: the [`filter`] parser turns `filter[field][op]=value` pairs into
//! a [`filter::FilterSpec`], the [`where_clause`] builder combines it with the
//! entity's [`schema::QuerySchema`] into a [`predicate::Predicate`], and the
//! [`order`] builder resolves the `order` token into a single ORDER BY clause.
//! Repositories only ever see the resulting [`ListCriteria`].

pub mod filter;
pub mod order;
pub mod predicate;
pub mod schema;
pub mod where_clause;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

use self::{
    filter::FilterSpec,
    order::{OrderBuilder, OrderClause},
    predicate::Predicate,
    schema::QuerySchema,
    where_clause::WhereClauseBuilder,
};

/// Which rows a listing sees with respect to soft deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletedScope {
    #[default]
    Active,
    OnlyDeleted,
    All,
}

impl DeletedScope {
    /// `all` wins over `deleted` when both are set.
    pub fn from_flags(all: bool, deleted: bool) -> Self {
        if all {
            DeletedScope::All
        } else if deleted {
            DeletedScope::OnlyDeleted
        } else {
            DeletedScope::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

impl Pagination {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0) as u64,
            limit: limit.unwrap_or(20).clamp(1, 100) as u64, // Default 20, max 100
        }
    }
}

/// Everything a listing endpoint received, before translation.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: FilterSpec,
    pub search: Option<String>,
    pub order: Option<String>,
    pub all: bool,
    pub deleted: bool,
    pub pagination: Pagination,
}

impl ListQuery {
    pub fn into_criteria(self, schema: &QuerySchema) -> Result<ListCriteria, CoreError> {
        let predicate =
            WhereClauseBuilder::new(schema).build(&self.filter, self.search.as_deref())?;
        let order = OrderBuilder::new(schema).build(self.order.as_deref());

        Ok(ListCriteria {
            predicate,
            order,
            scope: DeletedScope::from_flags(self.all, self.deleted),
            pagination: self.pagination,
        })
    }
}

/// Translated listing input handed to repositories.
#[derive(Debug, Clone)]
pub struct ListCriteria {
    pub predicate: Option<Predicate>,
    pub order: OrderClause,
    pub scope: DeletedScope,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub count: usize,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            count: items.len(),
            items,
            offset: pagination.offset,
            limit: pagination.limit,
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            count: self.count,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_from_flags() {
        assert_eq!(DeletedScope::from_flags(false, false), DeletedScope::Active);
        assert_eq!(DeletedScope::from_flags(false, true), DeletedScope::OnlyDeleted);
        assert_eq!(DeletedScope::from_flags(true, false), DeletedScope::All);
        assert_eq!(DeletedScope::from_flags(true, true), DeletedScope::All);
    }

    #[test]
    fn pagination_is_clamped() {
        let p = Pagination::new(Some(-5), Some(500));
        assert_eq!(p.offset, 0);
        assert_eq!(p.limit, 100);

        let p = Pagination::new(None, Some(0));
        assert_eq!(p.limit, 1);

        assert_eq!(Pagination::new(None, None), Pagination::default());
    }
}
