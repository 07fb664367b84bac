//! Filter object -> WHERE clause translation
//!
//! Pure functions from the memo-core filter structs to SQL fragments, so the
//! predicate building can be checked without a database.

use memo_core::filters::{
    DeleteMemoRelation, FindMemo, FindMemoComment, FindMemoRelation, FindNest, FindReaction,
};

use super::where_clause::{Pagination, WhereClause};
use crate::dialect::Dialect;

const NEWEST_FIRST: &str = " ORDER BY id DESC";
const RECENTLY_UPDATED_FIRST: &str = " ORDER BY updated_ts DESC, id DESC";

/// A filter that renders to `WHERE ...` plus an ordering/pagination tail
pub trait FilterQuery {
    /// Conjunction of the predicates present on the filter
    fn where_clause(&self, dialect: Dialect) -> WhereClause;

    /// `ORDER BY ...` followed by any LIMIT/OFFSET
    fn tail(&self) -> String;
}

impl FilterQuery for FindReaction {
    fn where_clause(&self, dialect: Dialect) -> WhereClause {
        let mut clause = WhereClause::new(dialect);
        clause
            .and_eq_opt("id", self.id)
            .and_eq_opt("creator_id", self.creator_id)
            .and_eq_opt("content_id", self.content_id);
        clause
    }

    fn tail(&self) -> String {
        NEWEST_FIRST.to_string()
    }
}

impl FilterQuery for FindMemoComment {
    fn where_clause(&self, dialect: Dialect) -> WhereClause {
        let mut clause = WhereClause::new(dialect);
        clause
            .and_eq_opt("id", self.id)
            .and_eq_opt("memo_id", self.memo_id)
            .and_like_all("content", &self.content_search);
        clause
    }

    fn tail(&self) -> String {
        let order = if self.order_by_updated_ts {
            RECENTLY_UPDATED_FIRST
        } else {
            NEWEST_FIRST
        };
        format!("{order}{}", Pagination::new(self.limit, self.offset))
    }
}

impl FilterQuery for FindMemo {
    fn where_clause(&self, dialect: Dialect) -> WhereClause {
        let mut clause = WhereClause::new(dialect);
        clause
            .and_eq_opt("id", self.id)
            .and_eq_opt("creator_id", self.creator_id)
            .and_eq_opt("nest_id", self.nest_id)
            .and_like_all("content", &self.content_search);
        clause
    }

    fn tail(&self) -> String {
        let order = if self.order_by_updated_ts {
            RECENTLY_UPDATED_FIRST
        } else {
            NEWEST_FIRST
        };
        format!("{order}{}", Pagination::new(self.limit, self.offset))
    }
}

impl FilterQuery for FindMemoRelation {
    fn where_clause(&self, dialect: Dialect) -> WhereClause {
        relation_clause(
            dialect,
            self.memo_id,
            self.related_memo_id,
            self.relation_type.map(|t| t.as_str()),
        )
    }

    fn tail(&self) -> String {
        " ORDER BY memo_id, related_memo_id".to_string()
    }
}

/// Deletes carry no ordering; only the WHERE clause is meaningful
impl FilterQuery for DeleteMemoRelation {
    fn where_clause(&self, dialect: Dialect) -> WhereClause {
        relation_clause(
            dialect,
            self.memo_id,
            self.related_memo_id,
            self.relation_type.map(|t| t.as_str()),
        )
    }

    fn tail(&self) -> String {
        String::new()
    }
}

fn relation_clause(
    dialect: Dialect,
    memo_id: Option<i64>,
    related_memo_id: Option<i64>,
    relation_type: Option<&str>,
) -> WhereClause {
    let mut clause = WhereClause::new(dialect);
    clause
        .and_eq_opt("memo_id", memo_id)
        .and_eq_opt("related_memo_id", related_memo_id)
        .and_eq_opt("relation_type", relation_type);
    clause
}

impl FilterQuery for FindNest {
    fn where_clause(&self, dialect: Dialect) -> WhereClause {
        let mut clause = WhereClause::new(dialect);
        clause
            .and_eq_opt("id", self.id)
            .and_eq_opt("uid", self.uid.as_deref())
            .and_eq_opt("creator_id", self.creator_id);
        clause
    }

    fn tail(&self) -> String {
        format!("{NEWEST_FIRST}{}", Pagination::new(self.limit, self.offset))
    }
}
