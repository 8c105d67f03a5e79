use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::schema::{FieldDef, FieldKind, QuerySchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A single ORDER BY expression rendered from schema identifiers only; client
/// input never reaches `expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    pub expression: String,
    pub direction: SortDirection,
}

impl fmt::Display for OrderClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expression, self.direction.as_sql())
    }
}

/// Resolves `[-]field` and `[-]Alias.field` sort tokens.
pub struct OrderBuilder<'a> {
    schema: &'a QuerySchema,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(schema: &'a QuerySchema) -> Self {
        Self { schema }
    }

    /// Falls back to the schema default for absent or unusable tokens.
    pub fn build(&self, token: Option<&str>) -> OrderClause {
        token
            .and_then(|t| self.resolve(t))
            .unwrap_or_else(|| self.default_clause())
    }

    pub fn default_clause(&self) -> OrderClause {
        let (name, direction) = self.schema.default_order;
        match self.schema.field(name) {
            Some(field) => clause(self.schema.table, field, direction),
            None => OrderClause {
                expression: quoted(self.schema.table, self.schema.primary_key),
                direction,
            },
        }
    }

    fn resolve(&self, token: &str) -> Option<OrderClause> {
        // `order=a,b` keeps only the first key
        let token = token.split(',').next()?.trim();

        let (direction, path) = match token.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest.trim()),
            None => (SortDirection::Asc, token),
        };

        let segments = path.split('.').collect::<Vec<&str>>();
        let resolved = match segments.as_slice() {
            [field] if !field.is_empty() => self
                .schema
                .field(field)
                .map(|f| clause(self.schema.table, f, direction)),
            [alias, field] if !alias.is_empty() && !field.is_empty() => {
                self.schema.association(alias).and_then(|association| {
                    association
                        .schema
                        .field(field)
                        .map(|f| clause(association.join_alias, f, direction))
                })
            }
            _ => None,
        };

        if resolved.is_none() {
            debug!(token, table = self.schema.table, "unusable order token, using default");
        }
        resolved
    }
}

fn quoted(table: &str, column: &str) -> String {
    format!("\"{table}\".\"{column}\"")
}

fn clause(table: &str, field: &FieldDef, direction: SortDirection) -> OrderClause {
    let column = quoted(table, field.column);
    let expression = match field.kind {
        FieldKind::Enum => format!("CAST({column} AS text)"),
        _ => column,
    };
    OrderClause {
        expression,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::query::schema::Association;

    static PEOPLE: QuerySchema = QuerySchema {
        table: "people",
        primary_key: "id",
        fields: &[
            FieldDef::new("firstName", "first_name", FieldKind::String),
            FieldDef::new("email", "email", FieldKind::String),
        ],
        associations: &[],
        search: &[],
        default_order: ("email", SortDirection::Asc),
    };

    static TICKETS: QuerySchema = QuerySchema {
        table: "tickets",
        primary_key: "id",
        fields: &[
            FieldDef::new("title", "title", FieldKind::String),
            FieldDef::new("priority", "priority", FieldKind::Enum),
            FieldDef::new("createdAt", "created_at", FieldKind::Timestamp),
        ],
        associations: &[Association {
            alias: "Reporter",
            join_alias: "reporter",
            schema: &PEOPLE,
        }],
        search: &[],
        default_order: ("title", SortDirection::Asc),
    };

    fn order(token: Option<&str>) -> String {
        OrderBuilder::new(&TICKETS).build(token).to_string()
    }

    #[test]
    fn absent_token_uses_default() {
        assert_eq!(order(None), r#""tickets"."title" ASC"#);
        assert_eq!(
            OrderBuilder::new(&PEOPLE).build(None).to_string(),
            r#""people"."email" ASC"#
        );
    }

    #[test]
    fn plain_field_ascending() {
        assert_eq!(order(Some("createdAt")), r#""tickets"."created_at" ASC"#);
    }

    #[test]
    fn dash_prefix_is_descending() {
        assert_eq!(order(Some("-createdAt")), r#""tickets"."created_at" DESC"#);
    }

    #[test]
    fn enum_columns_are_cast() {
        assert_eq!(
            order(Some("-priority")),
            r#"CAST("tickets"."priority" AS text) DESC"#
        );
    }

    #[test]
    fn alias_resolves_to_joined_association() {
        assert_eq!(
            order(Some("Reporter.firstName")),
            r#""reporter"."first_name" ASC"#
        );
        assert_eq!(
            order(Some("-reporter.firstName")),
            r#""reporter"."first_name" DESC"#
        );
    }

    #[test]
    fn bad_tokens_degrade_to_default() {
        for token in [
            "",
            "-",
            "unknown",
            "Reporter.password",
            "Owner.firstName",
            "a.b.c",
            ".title",
            "title; DROP TABLE tickets",
        ] {
            assert_eq!(order(Some(token)), r#""tickets"."title" ASC"#, "token {token:?}");
        }
    }

    #[test]
    fn only_first_key_is_used() {
        assert_eq!(order(Some("-createdAt,title")), r#""tickets"."created_at" DESC"#);
    }
}
