use super::order::SortDirection;

/// Column type table entry, decides casting and value parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Enum,
    Timestamp,
    Integer,
    StringArray,
}

/// A queryable field: client-facing name mapped onto a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }
}

/// Client alias (`Reporter`) for a joined association (`reporter`).
#[derive(Debug, Clone, Copy)]
pub struct Association {
    pub alias: &'static str,
    pub join_alias: &'static str,
    pub schema: &'static QuerySchema,
}

/// One target of the free-text search mode.
#[derive(Debug, Clone, Copy)]
pub enum SearchTarget {
    Field(&'static str),
    /// Space-joined concatenation of several fields.
    Concat(&'static [&'static str]),
}

/// Whitelist and type table for one listable entity.
#[derive(Debug)]
pub struct QuerySchema {
    pub table: &'static str,
    pub primary_key: &'static str,
    pub fields: &'static [FieldDef],
    pub associations: &'static [Association],
    pub search: &'static [SearchTarget],
    pub default_order: (&'static str, SortDirection),
}

impl QuerySchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn association(&self, alias: &str) -> Option<&Association> {
        self.associations
            .iter()
            .find(|a| a.alias.eq_ignore_ascii_case(alias))
    }

    pub fn is_whitelisted(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MEMBERS: QuerySchema = QuerySchema {
        table: "members",
        primary_key: "id",
        fields: &[
            FieldDef::new("id", "id", FieldKind::Integer),
            FieldDef::new("nickName", "nick_name", FieldKind::String),
        ],
        associations: &[],
        search: &[],
        default_order: ("nickName", SortDirection::Asc),
    };

    static TEAMS: QuerySchema = QuerySchema {
        table: "teams",
        primary_key: "id",
        fields: &[FieldDef::new("name", "name", FieldKind::String)],
        associations: &[Association {
            alias: "Captain",
            join_alias: "captain",
            schema: &MEMBERS,
        }],
        search: &[],
        default_order: ("name", SortDirection::Asc),
    };

    #[test]
    fn resolves_fields_by_client_name() {
        let field = MEMBERS.field("nickName").unwrap();
        assert_eq!(field.column, "nick_name");
        assert!(MEMBERS.field("nick_name").is_none());
    }

    #[test]
    fn association_alias_is_case_insensitive() {
        assert_eq!(TEAMS.association("captain").unwrap().join_alias, "captain");
        assert_eq!(TEAMS.association("Captain").unwrap().schema.table, "members");
        assert!(TEAMS.association("Coach").is_none());
    }
}
