use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::domain::common::entities::app_errors::CoreError;

use super::{
    filter::{FieldFilter, FilterOperator, FilterSpec},
    predicate::{ColumnRef, Comparison, Operand, Predicate, ScalarValue},
    schema::{FieldDef, FieldKind, QuerySchema, SearchTarget},
};

/// Builds the listing predicate for one entity schema.
///
/// Fields outside the schema whitelist are dropped silently. `iLike` terms
/// are OR-ed together, every other term is AND-ed, and when both groups are
/// present the result is `AND(and_terms.., OR(ilike_terms..))`.
pub struct WhereClauseBuilder<'a> {
    schema: &'a QuerySchema,
}

impl<'a> WhereClauseBuilder<'a> {
    pub fn new(schema: &'a QuerySchema) -> Self {
        Self { schema }
    }

    /// Returns `None` when nothing applies.
    pub fn build(
        &self,
        filter: &FilterSpec,
        search: Option<&str>,
    ) -> Result<Option<Predicate>, CoreError> {
        if let Some(token) = search.map(str::trim).filter(|t| !t.is_empty())
            && !self.schema.search.is_empty()
        {
            return Ok(Some(self.search(token)));
        }

        let mut and_terms = Vec::new();
        let mut or_terms = Vec::new();

        for (name, field_filter) in &filter.fields {
            let Some(field) = self.schema.field(name) else {
                debug!(field = %name, table = self.schema.table, "ignoring non-queryable filter field");
                continue;
            };

            let predicate = self.field_predicate(field, field_filter)?;
            if field_filter.operator == FilterOperator::ILike {
                or_terms.push(predicate);
            } else {
                and_terms.push(predicate);
            }
        }

        Ok(match (and_terms.is_empty(), or_terms.is_empty()) {
            (true, true) => None,
            (false, true) => Some(Predicate::And(and_terms)),
            (true, false) => Some(Predicate::Or(or_terms)),
            (false, false) => {
                and_terms.push(Predicate::Or(or_terms));
                Some(Predicate::And(and_terms))
            }
        })
    }

    /// OR across every search target of the schema.
    fn search(&self, token: &str) -> Predicate {
        let pattern = like_pattern(token);

        let terms = self
            .schema
            .search
            .iter()
            .filter_map(|target| {
                let operand = match target {
                    SearchTarget::Field(name) => Operand::Column(self.column(self.schema.field(name)?)),
                    SearchTarget::Concat(names) => Operand::Concat(
                        names
                            .iter()
                            .filter_map(|name| self.schema.field(name))
                            .map(|field| self.column(field))
                            .collect(),
                    ),
                };
                Some(Predicate::term(operand, Comparison::ILike(pattern.clone())))
            })
            .collect();

        Predicate::Or(terms)
    }

    fn column(&self, field: &FieldDef) -> ColumnRef {
        ColumnRef {
            table: self.schema.table,
            column: field.column,
            kind: field.kind,
        }
    }

    fn field_predicate(
        &self,
        field: &FieldDef,
        filter: &FieldFilter,
    ) -> Result<Predicate, CoreError> {
        let column = self.column(field);
        let operand = Operand::Column(column);

        let predicate = match filter.operator {
            FilterOperator::ILike => {
                Predicate::term(operand, Comparison::ILike(like_pattern(&filter.value)))
            }
            FilterOperator::Or => {
                if field.kind == FieldKind::StringArray {
                    return Ok(Predicate::term(
                        operand,
                        Comparison::Overlap(owned(filter.values())),
                    ));
                }
                let alternatives = filter
                    .values()
                    .into_iter()
                    .map(|value| {
                        Ok(Predicate::term(
                            operand.clone(),
                            Comparison::Eq(scalar(field, value)?),
                        ))
                    })
                    .collect::<Result<Vec<Predicate>, CoreError>>()?;
                Predicate::Or(alternatives)
            }
            FilterOperator::Eq => {
                if field.kind == FieldKind::StringArray {
                    Predicate::term(operand, Comparison::Contains(vec![filter.value.clone()]))
                } else {
                    Predicate::term(operand, Comparison::Eq(scalar(field, &filter.value)?))
                }
            }
            FilterOperator::Ne => {
                scalar_only(field, filter.operator)?;
                Predicate::term(operand, Comparison::Ne(scalar(field, &filter.value)?))
            }
            FilterOperator::In => {
                scalar_only(field, filter.operator)?;
                let values = filter
                    .values()
                    .into_iter()
                    .map(|value| scalar(field, value))
                    .collect::<Result<Vec<ScalarValue>, CoreError>>()?;
                Predicate::term(operand, Comparison::In(values))
            }
            FilterOperator::Contains => {
                array_only(field, filter.operator)?;
                Predicate::term(operand, Comparison::Contains(owned(filter.values())))
            }
            FilterOperator::Overlap => {
                array_only(field, filter.operator)?;
                Predicate::term(operand, Comparison::Overlap(owned(filter.values())))
            }
            FilterOperator::Between => {
                scalar_only(field, filter.operator)?;
                let values = filter.values();
                let [low, high] = values.as_slice() else {
                    return Err(CoreError::Validation(format!(
                        "`between` on `{}` expects exactly two comma-separated values",
                        field.name
                    )));
                };
                Predicate::term(
                    operand,
                    Comparison::Between(scalar(field, low)?, scalar(field, high)?),
                )
            }
        };

        Ok(predicate)
    }
}

fn like_pattern(token: &str) -> String {
    format!("%{}%", token.trim())
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn scalar_only(field: &FieldDef, operator: FilterOperator) -> Result<(), CoreError> {
    if field.kind == FieldKind::StringArray {
        return Err(CoreError::Validation(format!(
            "operator `{operator}` is not supported on list field `{}`",
            field.name
        )));
    }
    Ok(())
}

fn array_only(field: &FieldDef, operator: FilterOperator) -> Result<(), CoreError> {
    if field.kind != FieldKind::StringArray {
        return Err(CoreError::Validation(format!(
            "operator `{operator}` is only supported on list fields, `{}` is not one",
            field.name
        )));
    }
    Ok(())
}

/// Parses a raw filter value according to the field type.
fn scalar(field: &FieldDef, raw: &str) -> Result<ScalarValue, CoreError> {
    let raw = raw.trim();
    match field.kind {
        FieldKind::String | FieldKind::Enum | FieldKind::StringArray => {
            Ok(ScalarValue::Text(raw.to_string()))
        }
        FieldKind::Integer => raw.parse::<i64>().map(ScalarValue::Integer).map_err(|_| {
            CoreError::Validation(format!("`{}` expects an integer, got `{raw}`", field.name))
        }),
        FieldKind::Timestamp => parse_timestamp(raw).map(ScalarValue::Timestamp).ok_or_else(|| {
            CoreError::Validation(format!(
                "`{}` expects an RFC 3339 timestamp or YYYY-MM-DD date, got `{raw}`",
                field.name
            ))
        }),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::query::order::SortDirection;
    use chrono::TimeZone;

    static TICKETS: QuerySchema = QuerySchema {
        table: "tickets",
        primary_key: "id",
        fields: &[
            FieldDef::new("id", "id", FieldKind::Integer),
            FieldDef::new("title", "title", FieldKind::String),
            FieldDef::new("kind", "kind", FieldKind::Enum),
            FieldDef::new("tags", "tags", FieldKind::StringArray),
            FieldDef::new("openedAt", "opened_at", FieldKind::Timestamp),
        ],
        associations: &[],
        search: &[],
        default_order: ("title", SortDirection::Asc),
    };

    static PEOPLE: QuerySchema = QuerySchema {
        table: "people",
        primary_key: "id",
        fields: &[
            FieldDef::new("firstName", "first_name", FieldKind::String),
            FieldDef::new("lastName", "last_name", FieldKind::String),
            FieldDef::new("email", "email", FieldKind::String),
            FieldDef::new("role", "role", FieldKind::Enum),
        ],
        associations: &[],
        search: &[
            SearchTarget::Concat(&["firstName", "lastName"]),
            SearchTarget::Field("email"),
            SearchTarget::Field("role"),
        ],
        default_order: ("email", SortDirection::Asc),
    };

    fn col(name: &'static str, kind: FieldKind) -> ColumnRef {
        ColumnRef {
            table: "tickets",
            column: name,
            kind,
        }
    }

    #[test]
    fn empty_filter_builds_nothing() {
        let builder = WhereClauseBuilder::new(&TICKETS);
        assert_eq!(builder.build(&FilterSpec::new(), None).unwrap(), None);
    }

    #[test]
    fn unknown_fields_never_reach_the_predicate() {
        let spec = FilterSpec::new()
            .with("password", FilterOperator::Eq, "x")
            .with("title", FilterOperator::Eq, "Alpha");

        let predicate = WhereClauseBuilder::new(&TICKETS)
            .build(&spec, None)
            .unwrap()
            .unwrap();

        let columns = predicate.columns();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].column, "title");
    }

    #[test]
    fn only_unknown_fields_build_nothing() {
        let spec = FilterSpec::new().with("secret", FilterOperator::ILike, "x");
        let predicate = WhereClauseBuilder::new(&TICKETS).build(&spec, None).unwrap();
        assert!(predicate.is_none());
    }

    #[test]
    fn ilike_terms_are_or_ed_inside_the_and_group() {
        let spec = FilterSpec::new()
            .with("title", FilterOperator::ILike, "proj")
            .with("kind", FilterOperator::ILike, "bug")
            .with("id", FilterOperator::Eq, "7");

        let predicate = WhereClauseBuilder::new(&TICKETS)
            .build(&spec, None)
            .unwrap()
            .unwrap();

        let expected = Predicate::And(vec![
            Predicate::term(
                Operand::Column(col("id", FieldKind::Integer)),
                Comparison::Eq(ScalarValue::Integer(7)),
            ),
            Predicate::Or(vec![
                Predicate::term(
                    Operand::Column(col("kind", FieldKind::Enum)),
                    Comparison::ILike("%bug%".into()),
                ),
                Predicate::term(
                    Operand::Column(col("title", FieldKind::String)),
                    Comparison::ILike("%proj%".into()),
                ),
            ]),
        ]);
        assert_eq!(predicate, expected);
    }

    #[test]
    fn ilike_alone_is_a_plain_or() {
        let spec = FilterSpec::new().with("title", FilterOperator::ILike, "proj");
        let predicate = WhereClauseBuilder::new(&TICKETS)
            .build(&spec, None)
            .unwrap()
            .unwrap();
        assert!(matches!(predicate, Predicate::Or(ref terms) if terms.len() == 1));
    }

    #[test]
    fn enum_ilike_is_marked_for_cast() {
        let spec = FilterSpec::new().with("kind", FilterOperator::ILike, "feat");
        let predicate = WhereClauseBuilder::new(&TICKETS)
            .build(&spec, None)
            .unwrap()
            .unwrap();

        let terms = predicate.terms();
        let Operand::Column(column) = &terms[0].operand else {
            panic!("expected a column operand");
        };
        assert!(column.needs_text_cast());
    }

    #[test]
    fn or_expands_to_equality_alternatives() {
        let spec = FilterSpec::new().with("kind", FilterOperator::Or, "bug,chore");
        let predicate = WhereClauseBuilder::new(&TICKETS)
            .build(&spec, None)
            .unwrap()
            .unwrap();

        let Predicate::And(group) = predicate else {
            panic!("expected an AND group");
        };
        assert_eq!(
            group[0],
            Predicate::Or(vec![
                Predicate::term(
                    Operand::Column(col("kind", FieldKind::Enum)),
                    Comparison::Eq(ScalarValue::Text("bug".into())),
                ),
                Predicate::term(
                    Operand::Column(col("kind", FieldKind::Enum)),
                    Comparison::Eq(ScalarValue::Text("chore".into())),
                ),
            ])
        );
    }

    #[test]
    fn in_reads_its_own_value() {
        let spec = FilterSpec::new().with("id", FilterOperator::In, "1,2,3");
        let predicate = WhereClauseBuilder::new(&TICKETS)
            .build(&spec, None)
            .unwrap()
            .unwrap();

        assert_eq!(
            predicate.terms()[0].comparison,
            Comparison::In(vec![
                ScalarValue::Integer(1),
                ScalarValue::Integer(2),
                ScalarValue::Integer(3),
            ])
        );
    }

    #[test]
    fn between_requires_two_values() {
        let builder = WhereClauseBuilder::new(&TICKETS);

        let spec = FilterSpec::new().with("openedAt", FilterOperator::Between, "2024-01-01");
        assert!(matches!(
            builder.build(&spec, None),
            Err(CoreError::Validation(_))
        ));

        let spec = FilterSpec::new().with(
            "openedAt",
            FilterOperator::Between,
            "2024-01-01,2024-02-01T12:00:00Z",
        );
        let predicate = builder.build(&spec, None).unwrap().unwrap();
        assert_eq!(
            predicate.terms()[0].comparison,
            Comparison::Between(
                ScalarValue::Timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
                ScalarValue::Timestamp(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()),
            )
        );
    }

    #[test]
    fn integer_fields_reject_text() {
        let spec = FilterSpec::new().with("id", FilterOperator::Eq, "abc");
        let err = WhereClauseBuilder::new(&TICKETS)
            .build(&spec, None)
            .unwrap_err();
        assert_eq!(err.code(), "ValidationError");
    }

    #[test]
    fn array_operators_are_checked_against_field_type() {
        let builder = WhereClauseBuilder::new(&TICKETS);

        let spec = FilterSpec::new().with("tags", FilterOperator::Contains, "ui,backend");
        let predicate = builder.build(&spec, None).unwrap().unwrap();
        assert_eq!(
            predicate.terms()[0].comparison,
            Comparison::Contains(vec!["ui".into(), "backend".into()])
        );

        let spec = FilterSpec::new().with("title", FilterOperator::Overlap, "a");
        assert!(builder.build(&spec, None).is_err());

        let spec = FilterSpec::new().with("tags", FilterOperator::Between, "a,b");
        assert!(builder.build(&spec, None).is_err());
    }

    #[test]
    fn search_ignores_every_filter() {
        let spec = FilterSpec::new()
            .with("email", FilterOperator::Eq, "someone@example.com")
            .with("role", FilterOperator::Eq, "admin");

        let predicate = WhereClauseBuilder::new(&PEOPLE)
            .build(&spec, Some("ann"))
            .unwrap()
            .unwrap();

        let Predicate::Or(terms) = &predicate else {
            panic!("search must be an OR");
        };
        assert_eq!(terms.len(), 3);
        for term in predicate.terms() {
            assert_eq!(term.comparison, Comparison::ILike("%ann%".into()));
        }
        assert!(matches!(
            &predicate.terms()[0].operand,
            Operand::Concat(columns) if columns.len() == 2
        ));
    }

    #[test]
    fn blank_search_falls_back_to_filters() {
        let spec = FilterSpec::new().with("role", FilterOperator::Eq, "admin");
        let predicate = WhereClauseBuilder::new(&PEOPLE)
            .build(&spec, Some("   "))
            .unwrap()
            .unwrap();
        assert!(matches!(predicate, Predicate::And(_)));
    }

    #[test]
    fn search_is_ignored_without_targets() {
        let predicate = WhereClauseBuilder::new(&TICKETS)
            .build(&FilterSpec::new(), Some("alpha"))
            .unwrap();
        assert!(predicate.is_none());
    }
}
