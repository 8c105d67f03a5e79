//! Turns list criteria into sea-orm query parts.

use sea_orm::{
    Condition, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select, Value,
    sea_query::{
        Alias, Expr, Func, SimpleExpr,
        extension::postgres::{PgBinOper, PgExpr},
    },
};

use crate::domain::common::query::{
    DeletedScope, ListCriteria,
    order::{OrderClause, SortDirection},
    predicate::{ColumnRef, Comparison, Operand, Predicate, ScalarValue, Term},
    schema::{FieldKind, QuerySchema},
};

pub fn predicate_condition(predicate: &Predicate) -> Condition {
    match predicate {
        Predicate::And(children) => children
            .iter()
            .fold(Condition::all(), |acc, child| acc.add(predicate_condition(child))),
        Predicate::Or(children) => children
            .iter()
            .fold(Condition::any(), |acc, child| acc.add(predicate_condition(child))),
        Predicate::Term(term) => Condition::all().add(term_expr(term)),
    }
}

pub fn scope_condition(table: &str, scope: DeletedScope) -> Option<SimpleExpr> {
    let deleted_at = Expr::col((Alias::new(table), Alias::new("deleted_at")));
    match scope {
        DeletedScope::Active => Some(deleted_at.is_null()),
        DeletedScope::OnlyDeleted => Some(deleted_at.is_not_null()),
        DeletedScope::All => None,
    }
}

/// WHERE part of a listing: the predicate ANDed with the soft-delete scope.
pub fn apply_filters<E>(
    select: Select<E>,
    schema: &QuerySchema,
    criteria: &ListCriteria,
) -> Select<E>
where
    E: EntityTrait,
{
    let mut condition = Condition::all();
    if let Some(predicate) = &criteria.predicate {
        condition = condition.add(predicate_condition(predicate));
    }
    if let Some(scope) = scope_condition(schema.table, criteria.scope) {
        condition = condition.add(scope);
    }
    select.filter(condition)
}

/// ORDER BY the resolved clause, then the primary key so pages are stable.
pub fn apply_order<E>(select: Select<E>, schema: &QuerySchema, order: &OrderClause) -> Select<E>
where
    E: EntityTrait,
{
    let direction = match order.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };
    let primary_key = SimpleExpr::from(Expr::col((
        Alias::new(schema.table),
        Alias::new(schema.primary_key),
    )));

    select
        .order_by(Expr::cust(order.expression.clone()), direction)
        .order_by(primary_key, Order::Asc)
}

pub fn apply_pagination<E>(select: Select<E>, criteria: &ListCriteria) -> Select<E>
where
    E: EntityTrait,
{
    select
        .offset(criteria.pagination.offset)
        .limit(criteria.pagination.limit)
}

/// Whether the ORDER BY clause reads from the given join alias.
pub fn order_uses(order: &OrderClause, join_alias: &str) -> bool {
    order.expression.contains(&format!("\"{join_alias}\"."))
}

fn column(column: &ColumnRef) -> Expr {
    Expr::col((Alias::new(column.table), Alias::new(column.column)))
}

fn text_column(column_ref: &ColumnRef) -> SimpleExpr {
    match column_ref.kind {
        FieldKind::String => column(column_ref).into(),
        _ => column(column_ref).cast_as(Alias::new("text")),
    }
}

fn operand_expr(operand: &Operand, comparison: &Comparison) -> Expr {
    match operand {
        Operand::Column(column_ref) => match comparison {
            Comparison::ILike(_) => Expr::expr(text_column(column_ref)),
            _ if column_ref.needs_text_cast() => {
                Expr::expr(column(column_ref).cast_as(Alias::new("text")))
            }
            _ => column(column_ref),
        },
        Operand::Concat(columns) => {
            let mut args: Vec<SimpleExpr> = Vec::with_capacity(columns.len() * 2);
            for (i, column_ref) in columns.iter().enumerate() {
                if i > 0 {
                    args.push(Expr::val(" ").into());
                }
                args.push(SimpleExpr::from(column(column_ref)));
            }
            Expr::expr(SimpleExpr::from(Func::cust(Alias::new("CONCAT")).args(args)))
        }
    }
}

fn value(scalar: &ScalarValue) -> Value {
    match scalar {
        ScalarValue::Text(text) => Value::from(text.clone()),
        ScalarValue::Integer(number) => Value::from(*number),
        ScalarValue::Timestamp(timestamp) => Value::from(*timestamp),
    }
}

fn term_expr(term: &Term) -> SimpleExpr {
    let operand = operand_expr(&term.operand, &term.comparison);
    match &term.comparison {
        Comparison::ILike(pattern) => operand.ilike(pattern.as_str()),
        Comparison::Eq(scalar) => operand.eq(value(scalar)),
        Comparison::Ne(scalar) => operand.ne(value(scalar)),
        Comparison::In(scalars) => operand.is_in(scalars.iter().map(value)),
        Comparison::Contains(items) => {
            operand.binary(PgBinOper::Contains, Expr::val(items.clone()))
        }
        Comparison::Overlap(items) => {
            operand.binary(PgBinOper::Overlap, Expr::val(items.clone()))
        }
        Comparison::Between(low, high) => operand.between(value(low), value(high)),
    }
}
