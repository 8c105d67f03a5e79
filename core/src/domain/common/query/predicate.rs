use chrono::{DateTime, Utc};

use super::schema::FieldKind;

/// A table-qualified column with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

impl ColumnRef {
    /// Enum storage types only compare against text once cast.
    pub fn needs_text_cast(&self) -> bool {
        self.kind == FieldKind::Enum
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Column(ColumnRef),
    /// Columns joined with a single space, e.g. `first_name || ' ' || last_name`.
    Concat(Vec<ColumnRef>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Case-insensitive pattern, already wrapped in `%`.
    ILike(String),
    Eq(ScalarValue),
    Ne(ScalarValue),
    In(Vec<ScalarValue>),
    /// Array column contains every listed element.
    Contains(Vec<String>),
    /// Array column shares at least one element.
    Overlap(Vec<String>),
    Between(ScalarValue, ScalarValue),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub operand: Operand,
    pub comparison: Comparison,
}

/// Boolean predicate produced by the where-clause builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Term(Term),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn term(operand: Operand, comparison: Comparison) -> Self {
        Predicate::Term(Term {
            operand,
            comparison,
        })
    }

    /// Every column referenced anywhere in the predicate.
    pub fn columns(&self) -> Vec<ColumnRef> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns(&self, out: &mut Vec<ColumnRef>) {
        match self {
            Predicate::Term(term) => match &term.operand {
                Operand::Column(column) => out.push(*column),
                Operand::Concat(columns) => out.extend(columns.iter().copied()),
            },
            Predicate::And(children) | Predicate::Or(children) => {
                for child in children {
                    child.collect_columns(out);
                }
            }
        }
    }

    /// Every term, depth first.
    pub fn terms(&self) -> Vec<&Term> {
        match self {
            Predicate::Term(term) => vec![term],
            Predicate::And(children) | Predicate::Or(children) => {
                children.iter().flat_map(Predicate::terms).collect()
            }
        }
    }
}
