use indexmap::IndexMap;

/// Caller-supplied variable values, keyed by variable name without `$`.
pub type VariableValues = IndexMap<String, ResolvedValue>;

/// A fully resolved input value: literals cooked and variables substituted.
///
/// Unlike a [`SuppliedValueRef`](crate::supplied_value::SuppliedValueRef),
/// a `ResolvedValue` owns its data and outlives the document it came from.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResolvedValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<ResolvedValue>),
    Object(IndexMap<String, ResolvedValue>),
}

impl ResolvedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(value) = self {
            Some(value.as_str())
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[ResolvedValue]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, ResolvedValue>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }
}
