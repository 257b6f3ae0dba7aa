use crate::supplied_value::ResolvedValue;
use crate::supplied_value::ValueResolutionError;
use crate::supplied_value::VariableValues;

/// The contract shared by every supplied-value variant.
pub trait ResolvableValue {
    /// Structural comparison against `other`.
    ///
    /// For complex values this only checks that every field of `self` has an
    /// equal field in `other`; extra fields in `other` are not examined.
    fn is_equal_to(&self, other: &Self) -> bool;

    /// [`is_equal_to`](Self::is_equal_to) applied in both directions.
    fn is_structurally_equal(&self, other: &Self) -> bool {
        self.is_equal_to(other) && other.is_equal_to(self)
    }

    /// Produces the concrete value, substituting `variables` for variable
    /// usages.
    fn resolve(&self, variables: &VariableValues) -> Result<ResolvedValue, ValueResolutionError>;
}
