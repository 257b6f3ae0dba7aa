//! Values supplied to arguments, input fields and variable defaults.
//!
//! Resolution happens in two phases. Assembly records each value as a
//! [`SuppliedValue`] part, keeping variable usages as names. Later,
//! [`SuppliedValueRef::resolve`] combines those parts with caller-supplied
//! variable values to produce an owned [`ResolvedValue`].

mod resolvable_value;
mod resolved_value;
mod supplied_value;
mod supplied_value_ref;
mod value_resolution_error;

pub use resolvable_value::ResolvableValue;
pub use resolved_value::ResolvedValue;
pub use resolved_value::VariableValues;
pub use supplied_value::SuppliedValue;
pub use supplied_value_ref::SuppliedValueRef;
pub use value_resolution_error::ValueResolutionError;
