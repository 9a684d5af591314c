mod float_compare;

pub use float_compare::*;
