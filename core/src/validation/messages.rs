// core/src/validation/messages.rs

//! Message fragments shared by the rules and by storage backends that report
//! constraint violations.

pub const BLANK: &str = "can't be blank";
pub const TAKEN: &str = "has already been taken";
pub const MUST_EXIST: &str = "must exist";
pub const SAME_PRODUCT: &str = "cannot be the same product.";
pub const ASSOCIATED_TWICE: &str = "cannot associate twice.";
