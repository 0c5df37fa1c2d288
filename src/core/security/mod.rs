// Security module for input validation
//
// This module provides the gates that externally supplied values pass
// through before they are used to build upstream requests.

pub mod typeid;

pub use typeid::{TypeId, TypeIdError, is_valid_typeid, validate_typeid};
