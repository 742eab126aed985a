
/// Contains the shared error type reported by both transforms
pub mod bwt_core;
/// Contains the inverse transform, rebuilding a string from its (last column, primary index) pair
pub mod bwt_inverse;
/// Contains the forward transform, from a string to its (last column, primary index) pair
pub mod bwt_transform;
/// Rotation ordering and column counting utilities shared by the transforms
pub mod string_util;
