
use bitvec::prelude::*;

use crate::bwt_core::BwtError;
use crate::string_util::first_column_offsets;

/// Builds the last-to-first mapping for a transform output.
/// Position `i` in the last column maps to the position of the same character
/// occurrence in the sorted first column: each occurrence of a character
/// claims the next unclaimed slot inside that character's first-column block.
/// The result is a permutation of `[0, n)` for any input.
/// # Arguments
/// * `transformed` - the transform output, treated as the last column
/// # Examples
/// ```rust
/// use sbwt::bwt_inverse::last_to_first_mapping;
///
/// //last column "ANNB$AA" sorts into the first column "$AAABNN"
/// assert_eq!(last_to_first_mapping(b"ANNB$AA"), vec![1, 5, 6, 4, 0, 2, 3]);
/// ```
pub fn last_to_first_mapping(transformed: &[u8]) -> Vec<usize> {
    let mut next_position = first_column_offsets(transformed);
    let mut mapping = vec![0usize; transformed.len()];
    for (i, c) in transformed.iter().enumerate() {
        let slot = next_position
            .get_mut(c)
            .expect("every character of the column has a first-column offset");
        mapping[i] = *slot;
        *slot += 1;
    }
    mapping
}

/// Inverts a Burrows-Wheeler transform, reconstructing the original string
/// from the transform output and its primary index.
/// The reconstruction walks the last-to-first mapping starting at the primary
/// index, collecting one character per step in reverse order, and reverses the
/// buffer once at the end. A well-formed pair visits every position exactly
/// once; a pair that no forward transform could have produced revisits a
/// position early and is rejected with `BwtError::MalformedTransform` instead
/// of yielding a wrong or truncated string.
/// # Arguments
/// * `transformed` - the transform output (the last column), must not be empty
/// * `primary_index` - the sorted rank of the original string among its rotations
/// # Examples
/// ```rust
/// use sbwt::bwt_inverse::inverse;
///
/// let original = inverse(b"ANNB$AA", 4).unwrap();
/// assert_eq!(original, b"BANANA$");
/// ```
pub fn inverse(transformed: &[u8], primary_index: usize) -> Result<Vec<u8>, BwtError> {
    if transformed.is_empty() {
        return Err(BwtError::EmptyInput);
    }
    let n = transformed.len();
    if primary_index >= n {
        return Err(BwtError::IndexOutOfRange { index: primary_index, length: n });
    }

    let mapping = last_to_first_mapping(transformed);
    let mut visited = bitvec![u64, Msb0; 0; n];
    let mut reversed: Vec<u8> = Vec::with_capacity(n);
    let mut current = primary_index;
    for _ in 0..n {
        if visited[current] {
            return Err(BwtError::MalformedTransform { position: current });
        }
        visited.set(current, true);

        //the last column holds the character that precedes the current rotation
        reversed.push(transformed[current]);
        current = mapping[current];
    }

    //the walk follows predecessors, so the characters came out back to front
    reversed.reverse();
    Ok(reversed)
}
