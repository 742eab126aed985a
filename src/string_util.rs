
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Builds the cyclic rotation of a string at the given offset, i.e.
/// `input[offset..]` followed by `input[..offset]`.
/// # Arguments
/// * `input` - the string getting rotated
/// * `offset` - the rotation offset, must be at most the string length
/// # Examples
/// ```rust
/// use sbwt::string_util::rotation;
/// assert_eq!(rotation(b"BANANA$", 2), b"NANA$BA");
/// assert_eq!(rotation(b"BANANA$", 0), b"BANANA$");
/// ```
pub fn rotation(input: &[u8], offset: usize) -> Vec<u8> {
    let mut ret = Vec::with_capacity(input.len());
    ret.extend_from_slice(&input[offset..]);
    ret.extend_from_slice(&input[..offset]);
    ret
}

/// Lexicographically compares the rotations of `input` at offsets `i` and `j`
/// without materializing either one. Both rotations have the full string
/// length, so `Ordering::Equal` only comes back when they are
/// character-for-character identical, which cannot happen for a string with a
/// unique terminator.
/// # Arguments
/// * `input` - the string both rotations are drawn from
/// * `i` - the offset of the first rotation
/// * `j` - the offset of the second rotation
pub fn compare_rotations(input: &[u8], i: usize, j: usize) -> Ordering {
    let n = input.len();
    (0..n)
        .map(|k| input[(i + k) % n].cmp(&input[(j + k) % n]))
        .find(|&ord| ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Sorts the offsets of all rotations of a string into lexicographic rotation
/// order. The sort is stable, so identical rotations stay in ascending offset
/// order and the result is deterministic for every input.
/// # Arguments
/// * `input` - the string whose rotations get ordered
/// # Examples
/// ```rust
/// use sbwt::string_util::sorted_rotation_offsets;
/// //sorted rotations: $BANANA, A$BANAN, ANA$BAN, ANANA$B, BANANA$, NA$BANA, NANA$BA
/// assert_eq!(sorted_rotation_offsets(b"BANANA$"), vec![6, 5, 3, 1, 0, 4, 2]);
/// ```
pub fn sorted_rotation_offsets(input: &[u8]) -> Vec<usize> {
    let mut offsets: Vec<usize> = (0..input.len()).collect();
    offsets.sort_by(|&i, &j| compare_rotations(input, i, j));
    offsets
}

/// Determines the offset hashmap for a column of characters.
/// The offset hashmap is the mapping from a character to the number of
/// lexicographically lesser characters present in the column, which is also
/// the index where that character's block begins once the column is sorted.
/// # Arguments
/// * `column` - the characters to summarize, typically a transform output
/// # Examples
/// ```rust
/// use sbwt::string_util::first_column_offsets;
/// use std::collections::HashMap;
/// let offsets: HashMap<u8, usize> = first_column_offsets(b"ANNB$AA");
///
/// assert_eq!(offsets, vec![(b'$', 0), (b'A', 1), (b'B', 4), (b'N', 5)].into_iter().collect::<HashMap<u8, usize>>());
/// ```
pub fn first_column_offsets(column: &[u8]) -> HashMap<u8, usize> {
    let mut num_occurrences: HashMap<u8, usize> = HashMap::new();
    for &c in column {
        num_occurrences.entry(c).and_modify(|counter| *counter += 1).or_insert(1);
    }
    let ordered_chars = num_occurrences.keys().copied().sorted().collect::<Vec<u8>>();
    let mut total = 0usize;
    let mut offset_map = HashMap::with_capacity(num_occurrences.len());
    for c in ordered_chars {
        offset_map.insert(c, total);
        total += num_occurrences[&c];
    }
    offset_map
}

#[cfg(test)]
mod tests {
    use super::*;

    /// slow reference ordering that materializes every rotation
    fn naive_rotation_offsets(input: &[u8]) -> Vec<usize> {
        let mut pairs: Vec<(Vec<u8>, usize)> =
            (0..input.len()).map(|i| (rotation(input, i), i)).collect();
        pairs.sort();
        pairs.into_iter().map(|(_, i)| i).collect()
    }

    #[test]
    fn test_rotation() {
        assert_eq!(rotation(b"ABC", 0), b"ABC");
        assert_eq!(rotation(b"ABC", 1), b"BCA");
        assert_eq!(rotation(b"ABC", 2), b"CAB");
        assert_eq!(rotation(b"A", 0), b"A");
    }

    #[test]
    fn test_compare_rotations() {
        //rotations of "BANANA$" at 6 and 5 are "$BANANA" and "A$BANAN"
        assert_eq!(compare_rotations(b"BANANA$", 6, 5), Ordering::Less);
        assert_eq!(compare_rotations(b"BANANA$", 0, 6), Ordering::Greater);
        assert_eq!(compare_rotations(b"BANANA$", 3, 3), Ordering::Equal);

        //all rotations of "AAAA" are literally identical
        assert_eq!(compare_rotations(b"AAAA", 0, 3), Ordering::Equal);
    }

    #[test]
    fn test_sorted_offsets_match_naive() {
        let inputs: Vec<&[u8]> = vec![
            b"BANANA$",
            b"MISSISSIPPI$",
            b"ABRACADABRA$",
            b"A$",
            b"GTN$ACCC",
        ];
        for input in inputs {
            assert_eq!(
                sorted_rotation_offsets(input),
                naive_rotation_offsets(input),
                "mismatch on {:?}",
                input
            );
        }
    }

    #[test]
    fn test_sorted_offsets_tie_break() {
        //identical rotations must stay in ascending offset order
        assert_eq!(sorted_rotation_offsets(b"AAAA"), vec![0, 1, 2, 3]);
        assert_eq!(sorted_rotation_offsets(b"ABAB"), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_first_column_offsets() {
        let offsets = first_column_offsets(b"IPSSM$PISSII");
        assert_eq!(offsets[&b'$'], 0);
        assert_eq!(offsets[&b'I'], 1);
        assert_eq!(offsets[&b'M'], 5);
        assert_eq!(offsets[&b'P'], 6);
        assert_eq!(offsets[&b'S'], 8);
        assert_eq!(offsets.len(), 5);
    }
}
