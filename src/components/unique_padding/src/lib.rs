mod builder;
mod element;

pub use builder::UniquePaddingBuilder;
use data_units::ByteUnits;
pub use element::{PaddingOwner, UniquePaddingElement};

/// Finds the padding bytes that only one of two layouts of the same record
/// has.
///
/// Both inputs are padding byte indexes in strictly increasing order. Each
/// index is compared after subtracting the unique bytes already consumed on
/// its own side, so that padding shifted by an earlier unique run still
/// counts as shared.
pub fn unique_padding(first: &[ByteUnits], second: &[ByteUnits]) -> Vec<UniquePaddingElement> {
    debug_assert!(is_strictly_increasing(first));
    debug_assert!(is_strictly_increasing(second));

    let mut builder = UniquePaddingBuilder::new();
    let mut consumed_first = ByteUnits::ZERO;
    let mut consumed_second = ByteUnits::ZERO;
    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        let a = first[i] - consumed_first;
        let b = second[j] - consumed_second;

        if a == b {
            log::trace!("Padding byte {} is shared", first[i].bytes());
            i += 1;
            j += 1;
        } else if a < b {
            log::trace!("Padding byte {} is unique to the first model", first[i].bytes());
            builder.push(first[i], PaddingOwner::First);
            consumed_first += ByteUnits::ONE;
            i += 1;
        } else {
            log::trace!("Padding byte {} is unique to the second model", second[j].bytes());
            builder.push(second[j], PaddingOwner::Second);
            consumed_second += ByteUnits::ONE;
            j += 1;
        }
    }

    builder.extend(&first[i..], PaddingOwner::First);
    builder.extend(&second[j..], PaddingOwner::Second);

    let elements = builder.build();

    log::debug!(
        "Compared {} and {} padding byte(s), {} unique run(s) covering {}",
        first.len(),
        second.len(),
        elements.len(),
        covered_bytes(&elements),
    );

    elements
}

/// Total number of bytes spanned by the given runs.
pub fn covered_bytes(elements: &[UniquePaddingElement]) -> ByteUnits {
    elements.iter().map(|element| element.span_length).sum()
}

fn is_strictly_increasing(indexes: &[ByteUnits]) -> bool {
    indexes.windows(2).all(|pair| pair[0] < pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes<const N: usize>(values: [u64; N]) -> Vec<ByteUnits> {
        values.map(ByteUnits::of).to_vec()
    }

    fn element(first_index: u64, span_length: u64, owner: PaddingOwner) -> UniquePaddingElement {
        UniquePaddingElement::new(
            ByteUnits::of(first_index),
            ByteUnits::of(span_length),
            owner,
        )
    }

    fn matched_pairs(first: &[ByteUnits], second: &[ByteUnits]) -> u64 {
        let unique = covered_bytes(&unique_padding(first, second)).bytes();
        (first.len() as u64 + second.len() as u64 - unique) / 2
    }

    #[test]
    fn identical_inputs_have_nothing_unique() {
        let indexes = bytes([1, 2, 3, 9, 10, 11]);
        assert!(unique_padding(&indexes, &indexes).is_empty());
        assert!(unique_padding(&[], &[]).is_empty());
    }

    #[test]
    fn padded_against_packed() {
        // char, int, char, char with natural alignment, against no padding
        let padded = bytes([1, 2, 3, 10, 11]);

        assert_eq!(
            unique_padding(&padded, &[]),
            [
                element(1, 3, PaddingOwner::First),
                element(10, 2, PaddingOwner::First),
            ]
        );
        assert_eq!(
            unique_padding(&[], &padded),
            [
                element(1, 3, PaddingOwner::Second),
                element(10, 2, PaddingOwner::Second),
            ]
        );
    }

    #[test]
    fn remaining_bytes_are_unique_once_one_side_runs_out() {
        assert_eq!(
            unique_padding(&bytes([1, 2, 3]), &bytes([1])),
            [element(2, 2, PaddingOwner::First)]
        );
        assert_eq!(
            unique_padding(&bytes([9]), &bytes([9, 10, 11])),
            [element(10, 2, PaddingOwner::Second)]
        );
    }

    #[test]
    fn adjacent_bytes_with_different_owners_stay_apart() {
        assert_eq!(
            unique_padding(&bytes([2, 3]), &bytes([1])),
            [
                element(1, 1, PaddingOwner::Second),
                element(2, 2, PaddingOwner::First),
            ]
        );
    }

    #[test]
    fn consumed_bytes_shift_later_comparisons() {
        // After 2 and 3 are consumed, 9 compares as 7 against 6
        assert_eq!(
            unique_padding(&bytes([1, 2, 3, 9]), &bytes([1, 6])),
            [
                element(2, 2, PaddingOwner::First),
                element(6, 1, PaddingOwner::Second),
                element(9, 1, PaddingOwner::First),
            ]
        );

        // After 1 is consumed, 5 compares as 4 and matches
        assert_eq!(
            unique_padding(&bytes([1, 5]), &bytes([4])),
            [element(1, 1, PaddingOwner::First)]
        );
    }

    #[test]
    fn swapping_inputs_flips_owners() {
        let cases = [
            (bytes([1, 2, 3, 9]), bytes([1, 6])),
            (bytes([2, 3]), bytes([1])),
            (bytes([1, 2, 3, 10, 11]), bytes([])),
            (bytes([1, 9, 10, 11]), bytes([1, 9])),
        ];

        for (a, b) in cases {
            let flipped: Vec<_> = unique_padding(&a, &b)
                .into_iter()
                .map(UniquePaddingElement::flipped)
                .collect();

            assert_eq!(unique_padding(&b, &a), flipped);
        }
    }

    #[test]
    fn covered_bytes_counts_unmatched_indexes() {
        let a = bytes([1, 2, 3, 9]);
        let b = bytes([1, 6]);
        let covered = covered_bytes(&unique_padding(&a, &b));

        assert_eq!(covered, ByteUnits::of(4));
        assert_eq!(matched_pairs(&a, &b), 1);
        assert_eq!(
            covered.bytes(),
            a.len() as u64 + b.len() as u64 - 2 * matched_pairs(&a, &b)
        );
    }

    #[test]
    fn builder_merges_only_adjacent_runs() {
        let mut builder = UniquePaddingBuilder::new();
        builder.push(ByteUnits::of(4), PaddingOwner::First);
        builder.push(ByteUnits::of(5), PaddingOwner::First);
        builder.push(ByteUnits::of(7), PaddingOwner::First);
        builder.push(ByteUnits::of(8), PaddingOwner::Second);

        assert_eq!(
            builder.elements(),
            [
                element(4, 2, PaddingOwner::First),
                element(7, 1, PaddingOwner::First),
                element(8, 1, PaddingOwner::Second),
            ]
        );

        let runs = builder.build();
        assert_eq!(runs[0].end(), ByteUnits::of(6));
        assert_eq!(runs[0].byte_indexes().collect::<Vec<_>>(), bytes([4, 5]));
        assert!(runs[0].belongs_to_first_model());
        assert!(!runs[2].belongs_to_first_model());
    }
}
