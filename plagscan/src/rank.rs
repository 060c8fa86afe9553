use crate::record::PairMatch;

/// Order records by shared-phrase count, highest first. Records with
/// equal counts keep an implementation-defined order.
pub fn rank(mut records: Vec<PairMatch>) -> Vec<PairMatch> {
    records.sort_unstable_by(|a, b| b.count.cmp(&a.count));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_count_descending() {
        let records = vec![
            PairMatch::new("a-b", 3),
            PairMatch::new("a-c", 17),
            PairMatch::new("b-c", 8),
        ];

        let ranked = rank(records);
        let counts: Vec<_> = ranked.iter().map(|r| r.count).collect();

        assert_eq!(counts, [17, 8, 3]);
    }

    #[test]
    fn keeps_every_record() {
        let records = vec![
            PairMatch::new("a-b", 2),
            PairMatch::new("a-c", 2),
            PairMatch::new("b-c", 5),
        ];

        let ranked = rank(records);

        assert_eq!(ranked.len(), 3);
        let mut pairs: Vec<_> = ranked.iter().map(|r| r.pair.as_str()).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, ["a-b", "a-c", "b-c"]);
    }

    #[test]
    fn output_is_never_increasing() {
        let records = vec![
            PairMatch::new("a-b", 1),
            PairMatch::new("a-c", 9),
            PairMatch::new("a-d", 9),
            PairMatch::new("b-c", 4),
        ];

        let ranked = rank(records);

        for window in ranked.windows(2) {
            assert!(window[0].count >= window[1].count);
        }
    }
}
