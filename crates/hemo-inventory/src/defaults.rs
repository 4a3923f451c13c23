use hemo_types::BloodGroup;

use crate::store::Snapshot;

/// The fixed census a fresh bank starts from.
pub const DEFAULT_STOCK: [(BloodGroup, u32); 8] = [
    (BloodGroup::APositive, 45),
    (BloodGroup::ANegative, 12),
    (BloodGroup::BPositive, 38),
    (BloodGroup::BNegative, 8),
    (BloodGroup::AbPositive, 15),
    (BloodGroup::AbNegative, 5),
    (BloodGroup::OPositive, 52),
    (BloodGroup::ONegative, 18),
];

/// The default snapshot as a map.
pub fn default_snapshot() -> Snapshot {
    DEFAULT_STOCK.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_eight_groups() {
        let snapshot = default_snapshot();
        assert_eq!(snapshot.len(), 8);
        for group in BloodGroup::ALL {
            assert!(snapshot.contains_key(&group));
        }
    }

    #[test]
    fn known_counts() {
        let snapshot = default_snapshot();
        assert_eq!(snapshot[&BloodGroup::OPositive], 52);
        assert_eq!(snapshot[&BloodGroup::AbNegative], 5);
    }
}
