#[cfg(test)]
mod tests {
    use crate::slots::{filter_day_slots, is_selectable, starts_in_future};
    use chrono::{NaiveDate, NaiveDateTime};
    use dentify_common::Slot;
    use proptest::prelude::*;

    // Helper function to build one slot from generated parts
    fn make_slot(
        id: i64,
        hour: u32,
        minute: u32,
        available_spots: Option<i32>,
        disabled: bool,
        available: Option<bool>,
    ) -> Slot {
        Slot {
            id,
            date: None,
            start_time: format!("{:02}:{:02}:00", hour, minute),
            end_time: String::new(),
            dentist_id: None,
            dentist_name: None,
            available,
            capacity: None,
            booked_count: None,
            available_spots,
            disabled,
        }
    }

    // Helper function to materialize a generated day, ids in input order
    fn make_day(parts: &[(u32, u32, Option<i32>, bool, Option<bool>)]) -> Vec<Slot> {
        parts
            .iter()
            .enumerate()
            .map(|(index, (hour, minute, spots, disabled, available))| {
                make_slot(index as i64, *hour, *minute, *spots, *disabled, *available)
            })
            .collect()
    }

    fn selected_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn midday() -> NaiveDateTime {
        selected_date().and_hms_opt(12, 0, 0).unwrap()
    }

    // Strategy for a day's worth of slots in arbitrary states
    fn day_strategy() -> impl Strategy<Value = Vec<(u32, u32, Option<i32>, bool, Option<bool>)>> {
        prop::collection::vec(
            (
                0u32..24,
                0u32..60,
                proptest::option::of(0i32..4),
                any::<bool>(),
                proptest::option::of(any::<bool>()),
            ),
            0..16,
        )
    }

    proptest! {
        // Test that nothing already started survives the filter
        #[test]
        fn test_filtered_slots_all_start_in_the_future(parts in day_strategy()) {
            let slots = make_day(&parts);

            let kept = filter_day_slots(&slots, selected_date(), midday());

            for slot in &kept {
                prop_assert!(
                    starts_in_future(slot, selected_date(), midday()),
                    "Kept slot {} starts at {} which is not after midday",
                    slot.id, slot.start_time
                );
            }
        }

        // Test that the filter never reorders what it keeps
        #[test]
        fn test_filter_preserves_server_order(parts in day_strategy()) {
            let slots = make_day(&parts);

            let kept = filter_day_slots(&slots, selected_date(), midday());

            for pair in kept.windows(2) {
                prop_assert!(
                    pair[0].id < pair[1].id,
                    "Slot {} came back before slot {}",
                    pair[1].id, pair[0].id
                );
            }
        }

        // Test that the filter never costs the customer a bookable slot
        #[test]
        fn test_selectable_slots_survive_the_filter(parts in day_strategy()) {
            let slots = make_day(&parts);

            let kept = filter_day_slots(&slots, selected_date(), midday());
            let kept_ids: Vec<i64> = kept.iter().map(|slot| slot.id).collect();

            for slot in &slots {
                if is_selectable(slot, selected_date(), midday()) {
                    prop_assert!(
                        kept_ids.contains(&slot.id),
                        "Selectable slot {} at {} was dropped",
                        slot.id, slot.start_time
                    );
                }
            }
        }

        // Test that a selectable slot is open in every respect
        #[test]
        fn test_selectable_slots_are_open(parts in day_strategy()) {
            let slots = make_day(&parts);

            for slot in &slots {
                if is_selectable(slot, selected_date(), midday()) {
                    prop_assert!(!slot.disabled,
                        "Selectable slot {} is disabled", slot.id);
                    prop_assert!(!matches!(slot.available_spots, Some(spots) if spots <= 0),
                        "Selectable slot {} has no seats left", slot.id);
                    prop_assert!(slot.available != Some(false),
                        "Selectable slot {} was marked unavailable", slot.id);
                    prop_assert!(starts_in_future(slot, selected_date(), midday()),
                        "Selectable slot {} has already started", slot.id);
                }
            }
        }
    }
}
