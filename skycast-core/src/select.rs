/// Stride between slots belonging to the same hour on consecutive days
/// (8 slots × 3 hours = 24 hours).
pub const DAILY_STRIDE: usize = 8;

/// Number of days the view shows.
pub const DAILY_COUNT: usize = 5;

/// Pick one representative slot per day from a chronological 3-hour series.
///
/// Walks the input at a fixed stride of 8 starting at index 0, collecting
/// until 5 elements are gathered or the input is exhausted. Assumes the
/// upstream series is already in chronological order; performs no
/// reordering, deduplication, or timezone conversion.
pub fn select_daily<T: Clone>(slots: &[T]) -> Vec<T> {
    slots
        .iter()
        .step_by(DAILY_STRIDE)
        .take(DAILY_COUNT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_every_eighth_slot_from_a_full_response() {
        let input: Vec<usize> = (0..40).collect();
        assert_eq!(select_daily(&input), vec![0, 8, 16, 24, 32]);
    }

    #[test]
    fn input_shorter_than_one_day_yields_a_single_entry() {
        let input = vec![7, 9, 11];
        assert_eq!(select_daily(&input), vec![7]);
    }

    #[test]
    fn empty_input_yields_an_empty_selection() {
        assert!(select_daily::<i32>(&[]).is_empty());
    }

    #[test]
    fn partial_final_day_is_still_represented() {
        // 17 slots span two full days plus the start of a third.
        let input: Vec<usize> = (0..17).collect();
        assert_eq!(select_daily(&input), vec![0, 8, 16]);
    }

    #[test]
    fn oversized_input_is_capped_at_five_days() {
        let input: Vec<usize> = (0..100).collect();
        assert_eq!(select_daily(&input), vec![0, 8, 16, 24, 32]);
    }
}
