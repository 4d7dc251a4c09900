//! Scroll and rating arithmetic behind the product carousel.
//!
//! Everything here is pure so the view only has to read DOM measurements
//! and hand them over.

/// Horizontal distance the arrow buttons move the carousel, one card wide.
pub const CARD_STRIDE_PX: f64 = 320.0;

/// Number of slots in a rating display
pub const STAR_COUNT: usize = 5;

/// Scroll position as a percentage of the scrollable distance.
///
/// Returns 0 when the content fits (`scroll_width <= client_width`).
pub fn scroll_progress(scroll_left: f64, scroll_width: f64, client_width: f64) -> f64 {
    let max_scroll = scroll_width - client_width;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_left / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// Width of the progress indicator in percent: one slot per item.
pub fn indicator_width(item_count: usize) -> f64 {
    if item_count == 0 {
        100.0
    } else {
        100.0 / item_count as f64
    }
}

/// Arrow direction for programmatic navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed scroll offset applied by one click.
    pub fn offset(self) -> f64 {
        match self {
            Direction::Left => -CARD_STRIDE_PX,
            Direction::Right => CARD_STRIDE_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarSlot {
    Full,
    Half,
    Empty,
}

impl StarSlot {
    pub fn class(self) -> &'static str {
        match self {
            StarSlot::Full => "star",
            StarSlot::Half => "star half",
            StarSlot::Empty => "star empty",
        }
    }
}

/// Splits a 0-5 score into full, half and empty slots, in that order.
pub fn star_slots(score: f64) -> [StarSlot; STAR_COUNT] {
    let score = if score.is_finite() {
        score.clamp(0.0, STAR_COUNT as f64)
    } else {
        0.0
    };
    let full = score.floor() as usize;
    let half = score.fract() != 0.0;

    let mut slots = [StarSlot::Empty; STAR_COUNT];
    for (i, slot) in slots.iter_mut().enumerate() {
        if i < full {
            *slot = StarSlot::Full;
        } else if i == full && half {
            *slot = StarSlot::Half;
        }
    }
    slots
}

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No products to show.";
pub const FAILED_MESSAGE: &str = "Could not connect to the product API.";

/// What the catalog page shows for a given fetch outcome
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed,
    Empty,
    Ready(Vec<T>),
}

impl<T> LoadState<T> {
    /// `None` means the fetch is still in flight.
    pub fn from_result<E>(result: Option<Result<Vec<T>, E>>) -> Self {
        match result {
            None => LoadState::Loading,
            Some(Err(_)) => LoadState::Failed,
            Some(Ok(items)) if items.is_empty() => LoadState::Empty,
            Some(Ok(items)) => LoadState::Ready(items),
        }
    }

    /// Status text for every state except `Ready`.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoadState::Loading => Some(LOADING_MESSAGE),
            LoadState::Failed => Some(FAILED_MESSAGE),
            LoadState::Empty => Some(EMPTY_MESSAGE),
            LoadState::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StarSlot::*;

    #[test]
    fn progress_is_share_of_scrollable_distance() {
        assert_eq!(scroll_progress(300.0, 1000.0, 400.0), 50.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 400.0), 0.0);
        assert_eq!(scroll_progress(600.0, 1000.0, 400.0), 100.0);
    }

    #[test]
    fn progress_is_zero_when_nothing_scrolls() {
        assert_eq!(scroll_progress(0.0, 400.0, 400.0), 0.0);
        assert_eq!(scroll_progress(10.0, 300.0, 400.0), 0.0);
    }

    #[test]
    fn progress_stays_in_range() {
        assert_eq!(scroll_progress(-20.0, 1000.0, 400.0), 0.0);
        assert_eq!(scroll_progress(650.0, 1000.0, 400.0), 100.0);
    }

    #[test]
    fn indicator_is_one_slot_per_item() {
        assert_eq!(indicator_width(4), 25.0);
        assert_eq!(indicator_width(1), 100.0);
        assert_eq!(indicator_width(0), 100.0);
    }

    #[test]
    fn arrows_move_one_card() {
        assert_eq!(Direction::Left.offset(), -320.0);
        assert_eq!(Direction::Right.offset(), 320.0);
    }

    #[test]
    fn load_states() {
        assert_eq!(LoadState::<u8>::from_result::<()>(None), LoadState::Loading);
        assert_eq!(LoadState::<u8>::from_result(Some(Err("boom"))), LoadState::Failed);
        assert_eq!(LoadState::<u8>::from_result::<()>(Some(Ok(vec![]))), LoadState::Empty);
        assert_eq!(
            LoadState::from_result::<()>(Some(Ok(vec![1, 2]))),
            LoadState::Ready(vec![1, 2])
        );
    }

    #[test]
    fn empty_and_failed_read_differently() {
        let empty = LoadState::<u8>::Empty.message();
        let failed = LoadState::<u8>::Failed.message();
        assert!(empty.is_some() && failed.is_some());
        assert_ne!(empty, failed);
        assert_eq!(LoadState::Ready(vec![1u8]).message(), None);
    }

    #[test]
    fn three_and_a_half_stars() {
        assert_eq!(star_slots(3.5), [Full, Full, Full, Half, Empty]);
    }

    #[test]
    fn whole_scores_have_no_half() {
        assert_eq!(star_slots(5.0), [Full; 5]);
        assert_eq!(star_slots(0.0), [Empty; 5]);
        assert_eq!(star_slots(2.0), [Full, Full, Empty, Empty, Empty]);
    }

    #[test]
    fn any_fraction_gives_a_half() {
        assert_eq!(star_slots(4.1), [Full, Full, Full, Full, Half]);
        assert_eq!(star_slots(0.4), [Half, Empty, Empty, Empty, Empty]);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(star_slots(7.2), [Full; 5]);
        assert_eq!(star_slots(-1.0), [Empty; 5]);
        assert_eq!(star_slots(f64::NAN), [Empty; 5]);
    }
}
