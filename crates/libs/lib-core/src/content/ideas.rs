//! Offline idea picker for the generator section.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub format: String,
    pub hook: String,
}

/// Pick the next idea index from a uniform `roll` in `[0, 1)`.
///
/// Never repeats `current` when there is more than one idea. Returns `None` for an empty deck.
///
/// ```rust
/// use lib_core::content::pick_next;
///
/// assert_eq!(pick_next(None, 0, 0.5), None);
/// assert_eq!(pick_next(Some(0), 1, 0.9), Some(0));
/// assert_ne!(pick_next(Some(2), 5, 0.5), Some(2));
/// ```
pub fn pick_next(current: Option<usize>, len: usize, roll: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };

    match current {
        Some(current) if len > 1 && current < len => {
            // Draw from the other len - 1 slots, then skip over `current`.
            let drawn = ((roll * (len - 1) as f64) as usize).min(len - 2);
            Some(if drawn >= current { drawn + 1 } else { drawn })
        }
        _ => Some(((roll * len as f64) as usize).min(len - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_repeats() {
        for current in 0..4 {
            for step in 0..=20 {
                let roll = step as f64 / 20.0;
                let next = pick_next(Some(current), 4, roll).unwrap();
                assert_ne!(next, current, "roll {roll}");
                assert!(next < 4);
            }
        }
    }

    #[test]
    fn test_first_pick_covers_range() {
        assert_eq!(pick_next(None, 3, 0.0), Some(0));
        assert_eq!(pick_next(None, 3, 0.99), Some(2));
        assert_eq!(pick_next(None, 3, 1.0), Some(2));
    }

    #[test]
    fn test_bad_roll_is_clamped() {
        assert_eq!(pick_next(None, 3, f64::NAN), Some(0));
        assert_eq!(pick_next(None, 3, -4.0), Some(0));
    }

    #[test]
    fn test_stale_current_is_ignored() {
        assert_eq!(pick_next(Some(9), 2, 0.0), Some(0));
    }
}
