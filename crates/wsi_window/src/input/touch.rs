//! Multi-touch translator

use crate::event::{Action, TouchEvent};

/// Maximum number of simultaneously tracked touch points
pub const MAX_TOUCH_POINTS: usize = 10;

/// A finger currently on the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Touch-point id
    pub id: u8,
    /// Last x position
    pub x: f32,
    /// Last y position
    pub y: f32,
}

/// Tracked touch points, keyed by id
#[derive(Debug, Default, Clone)]
pub struct TouchState {
    points: Vec<TouchPoint>,
}

impl TouchState {
    /// Create an empty touch state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a native touch report
    ///
    /// Move and Up for untracked ids, Down for ids that are already tracked
    /// and Down beyond [`MAX_TOUCH_POINTS`] are dropped without touching the
    /// other points.
    pub fn apply(&mut self, action: Action, id: u8, x: f32, y: f32) -> Option<TouchEvent> {
        let slot = self.points.iter().position(|p| p.id == id);

        match (action, slot) {
            (Action::Down, None) => {
                if self.points.len() >= MAX_TOUCH_POINTS {
                    log::warn!("Dropping touch {}: {} points already tracked", id, MAX_TOUCH_POINTS);
                    return None;
                }
                self.points.push(TouchPoint { id, x, y });
            }
            (Action::Move, Some(index)) => {
                let point = &mut self.points[index];
                point.x = x;
                point.y = y;
            }
            (Action::Up, Some(index)) => {
                self.points.remove(index);
            }
            (Action::Down, Some(_)) => {
                log::debug!("Ignoring touch down for already tracked id {}", id);
                return None;
            }
            (_, None) => {
                log::debug!("Ignoring touch {} for untracked id {}", action, id);
                return None;
            }
        }

        Some(TouchEvent { action, x, y, id })
    }

    /// Points currently on the screen, in the order they went down
    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    /// Look up a tracked point
    pub fn point(&self, id: u8) -> Option<&TouchPoint> {
        self.points.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_stable_across_moves() {
        let mut touch = TouchState::new();
        touch.apply(Action::Down, 3, 1.0, 1.0).unwrap();
        let moved = touch.apply(Action::Move, 3, 2.5, 4.0).unwrap();
        assert_eq!(moved.id, 3);
        assert_eq!(touch.point(3), Some(&TouchPoint { id: 3, x: 2.5, y: 4.0 }));

        touch.apply(Action::Up, 3, 2.5, 4.0).unwrap();
        assert!(touch.points().is_empty());
    }

    #[test]
    fn test_untracked_ids_do_not_disturb_others() {
        let mut touch = TouchState::new();
        touch.apply(Action::Down, 0, 10.0, 10.0).unwrap();
        touch.apply(Action::Down, 1, 20.0, 20.0).unwrap();

        assert!(touch.apply(Action::Move, 7, 99.0, 99.0).is_none());
        assert!(touch.apply(Action::Up, 7, 99.0, 99.0).is_none());

        assert_eq!(touch.points().len(), 2);
        assert_eq!(touch.point(0), Some(&TouchPoint { id: 0, x: 10.0, y: 10.0 }));
        assert_eq!(touch.point(1), Some(&TouchPoint { id: 1, x: 20.0, y: 20.0 }));
    }

    #[test]
    fn test_retired_id_is_untracked() {
        let mut touch = TouchState::new();
        touch.apply(Action::Down, 2, 0.0, 0.0).unwrap();
        touch.apply(Action::Up, 2, 0.0, 0.0).unwrap();
        assert!(touch.apply(Action::Move, 2, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_duplicate_down_keeps_original_position() {
        let mut touch = TouchState::new();
        touch.apply(Action::Down, 5, 1.0, 2.0).unwrap();
        assert!(touch.apply(Action::Down, 5, 8.0, 9.0).is_none());
        assert_eq!(touch.point(5), Some(&TouchPoint { id: 5, x: 1.0, y: 2.0 }));
    }

    #[test]
    fn test_capacity_limit() {
        let mut touch = TouchState::new();
        for id in 0..MAX_TOUCH_POINTS as u8 {
            assert!(touch.apply(Action::Down, id, 0.0, 0.0).is_some());
        }
        assert!(touch.apply(Action::Down, 42, 0.0, 0.0).is_none());
        assert_eq!(touch.points().len(), MAX_TOUCH_POINTS);
    }
}
