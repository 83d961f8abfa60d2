use std::rc::Rc;

use yew::Reducible;

/// Selection state of an auto-advancing carousel.
///
/// A move is refused while the previous transition is still running; the
/// owner clears the flag with [`Rotation::settle`] once the transition ends.
///
/// Every accepted move starts a new epoch. Auto-advance ticks carry the epoch
/// they were scheduled in, so a tick armed before a manual move is dropped and
/// each slide stays up for a full period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    active: usize,
    len: usize,
    animating: bool,
    epoch: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAction {
    Next,
    Prev,
    GoTo(usize),
    Tick(u32),
    Settle,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            active: 0,
            len,
            animating: false,
            epoch: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Returns whether the selection moved.
    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.go_to((self.active + 1) % self.len)
    }

    pub fn prev(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.go_to((self.active + self.len - 1) % self.len)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if self.animating || index >= self.len {
            return false;
        }
        self.active = index;
        self.animating = true;
        self.epoch = self.epoch.wrapping_add(1);
        true
    }

    /// Auto-advance armed during `epoch`; stale once anything has moved since.
    pub fn tick(&mut self, epoch: u32) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.next()
    }

    pub fn settle(&mut self) {
        self.animating = false;
    }

    pub fn apply(&mut self, action: RotationAction) -> bool {
        match action {
            RotationAction::Next => self.next(),
            RotationAction::Prev => self.prev(),
            RotationAction::GoTo(index) => self.go_to(index),
            RotationAction::Tick(epoch) => self.tick(epoch),
            RotationAction::Settle => {
                let was_animating = self.animating;
                self.settle();
                was_animating
            }
        }
    }
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_around_five_items() {
        let mut rotation = Rotation::new(5);
        let mut seen = vec![rotation.active()];
        for _ in 0..5 {
            assert!(rotation.next());
            rotation.settle();
            seen.push(rotation.active());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn moves_during_a_transition_are_ignored() {
        let mut rotation = Rotation::new(5);
        assert!(rotation.next());
        assert!(rotation.is_animating());
        assert!(!rotation.next());
        assert!(!rotation.prev());
        assert!(!rotation.go_to(3));
        assert_eq!(rotation.active(), 1);

        rotation.settle();
        assert!(rotation.next());
        assert_eq!(rotation.active(), 2);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut rotation = Rotation::new(5);
        assert!(rotation.prev());
        assert_eq!(rotation.active(), 4);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut rotation = Rotation::new(3);
        assert!(!rotation.go_to(3));
        assert!(!rotation.is_animating());
        assert!(rotation.go_to(2));
        assert_eq!(rotation.active(), 2);
    }

    #[test]
    fn empty_rotation_never_moves() {
        let mut rotation = Rotation::new(0);
        assert!(!rotation.next());
        assert!(!rotation.prev());
        assert_eq!(rotation.active(), 0);
    }

    #[test]
    fn manual_move_restarts_the_auto_advance_period() {
        let mut rotation = Rotation::new(5);
        let armed_at_mount = rotation.epoch();

        // Manual move just before the first tick, settled before it lands.
        assert!(rotation.go_to(1));
        rotation.settle();
        assert!(!rotation.tick(armed_at_mount));
        assert_eq!(rotation.active(), 1);

        // The tick armed after the move advances normally.
        let rearmed = rotation.epoch();
        assert!(rotation.tick(rearmed));
        assert_eq!(rotation.active(), 2);
    }

    #[test]
    fn tick_during_a_transition_is_ignored() {
        let mut rotation = Rotation::new(5);
        assert!(rotation.next());
        let epoch = rotation.epoch();
        assert!(!rotation.tick(epoch));
        assert_eq!(rotation.active(), 1);

        rotation.settle();
        assert!(rotation.tick(epoch));
        assert_eq!(rotation.active(), 2);
    }

    #[test]
    fn refused_moves_keep_the_epoch() {
        let mut rotation = Rotation::new(3);
        assert!(!rotation.go_to(7));
        assert_eq!(rotation.epoch(), 0);
        assert!(rotation.go_to(0));
        assert_eq!(rotation.epoch(), 1);
    }

    #[test]
    fn reducer_keeps_the_same_state_for_refused_moves() {
        let state = Rc::new(Rotation::new(5));
        let moved = state.clone().reduce(RotationAction::Next);
        assert_eq!(moved.active(), 1);

        let refused = moved.clone().reduce(RotationAction::Next);
        assert!(Rc::ptr_eq(&moved, &refused));

        let settled = refused.reduce(RotationAction::Settle);
        assert!(!settled.is_animating());
        assert_eq!(settled.active(), 1);
    }
}
