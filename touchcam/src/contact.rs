//! Bookkeeping for the set of currently active pointer contacts.

use cgmath::{MetricSpace, Point2};

use crate::event::TouchId;

/// Identifies one active pointer. The emulated mouse button uses the single
/// reserved [`ContactId::Mouse`] id, so it can never collide with a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactId {
    Touch(TouchId),
    Mouse,
}

/// One active pointer and the last position that was accepted as motion.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    id: ContactId,
    last_position: Point2<f64>,
}

impl Contact {
    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn last_position(&self) -> Point2<f64> {
        self.last_position
    }
}

/// Tracks active contacts in press order. The first two entries are the
/// pinch pair; when one of them lifts, a later contact moves up.
#[derive(Debug, Default)]
pub struct ContactTracker {
    contacts: Vec<Contact>,
}

impl ContactTracker {
    /// Inserts the contact, or overwrites its position if `id` is already
    /// pressed. An overwrite keeps the contact's press-order slot.
    pub fn on_press(&mut self, id: ContactId, position: Point2<f64>) {
        match self.contacts.iter_mut().find(|contact| contact.id == id) {
            Some(contact) => contact.last_position = position,
            None => self.contacts.push(Contact {
                id,
                last_position: position,
            }),
        }
    }

    pub fn on_release(&mut self, id: ContactId) {
        self.contacts.retain(|contact| contact.id != id);
    }

    /// Returns whether the motion was accepted. Motion counts only once the
    /// contact has travelled strictly further than `sensitivity` from its
    /// stored position, and the stored position advances only then, so
    /// sub-threshold jitter keeps measuring against the same anchor.
    pub fn on_move(&mut self, id: ContactId, position: Point2<f64>, sensitivity: f64) -> bool {
        let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) else {
            return false;
        };

        if contact.last_position.distance(position) > sensitivity {
            contact.last_position = position;
            true
        } else {
            false
        }
    }

    pub fn active_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn has_all(&self, ids: &[ContactId]) -> bool {
        ids.iter().all(|id| self.get(*id).is_some())
    }

    /// The primary and secondary pinch contacts, iff exactly two contacts
    /// are active.
    pub fn pinch_pair(&self) -> Option<(&Contact, &Contact)> {
        match self.contacts.as_slice() {
            [primary, secondary] => Some((primary, secondary)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point2;

    use super::*;

    const SENSITIVITY: f64 = 10.0;

    fn point(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn press_move_release() {
        let mut tracker = ContactTracker::default();

        tracker.on_press(ContactId::Touch(1), point(0.0, 0.0));
        assert_eq!(tracker.active_count(), 1);

        assert!(tracker.on_move(ContactId::Touch(1), point(20.0, 0.0), SENSITIVITY));
        assert_eq!(
            tracker.get(ContactId::Touch(1)).unwrap().last_position(),
            point(20.0, 0.0)
        );

        tracker.on_release(ContactId::Touch(1));
        assert_eq!(tracker.active_count(), 0);
        assert!(tracker.get(ContactId::Touch(1)).is_none());
    }

    #[test]
    fn sub_threshold_motion_is_suppressed() {
        let mut tracker = ContactTracker::default();
        tracker.on_press(ContactId::Touch(1), point(0.0, 0.0));

        // distance 5
        assert!(!tracker.on_move(ContactId::Touch(1), point(3.0, 4.0), SENSITIVITY));
        // distance exactly at the threshold still does not count
        assert!(!tracker.on_move(ContactId::Touch(1), point(6.0, 8.0), SENSITIVITY));
        assert_eq!(
            tracker.get(ContactId::Touch(1)).unwrap().last_position(),
            point(0.0, 0.0)
        );

        // distance 15
        assert!(tracker.on_move(ContactId::Touch(1), point(9.0, 12.0), SENSITIVITY));
        assert_eq!(
            tracker.get(ContactId::Touch(1)).unwrap().last_position(),
            point(9.0, 12.0)
        );
    }

    #[test]
    fn motion_for_absent_id_is_ignored() {
        let mut tracker = ContactTracker::default();
        assert!(!tracker.on_move(ContactId::Touch(1), point(100.0, 0.0), SENSITIVITY));
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn release_of_unknown_id_is_a_noop() {
        let mut tracker = ContactTracker::default();
        tracker.on_press(ContactId::Touch(1), point(0.0, 0.0));

        tracker.on_release(ContactId::Touch(5));
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn pinch_pair_follows_press_order() {
        let mut tracker = ContactTracker::default();
        assert!(tracker.pinch_pair().is_none());

        tracker.on_press(ContactId::Touch(7), point(0.0, 0.0));
        assert!(tracker.pinch_pair().is_none());

        tracker.on_press(ContactId::Mouse, point(50.0, 0.0));
        let (primary, secondary) = tracker.pinch_pair().unwrap();
        assert_eq!(primary.id(), ContactId::Touch(7));
        assert_eq!(secondary.id(), ContactId::Mouse);

        // a third contact leaves the pair undefined
        tracker.on_press(ContactId::Touch(9), point(100.0, 0.0));
        assert!(tracker.pinch_pair().is_none());

        // releasing the primary promotes the later contact
        tracker.on_release(ContactId::Touch(7));
        let (primary, secondary) = tracker.pinch_pair().unwrap();
        assert_eq!(primary.id(), ContactId::Mouse);
        assert_eq!(secondary.id(), ContactId::Touch(9));
    }

    #[test]
    fn press_on_existing_id_keeps_slot() {
        let mut tracker = ContactTracker::default();
        tracker.on_press(ContactId::Touch(1), point(0.0, 0.0));
        tracker.on_press(ContactId::Touch(2), point(100.0, 0.0));

        tracker.on_press(ContactId::Touch(1), point(10.0, 10.0));
        assert_eq!(tracker.active_count(), 2);

        let (primary, _) = tracker.pinch_pair().unwrap();
        assert_eq!(primary.id(), ContactId::Touch(1));
        assert_eq!(primary.last_position(), point(10.0, 10.0));
    }

    #[test]
    fn has_all_and_clear() {
        let mut tracker = ContactTracker::default();
        tracker.on_press(ContactId::Touch(1), point(0.0, 0.0));
        tracker.on_press(ContactId::Mouse, point(1.0, 1.0));

        assert!(tracker.has_all(&[ContactId::Touch(1), ContactId::Mouse]));
        assert!(!tracker.has_all(&[ContactId::Touch(1), ContactId::Touch(2)]));

        tracker.clear();
        assert_eq!(tracker.active_count(), 0);
        assert!(!tracker.has_all(&[ContactId::Touch(1)]));
    }
}
