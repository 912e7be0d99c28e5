//! Two-step delete confirmation.
//!
//! Replaces a blocking browser dialog: the first click on Delete arms
//! the confirmation for that row, which then shows Confirm/Cancel
//! in place of the normal actions.

use contracts::domain::common::EntityId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Pending(EntityId),
}

impl DeleteConfirm {
    /// Arm the confirmation for one row. Re-arming on another row moves
    /// the pending state there.
    pub fn request(&mut self, id: EntityId) {
        *self = DeleteConfirm::Pending(id);
    }

    /// Decline: back to idle, nothing else happens.
    pub fn cancel(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    pub fn is_pending(&self, id: EntityId) -> bool {
        matches!(self, DeleteConfirm::Pending(p) if *p == id)
    }

    /// Consume the pending confirmation for `id`. Returns whether the
    /// delete was actually confirmed for that row.
    pub fn take_confirmed(&mut self, id: EntityId) -> bool {
        if self.is_pending(id) {
            *self = DeleteConfirm::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_leaves_nothing_pending() {
        let mut confirm = DeleteConfirm::default();
        confirm.request(3);
        assert!(confirm.is_pending(3));

        confirm.cancel();
        assert!(!confirm.is_pending(3));
        assert!(!confirm.take_confirmed(3));
    }

    #[test]
    fn test_confirm_consumes_pending() {
        let mut confirm = DeleteConfirm::default();
        confirm.request(3);
        assert!(confirm.take_confirmed(3));
        // second confirm on the same row is a no-op
        assert!(!confirm.take_confirmed(3));
    }

    #[test]
    fn test_rearming_moves_to_other_row() {
        let mut confirm = DeleteConfirm::default();
        confirm.request(3);
        confirm.request(8);
        assert!(!confirm.is_pending(3));
        assert!(!confirm.take_confirmed(3));
        assert!(confirm.take_confirmed(8));
    }
}
