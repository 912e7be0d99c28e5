//! Create-vs-edit state shared by every CRUD form.

use contracts::domain::common::EntityId;

/// A form draft plus the id of the record it will overwrite on submit.
/// No edit target means the form is in create mode.
#[derive(Clone, Debug, Default)]
pub struct FormState<D> {
    pub draft: D,
    pub edit_target: Option<EntityId>,
}

impl<D: Default> FormState<D> {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Switch to edit mode with the given record's fields as the draft.
    pub fn begin_edit(&mut self, id: EntityId, draft: D) {
        self.edit_target = Some(id);
        self.draft = draft;
    }

    /// Back to an empty create-mode form. Never touches the server.
    pub fn reset(&mut self) {
        self.edit_target = None;
        self.draft = D::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_edit_then_reset() {
        let mut form: FormState<String> = FormState::default();
        assert!(!form.is_editing());

        form.begin_edit(7, "draft".to_string());
        assert!(form.is_editing());
        assert_eq!(form.edit_target, Some(7));
        assert_eq!(form.draft, "draft");

        form.reset();
        assert!(!form.is_editing());
        assert_eq!(form.draft, "");
    }
}
