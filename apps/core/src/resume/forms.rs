//! Add/edit form lifecycle shared by every resume section.
//!
//! One `FormFlow` per section editor. The machine is `Idle` until the user
//! opens a blank add form or an edit form pre-filled from a stored entity;
//! cancel discards the draft, and submit either fully validates and yields
//! the action to apply to the store or returns the field errors and stays
//! put. There is no partial save.

use super::model::{
    CertificationDraft, EducationDraft, EntryId, ExperienceDraft, ProjectDraft, SkillDraft,
};
use super::validation::{
    validate_certification, validate_education, validate_experience, validate_project,
    validate_skill, FieldError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Idle,
    Adding,
    Editing(EntryId),
}

/// A draft that can back an add/edit form.
pub trait FormDraft: Default + Clone {
    fn validate(&self) -> Vec<FieldError>;
}

impl FormDraft for ExperienceDraft {
    fn validate(&self) -> Vec<FieldError> {
        validate_experience(self)
    }
}

impl FormDraft for EducationDraft {
    fn validate(&self) -> Vec<FieldError> {
        validate_education(self)
    }
}

impl FormDraft for SkillDraft {
    fn validate(&self) -> Vec<FieldError> {
        validate_skill(self)
    }
}

impl FormDraft for ProjectDraft {
    fn validate(&self) -> Vec<FieldError> {
        validate_project(self)
    }
}

impl FormDraft for CertificationDraft {
    fn validate(&self) -> Vec<FieldError> {
        validate_certification(self)
    }
}

/// The committed outcome of a successful submit; the caller applies it to
/// the store (add, or update keyed by the edited entry's id).
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction<D> {
    Add(D),
    Update(EntryId, D),
}

#[derive(Debug, Clone)]
pub struct FormFlow<D: FormDraft> {
    mode: FormMode,
    draft: D,
}

impl<D: FormDraft> FormFlow<D> {
    pub fn new() -> Self {
        FormFlow {
            mode: FormMode::Idle,
            draft: D::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Field edits land here while the form is open.
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Opens a blank add form, resetting all fields to their defaults.
    pub fn begin_add(&mut self) {
        self.draft = D::default();
        self.mode = FormMode::Adding;
    }

    /// Opens an edit form pre-populated from the stored entity.
    pub fn begin_edit(&mut self, id: EntryId, prefill: D) {
        self.draft = prefill;
        self.mode = FormMode::Editing(id);
    }

    /// Discards the draft and returns to idle.
    pub fn cancel(&mut self) {
        self.draft = D::default();
        self.mode = FormMode::Idle;
    }

    /// Validates the draft. On failure the errors come back and the form
    /// stays open with the draft intact; on success the action to apply is
    /// returned and the form resets to idle. Submitting while idle yields
    /// no action: the empty error list comes back and nothing changes.
    pub fn submit(&mut self) -> Result<SubmitAction<D>, Vec<FieldError>> {
        let editing = match self.mode {
            FormMode::Idle => return Err(Vec::new()),
            FormMode::Adding => None,
            FormMode::Editing(id) => Some(id),
        };
        let errors = self.draft.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let draft = std::mem::take(&mut self.draft);
        self.mode = FormMode::Idle;
        Ok(match editing {
            Some(id) => SubmitAction::Update(id, draft),
            None => SubmitAction::Add(draft),
        })
    }
}

impl<D: FormDraft> Default for FormFlow<D> {
    fn default() -> Self {
        Self::new()
    }
}
