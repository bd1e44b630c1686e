//! Normalized, ordered storage for resume sections.
//!
//! Every section is a `Section<T>`: an insertion-ordered collection keyed by
//! a generated `EntryId`. Identity comes from the injected monotonic `IdGen`
//! so ids never collide under rapid successive adds and are never reused
//! after removal. Validation happens before these operations are invoked
//! (see `resume::validation`); the store itself only enforces identity and
//! the skill-name uniqueness invariant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

use super::model::{
    Certification, CertificationDraft, CertificationPatch, Education, EducationDraft,
    EducationPatch, EntryId, Experience, ExperienceDraft, ExperiencePatch, PersonalInfo,
    PersonalInfoPatch, Project, ProjectDraft, ProjectPatch, SectionKind, SectionVisibility,
    Skill, SkillDraft, SkillPatch,
};

/// Monotonic identity source. Injected into the store so tests can pin the
/// starting token; the counter only advances, so removal never frees an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn starting_at(next: u64) -> Self {
        IdGen { next }
    }

    pub fn next_id(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        IdGen::starting_at(1)
    }
}

/// Implemented by every entity kind held in an ordered section.
pub trait SectionEntry: Sized {
    type Draft;
    type Patch;

    fn from_draft(draft: Self::Draft, id: EntryId) -> Self;
    fn id(&self) -> EntryId;
    fn apply(&mut self, patch: Self::Patch);
}

/// An insertion-ordered collection of one entity kind. Order is display
/// order; updates never move an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section<T> {
    entries: Vec<T>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section {
            entries: Vec::new(),
        }
    }
}

impl<T: SectionEntry> Section<T> {
    /// Assigns a fresh id, appends, and returns the stored entity.
    pub fn add(&mut self, ids: &mut IdGen, draft: T::Draft) -> &T {
        let entry = T::from_draft(draft, ids.next_id());
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    /// Merges `patch` into the entry at its current position.
    pub fn update(&mut self, id: EntryId, patch: T::Patch) -> Result<&T, AppError> {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.apply(patch);
                Ok(&*entry)
            }
            None => Err(AppError::NotFound(format!("entry {id} does not exist"))),
        }
    }

    /// Removes the entry with `id`; removing an absent id is a no-op.
    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|e| e.id() != id);
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn list(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SectionEntry for Experience {
    type Draft = ExperienceDraft;
    type Patch = ExperiencePatch;

    fn from_draft(draft: ExperienceDraft, id: EntryId) -> Self {
        Experience {
            id,
            job_title: draft.job_title,
            company: draft.company,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            current: draft.current,
            description: draft.description,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn apply(&mut self, patch: ExperiencePatch) {
        if let Some(v) = patch.job_title {
            self.job_title = v;
        }
        if let Some(v) = patch.company {
            self.company = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.current {
            self.current = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
    }
}

impl SectionEntry for Education {
    type Draft = EducationDraft;
    type Patch = EducationPatch;

    fn from_draft(draft: EducationDraft, id: EntryId) -> Self {
        Education {
            id,
            institution: draft.institution,
            degree: draft.degree,
            field_of_study: draft.field_of_study,
            // validation guarantees a start year before add; degrade rather
            // than panic if a caller skips it
            start_year: draft.start_year.unwrap_or_default(),
            end_year: draft.end_year,
            current: draft.current,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn apply(&mut self, patch: EducationPatch) {
        if let Some(v) = patch.institution {
            self.institution = v;
        }
        if let Some(v) = patch.degree {
            self.degree = v;
        }
        if let Some(v) = patch.field_of_study {
            self.field_of_study = v;
        }
        if let Some(v) = patch.start_year {
            self.start_year = v;
        }
        if let Some(v) = patch.end_year {
            self.end_year = v;
        }
        if let Some(v) = patch.current {
            self.current = v;
        }
    }
}

impl SectionEntry for Skill {
    type Draft = SkillDraft;
    type Patch = SkillPatch;

    fn from_draft(draft: SkillDraft, id: EntryId) -> Self {
        Skill {
            id,
            name: draft.name,
            level: draft.level,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn apply(&mut self, patch: SkillPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.level {
            self.level = v;
        }
    }
}

impl SectionEntry for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn from_draft(draft: ProjectDraft, id: EntryId) -> Self {
        Project {
            id,
            name: draft.name,
            description: draft.description,
            technologies: draft.technologies,
            start_date: draft.start_date,
            end_date: draft.end_date,
            current: draft.current,
            project_url: draft.project_url,
            github_url: draft.github_url,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn apply(&mut self, patch: ProjectPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.technologies {
            self.technologies = v;
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = patch.current {
            self.current = v;
        }
        if let Some(v) = patch.project_url {
            self.project_url = v;
        }
        if let Some(v) = patch.github_url {
            self.github_url = v;
        }
    }
}

impl SectionEntry for Certification {
    type Draft = CertificationDraft;
    type Patch = CertificationPatch;

    fn from_draft(draft: CertificationDraft, id: EntryId) -> Self {
        Certification {
            id,
            name: draft.name,
            issuer: draft.issuer,
            date: draft.date,
            credential_id: draft.credential_id,
            credential_url: draft.credential_url,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn apply(&mut self, patch: CertificationPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.issuer {
            self.issuer = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.credential_id {
            self.credential_id = v;
        }
        if let Some(v) = patch.credential_url {
            self.credential_url = v;
        }
    }
}

/// The whole resume: one singleton personal-info record plus the five
/// ordered sections, all sharing one identity source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeStore {
    ids: IdGen,
    pub personal_info: PersonalInfo,
    experience: Section<Experience>,
    education: Section<Education>,
    skills: Section<Skill>,
    projects: Section<Project>,
    certifications: Section<Certification>,
    pub selected_template: String,
    pub sections: SectionVisibility,
}

impl Default for ResumeStore {
    fn default() -> Self {
        ResumeStore {
            ids: IdGen::default(),
            personal_info: PersonalInfo::default(),
            experience: Section::default(),
            education: Section::default(),
            skills: Section::default(),
            projects: Section::default(),
            certifications: Section::default(),
            selected_template: "classic".to_string(),
            sections: SectionVisibility::default(),
        }
    }
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: IdGen) -> Self {
        ResumeStore {
            ids,
            ..Self::default()
        }
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        self.personal_info.apply(patch);
    }

    pub fn add_experience(&mut self, draft: ExperienceDraft) -> &Experience {
        self.experience.add(&mut self.ids, draft)
    }

    pub fn update_experience(
        &mut self,
        id: EntryId,
        patch: ExperiencePatch,
    ) -> Result<&Experience, AppError> {
        self.experience.update(id, patch)
    }

    pub fn remove_experience(&mut self, id: EntryId) {
        self.experience.remove(id);
    }

    pub fn experience(&self) -> &[Experience] {
        self.experience.list()
    }

    pub fn get_experience(&self, id: EntryId) -> Option<&Experience> {
        self.experience.get(id)
    }

    pub fn add_education(&mut self, draft: EducationDraft) -> &Education {
        self.education.add(&mut self.ids, draft)
    }

    pub fn update_education(
        &mut self,
        id: EntryId,
        patch: EducationPatch,
    ) -> Result<&Education, AppError> {
        self.education.update(id, patch)
    }

    pub fn remove_education(&mut self, id: EntryId) {
        self.education.remove(id);
    }

    pub fn education(&self) -> &[Education] {
        self.education.list()
    }

    /// Adds a skill unless one with the same name already exists,
    /// case-insensitively; a duplicate add leaves the collection untouched
    /// and returns `None`.
    pub fn add_skill(&mut self, draft: SkillDraft) -> Option<&Skill> {
        let duplicate = self
            .skills
            .list()
            .iter()
            .any(|s| s.name.to_lowercase() == draft.name.to_lowercase());
        if duplicate {
            debug!(name = %draft.name, "skill already present, add skipped");
            return None;
        }
        Some(self.skills.add(&mut self.ids, draft))
    }

    pub fn update_skill(&mut self, id: EntryId, patch: SkillPatch) -> Result<&Skill, AppError> {
        self.skills.update(id, patch)
    }

    pub fn remove_skill(&mut self, id: EntryId) {
        self.skills.remove(id);
    }

    pub fn skills(&self) -> &[Skill] {
        self.skills.list()
    }

    pub fn add_project(&mut self, draft: ProjectDraft) -> &Project {
        self.projects.add(&mut self.ids, draft)
    }

    pub fn update_project(
        &mut self,
        id: EntryId,
        patch: ProjectPatch,
    ) -> Result<&Project, AppError> {
        self.projects.update(id, patch)
    }

    pub fn remove_project(&mut self, id: EntryId) {
        self.projects.remove(id);
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.list()
    }

    pub fn add_certification(&mut self, draft: CertificationDraft) -> &Certification {
        self.certifications.add(&mut self.ids, draft)
    }

    pub fn update_certification(
        &mut self,
        id: EntryId,
        patch: CertificationPatch,
    ) -> Result<&Certification, AppError> {
        self.certifications.update(id, patch)
    }

    pub fn remove_certification(&mut self, id: EntryId) {
        self.certifications.remove(id);
    }

    pub fn certifications(&self) -> &[Certification] {
        self.certifications.list()
    }

    pub fn set_template(&mut self, name: impl Into<String>) {
        self.selected_template = name.into();
    }

    pub fn toggle_section(&mut self, kind: SectionKind) {
        self.sections.toggle(kind);
    }

    /// Wipes every section and setting back to the pristine defaults.
    /// The identity counter keeps advancing so ids from before the reset
    /// are never handed out again.
    pub fn reset(&mut self) {
        let ids = self.ids.clone();
        *self = ResumeStore::with_ids(ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::model::SkillLevel;

    fn experience_draft(title: &str, company: &str) -> ExperienceDraft {
        ExperienceDraft {
            job_title: title.into(),
            company: company.into(),
            location: "Pune".into(),
            start_date: "2021-04".into(),
            end_date: "2023-01".into(),
            current: false,
            description: String::new(),
        }
    }

    fn skill_draft(name: &str) -> SkillDraft {
        SkillDraft {
            name: name.into(),
            level: SkillLevel::Intermediate,
        }
    }

    #[test]
    fn test_add_assigns_monotonic_ids_and_appends() {
        let mut store = ResumeStore::new();
        let first = store.add_experience(experience_draft("Engineer", "Acme")).id;
        let second = store.add_experience(experience_draft("Lead", "Globex")).id;
        assert!(second > first);
        let titles: Vec<&str> = store
            .experience()
            .iter()
            .map(|e| e.job_title.as_str())
            .collect();
        assert_eq!(titles, vec!["Engineer", "Lead"]);
    }

    #[test]
    fn test_ids_are_unique_across_sections() {
        let mut store = ResumeStore::new();
        let exp = store.add_experience(experience_draft("Engineer", "Acme")).id;
        let skill = store.add_skill(skill_draft("Rust")).expect("added").id;
        assert_ne!(exp, skill);
    }

    #[test]
    fn test_update_merges_in_place_and_preserves_position() {
        let mut store = ResumeStore::new();
        let first = store.add_experience(experience_draft("Engineer", "Acme")).id;
        store.add_experience(experience_draft("Lead", "Globex"));

        let patch = ExperiencePatch {
            company: Some("Initech".into()),
            ..Default::default()
        };
        let updated = store.update_experience(first, patch).expect("update");
        assert_eq!(updated.company, "Initech");
        assert_eq!(updated.job_title, "Engineer"); // untouched field survives
        assert_eq!(store.experience()[0].id, first); // still first
    }

    #[test]
    fn test_update_missing_id_is_not_found_and_leaves_state() {
        let mut store = ResumeStore::new();
        store.add_experience(experience_draft("Engineer", "Acme"));
        let before = store.experience().to_vec();

        let patch = ExperiencePatch {
            company: Some("Acme".into()),
            ..Default::default()
        };
        let result = store.update_experience(EntryId(5), patch);
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.experience(), before.as_slice());
    }

    #[test]
    fn test_add_then_remove_round_trips_to_empty() {
        let mut store = ResumeStore::new();
        let id = store.add_experience(experience_draft("Engineer", "Acme")).id;
        store.remove_experience(id);
        assert!(store.experience().is_empty());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = ResumeStore::new();
        store.add_experience(experience_draft("Engineer", "Acme"));
        store.remove_experience(EntryId(99));
        assert_eq!(store.experience().len(), 1);
    }

    #[test]
    fn test_removed_id_is_never_reused() {
        let mut store = ResumeStore::new();
        let removed = store.add_experience(experience_draft("Engineer", "Acme")).id;
        store.remove_experience(removed);
        let next = store.add_experience(experience_draft("Lead", "Globex")).id;
        assert_ne!(next, removed);
        assert!(next > removed);
    }

    #[test]
    fn test_skill_dedup_is_case_insensitive() {
        let mut store = ResumeStore::new();
        assert!(store.add_skill(skill_draft("Go")).is_some());
        assert!(store.add_skill(skill_draft("go")).is_none());
        assert_eq!(store.skills().len(), 1);
        assert_eq!(store.skills()[0].name, "Go"); // first spelling wins
    }

    #[test]
    fn test_skill_dedup_folds_non_ascii_case() {
        let mut store = ResumeStore::new();
        assert!(store.add_skill(skill_draft("Über-Optimierung")).is_some());
        assert!(store.add_skill(skill_draft("über-optimierung")).is_none());
        assert_eq!(store.skills().len(), 1);
    }

    #[test]
    fn test_skill_update_and_remove() {
        let mut store = ResumeStore::new();
        let id = store.add_skill(skill_draft("Rust")).expect("added").id;
        let patch = SkillPatch {
            level: Some(SkillLevel::Expert),
            ..Default::default()
        };
        assert_eq!(
            store.update_skill(id, patch).expect("update").level,
            SkillLevel::Expert
        );
        store.remove_skill(id);
        assert!(store.skills().is_empty());
    }

    #[test]
    fn test_education_sections_are_independent() {
        let mut store = ResumeStore::new();
        store.add_education(EducationDraft {
            institution: "IIT Bombay".into(),
            degree: "B.Tech".into(),
            field_of_study: "CS".into(),
            start_year: Some(2016),
            end_year: Some(2020),
            current: false,
        });
        assert_eq!(store.education().len(), 1);
        assert!(store.experience().is_empty());
    }

    #[test]
    fn test_personal_info_patch_merges() {
        let mut store = ResumeStore::new();
        store.update_personal_info(PersonalInfoPatch {
            full_name: Some("Asha Rao".into()),
            email: Some("asha@example.com".into()),
            ..Default::default()
        });
        store.update_personal_info(PersonalInfoPatch {
            phone: Some("9876543210".into()),
            ..Default::default()
        });
        assert_eq!(store.personal_info.full_name, "Asha Rao");
        assert_eq!(store.personal_info.email, "asha@example.com");
        assert_eq!(store.personal_info.phone, "9876543210");
    }

    #[test]
    fn test_toggle_section_flips_visibility() {
        let mut store = ResumeStore::new();
        assert!(store.sections.skills);
        store.toggle_section(SectionKind::Skills);
        assert!(!store.sections.skills);
        store.toggle_section(SectionKind::Skills);
        assert!(store.sections.skills);
    }

    #[test]
    fn test_set_template() {
        let mut store = ResumeStore::new();
        assert_eq!(store.selected_template, "classic");
        store.set_template("modern");
        assert_eq!(store.selected_template, "modern");
    }

    #[test]
    fn test_reset_restores_defaults_but_ids_keep_advancing() {
        let mut store = ResumeStore::new();
        let before = store.add_experience(experience_draft("Engineer", "Acme")).id;
        store.set_template("modern");
        store.reset();
        assert!(store.experience().is_empty());
        assert_eq!(store.selected_template, "classic");
        let after = store.add_experience(experience_draft("Lead", "Globex")).id;
        assert!(after > before);
    }

    #[test]
    fn test_store_snapshot_round_trips_through_json() {
        let mut store = ResumeStore::new();
        store.add_skill(skill_draft("Rust"));
        store.add_experience(experience_draft("Engineer", "Acme"));
        let raw = serde_json::to_string(&store).expect("serialize");
        let restored: ResumeStore = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(restored.skills(), store.skills());
        assert_eq!(restored.experience(), store.experience());
    }
}
