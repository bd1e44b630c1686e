//! Resume section entities, their form drafts, and typed partial updates.
//!
//! Three shapes per section kind:
//! - the stored entity (`Experience`, ...) carrying its `EntryId`,
//! - a `*Draft` backing the add/edit form (entity minus id),
//! - a `*Patch` enumerating the fields an update may touch; `None` leaves
//!   the stored value alone.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity token for a stored resume entry. Monotonic per store, unique
/// within it, and never reused after removal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Dates are "YYYY-MM" month strings, as entered by the form's month inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl Experience {
    pub fn to_draft(&self) -> ExperienceDraft {
        ExperienceDraft {
            job_title: self.job_title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            current: self.current,
            description: self.description.clone(),
        }
    }
}

/// A form submit replaces every form-managed field, so a draft converts to
/// the all-fields-set patch.
impl From<ExperienceDraft> for ExperiencePatch {
    fn from(draft: ExperienceDraft) -> Self {
        ExperiencePatch {
            job_title: Some(draft.job_title),
            company: Some(draft.company),
            location: Some(draft.location),
            start_date: Some(draft.start_date),
            end_date: Some(draft.end_date),
            current: Some(draft.current),
            description: Some(draft.description),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_year: Option<i32>,
    /// `Some(None)` clears the end year (entry became current).
    pub end_year: Option<Option<i32>>,
    pub current: Option<bool>,
}

impl Education {
    pub fn to_draft(&self) -> EducationDraft {
        EducationDraft {
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            field_of_study: self.field_of_study.clone(),
            start_year: Some(self.start_year),
            end_year: self.end_year,
            current: self.current,
        }
    }
}

impl From<EducationDraft> for EducationPatch {
    fn from(draft: EducationDraft) -> Self {
        EducationPatch {
            institution: Some(draft.institution),
            degree: Some(draft.degree),
            field_of_study: Some(draft.field_of_study),
            start_year: draft.start_year,
            end_year: Some(draft.end_year),
            current: Some(draft.current),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

impl Skill {
    pub fn to_draft(&self) -> SkillDraft {
        SkillDraft {
            name: self.name.clone(),
            level: self.level,
        }
    }
}

impl From<SkillDraft> for SkillPatch {
    fn from(draft: SkillDraft) -> Self {
        SkillPatch {
            name: Some(draft.name),
            level: Some(draft.level),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub project_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub project_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
}

impl Project {
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            technologies: self.technologies.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            current: self.current,
            project_url: self.project_url.clone(),
            github_url: self.github_url.clone(),
        }
    }
}

impl From<ProjectDraft> for ProjectPatch {
    fn from(draft: ProjectDraft) -> Self {
        ProjectPatch {
            name: Some(draft.name),
            description: Some(draft.description),
            technologies: Some(draft.technologies),
            start_date: Some(draft.start_date),
            end_date: Some(draft.end_date),
            current: Some(draft.current),
            project_url: Some(draft.project_url),
            github_url: Some(draft.github_url),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: EntryId,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

impl Certification {
    pub fn to_draft(&self) -> CertificationDraft {
        CertificationDraft {
            name: self.name.clone(),
            issuer: self.issuer.clone(),
            date: self.date.clone(),
            credential_id: self.credential_id.clone(),
            credential_url: self.credential_url.clone(),
        }
    }
}

impl From<CertificationDraft> for CertificationPatch {
    fn from(draft: CertificationDraft) -> Self {
        CertificationPatch {
            name: Some(draft.name),
            issuer: Some(draft.issuer),
            date: Some(draft.date),
            credential_id: Some(draft.credential_id),
            credential_url: Some(draft.credential_url),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info (singleton) and section visibility
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfo {
    pub fn apply(&mut self, patch: PersonalInfoPatch) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.job_title {
            self.job_title = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.address {
            self.address = v;
        }
        if let Some(v) = patch.city {
            self.city = v;
        }
        if let Some(v) = patch.country {
            self.country = v;
        }
        if let Some(v) = patch.postal_code {
            self.postal_code = v;
        }
        if let Some(v) = patch.linkedin {
            self.linkedin = v;
        }
        if let Some(v) = patch.github {
            self.github = v;
        }
        if let Some(v) = patch.website {
            self.website = v;
        }
        if let Some(v) = patch.summary {
            self.summary = v;
        }
    }
}

/// The preview sections a user can hide; display-order toggles only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVisibility {
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
    pub certifications: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        SectionVisibility {
            summary: true,
            experience: true,
            education: true,
            skills: true,
            projects: true,
            certifications: true,
        }
    }
}

impl SectionVisibility {
    pub fn toggle(&mut self, kind: SectionKind) {
        let flag = match kind {
            SectionKind::Summary => &mut self.summary,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
            SectionKind::Skills => &mut self.skills,
            SectionKind::Projects => &mut self.projects,
            SectionKind::Certifications => &mut self.certifications,
        };
        *flag = !*flag;
    }
}
