//! Field-level validation for the resume forms.
//!
//! Each `validate_*` function checks one draft kind and returns the failed
//! fields with the exact inline messages the forms show. An empty vec means
//! the submit may proceed; the store is never touched while any required
//! field fails. Cross-field rules (end required unless current, end after
//! start) live here too.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::Serialize;
use url::Url;

use super::model::{
    CertificationDraft, EducationDraft, ExperienceDraft, PersonalInfo, ProjectDraft, SkillDraft,
};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone pattern"));

pub const MIN_YEAR: i32 = 1900;

/// A single failed field with the message shown inline next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Years are accepted from 1900 up to five years into the future.
pub fn is_valid_year(year: i32) -> bool {
    (MIN_YEAR..=Utc::now().year() + 5).contains(&year)
}

pub fn validate_experience(draft: &ExperienceDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_required(&draft.job_title) {
        errors.push(FieldError::new("jobTitle", "Job title is required"));
    }
    if !is_required(&draft.company) {
        errors.push(FieldError::new("company", "Company name is required"));
    }
    if !is_required(&draft.start_date) {
        errors.push(FieldError::new("startDate", "Start date is required"));
    }
    if !draft.current && !is_required(&draft.end_date) {
        errors.push(FieldError::new(
            "endDate",
            "End date is required if not current",
        ));
    }
    errors
}

pub fn validate_education(draft: &EducationDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_required(&draft.institution) {
        errors.push(FieldError::new("institution", "Institution is required"));
    }
    if !is_required(&draft.degree) {
        errors.push(FieldError::new("degree", "Degree is required"));
    }
    match draft.start_year {
        None => errors.push(FieldError::new("startYear", "Start year is required")),
        Some(year) if !is_valid_year(year) => {
            errors.push(FieldError::new("startYear", "Please enter a valid year"))
        }
        Some(_) => {}
    }
    match draft.end_year {
        None if !draft.current => errors.push(FieldError::new(
            "endYear",
            "End year is required if not current",
        )),
        Some(end) if end < draft.start_year.unwrap_or(0) => errors.push(FieldError::new(
            "endYear",
            "End year must be after start year",
        )),
        _ => {}
    }
    errors
}

pub fn validate_skill(draft: &SkillDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_required(&draft.name) {
        errors.push(FieldError::new("name", "Skill name is required"));
    }
    errors
}

pub fn validate_project(draft: &ProjectDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_required(&draft.name) {
        errors.push(FieldError::new("name", "Project name is required"));
    }
    if is_required(&draft.project_url) && !is_valid_url(&draft.project_url) {
        errors.push(FieldError::new("projectUrl", "Invalid URL"));
    }
    if is_required(&draft.github_url) && !is_valid_url(&draft.github_url) {
        errors.push(FieldError::new("githubUrl", "Invalid URL"));
    }
    errors
}

pub fn validate_certification(draft: &CertificationDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_required(&draft.name) {
        errors.push(FieldError::new("name", "Certification name is required"));
    }
    if !is_required(&draft.issuer) {
        errors.push(FieldError::new("issuer", "Issuer is required"));
    }
    if is_required(&draft.credential_url) && !is_valid_url(&draft.credential_url) {
        errors.push(FieldError::new("credentialUrl", "Invalid URL"));
    }
    errors
}

/// The personal-info form edits the singleton directly, so it validates the
/// record itself rather than a draft.
pub fn validate_personal_info(info: &PersonalInfo) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_required(&info.full_name) {
        errors.push(FieldError::new("fullName", "Full name is required"));
    }
    if !is_required(&info.job_title) {
        errors.push(FieldError::new("jobTitle", "Job title is required"));
    }
    if !is_required(&info.email) {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(&info.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if !is_required(&info.phone) {
        errors.push(FieldError::new("phone", "Phone number is required"));
    } else if !is_valid_phone(&info.phone) {
        errors.push(FieldError::new("phone", "Phone number must be 10 digits"));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_experience() -> ExperienceDraft {
        ExperienceDraft {
            job_title: "Senior Software Engineer".into(),
            company: "Acme".into(),
            location: "Pune".into(),
            start_date: "2021-04".into(),
            end_date: "2023-01".into(),
            current: false,
            description: String::new(),
        }
    }

    fn valid_education() -> EducationDraft {
        EducationDraft {
            institution: "IIT Bombay".into(),
            degree: "B.Tech".into(),
            field_of_study: "Computer Science".into(),
            start_year: Some(2016),
            end_year: Some(2020),
            current: false,
        }
    }

    fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
        errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[test]
    fn test_valid_experience_passes() {
        assert!(validate_experience(&valid_experience()).is_empty());
    }

    #[test]
    fn test_experience_requires_title_company_and_start() {
        let draft = ExperienceDraft::default();
        let errors = validate_experience(&draft);
        assert_eq!(message_for(&errors, "jobTitle"), Some("Job title is required"));
        assert_eq!(
            message_for(&errors, "company"),
            Some("Company name is required")
        );
        assert_eq!(
            message_for(&errors, "startDate"),
            Some("Start date is required")
        );
    }

    #[test]
    fn test_experience_end_date_required_unless_current() {
        let mut draft = valid_experience();
        draft.end_date = String::new();
        let errors = validate_experience(&draft);
        assert_eq!(
            message_for(&errors, "endDate"),
            Some("End date is required if not current")
        );

        draft.current = true;
        assert!(validate_experience(&draft).is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut draft = valid_experience();
        draft.company = "   ".into();
        let errors = validate_experience(&draft);
        assert_eq!(
            message_for(&errors, "company"),
            Some("Company name is required")
        );
    }

    #[test]
    fn test_valid_education_passes() {
        assert!(validate_education(&valid_education()).is_empty());
    }

    #[test]
    fn test_education_end_year_required_unless_current() {
        let mut draft = valid_education();
        draft.end_year = None;
        let errors = validate_education(&draft);
        assert_eq!(
            message_for(&errors, "endYear"),
            Some("End year is required if not current")
        );

        draft.current = true;
        assert!(validate_education(&draft).is_empty());
    }

    #[test]
    fn test_education_end_year_before_start_rejected() {
        let mut draft = valid_education();
        draft.end_year = Some(2015);
        let errors = validate_education(&draft);
        assert_eq!(
            message_for(&errors, "endYear"),
            Some("End year must be after start year")
        );
    }

    #[test]
    fn test_education_equal_years_allowed() {
        let mut draft = valid_education();
        draft.end_year = Some(2016);
        assert!(validate_education(&draft).is_empty());
    }

    #[test]
    fn test_education_start_year_range() {
        let mut draft = valid_education();
        draft.start_year = Some(1850);
        let errors = validate_education(&draft);
        assert_eq!(
            message_for(&errors, "startYear"),
            Some("Please enter a valid year")
        );

        draft.start_year = Some(Utc::now().year() + 6);
        // far-future start also trips the cross-field rule; only the year
        // message matters here
        let errors = validate_education(&draft);
        assert_eq!(
            message_for(&errors, "startYear"),
            Some("Please enter a valid year")
        );

        draft.start_year = None;
        let errors = validate_education(&draft);
        assert_eq!(
            message_for(&errors, "startYear"),
            Some("Start year is required")
        );
    }

    #[test]
    fn test_skill_name_required() {
        let errors = validate_skill(&SkillDraft::default());
        assert_eq!(message_for(&errors, "name"), Some("Skill name is required"));
    }

    #[test]
    fn test_project_name_required_and_urls_checked() {
        let mut draft = ProjectDraft {
            name: "Journeyman".into(),
            project_url: "not a url".into(),
            ..Default::default()
        };
        let errors = validate_project(&draft);
        assert_eq!(message_for(&errors, "projectUrl"), Some("Invalid URL"));

        draft.project_url = "https://example.com/demo".into();
        assert!(validate_project(&draft).is_empty());

        draft.name = String::new();
        let errors = validate_project(&draft);
        assert_eq!(
            message_for(&errors, "name"),
            Some("Project name is required")
        );
    }

    #[test]
    fn test_certification_required_fields() {
        let errors = validate_certification(&CertificationDraft::default());
        assert_eq!(
            message_for(&errors, "name"),
            Some("Certification name is required")
        );
        assert_eq!(message_for(&errors, "issuer"), Some("Issuer is required"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.co"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john.example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_must_be_exactly_ten_digits() {
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("98765-4321"));
    }

    #[test]
    fn test_url_parseability() {
        assert!(is_valid_url("https://example.com/x"));
        assert!(!is_valid_url("example.com")); // no scheme, same as new URL()
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_personal_info_rules_and_messages() {
        let errors = validate_personal_info(&PersonalInfo::default());
        assert_eq!(
            message_for(&errors, "fullName"),
            Some("Full name is required")
        );
        assert_eq!(message_for(&errors, "email"), Some("Email is required"));
        assert_eq!(
            message_for(&errors, "phone"),
            Some("Phone number is required")
        );

        let info = PersonalInfo {
            full_name: "Asha Rao".into(),
            job_title: "Engineer".into(),
            email: "not-an-email".into(),
            phone: "12345".into(),
            ..Default::default()
        };
        let errors = validate_personal_info(&info);
        assert_eq!(
            message_for(&errors, "email"),
            Some("Invalid email address")
        );
        assert_eq!(
            message_for(&errors, "phone"),
            Some("Phone number must be 10 digits")
        );
    }
}
