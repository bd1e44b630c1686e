//! Demo binary: stands in for the two UIs and walks one scripted session
//! through the core, logging what each page would render.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use journeyman::auth;
use journeyman::bus::data::demo_catalog;
use journeyman::bus::model::{FilterCriteria, SearchParams, SortKey};
use journeyman::bus::query;
use journeyman::bus::seats::SeatMap;
use journeyman::config::Config;
use journeyman::resume::forms::{FormFlow, SubmitAction};
use journeyman::resume::model::{ExperienceDraft, PersonalInfoPatch, SkillDraft};
use journeyman::session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("journeyman demo v{}", env!("CARGO_PKG_VERSION"));

    // Mock login gate: any well-formed credentials pass.
    let user = auth::login("rider@example.com", "letmein")
        .map_err(|errors| anyhow::anyhow!("login rejected: {errors:?}"))?;
    info!(email = %user.email, "logged in");

    let mut session = Session::new(&config, demo_catalog())?;
    session.restore_search();
    if session.search_results().total > 0 {
        info!(
            total = session.search_results().total,
            "restored previous search"
        );
    }

    // Bus demo: search, then filter/sort the result list.
    let params = SearchParams {
        from: "Mumbai".into(),
        to: "Pune".into(),
        date: String::new(),
    };
    let response = session.search.search(&params).await;
    info!(from = %params.from, to = %params.to, total = response.total, "search resolved");
    session.record_search(params, response)?;

    let criteria = FilterCriteria {
        sort_by: Some(SortKey::Price),
        ..Default::default()
    };
    let ordered = query::filter(&session.search_results().results, &criteria);
    for bus in &ordered {
        info!(
            id = bus.id,
            operator = %bus.operator_name,
            departs = %bus.departure_time,
            price = bus.price,
            "option"
        );
    }

    // Seat selection on the cheapest option.
    if let Some(bus) = ordered.first() {
        let mut seats = SeatMap::generate(bus.seats_available, &mut rand::thread_rng());
        seats.toggle(5);
        seats.toggle(6);
        if let Some(booking) = seats.pending_booking(bus) {
            info!(
                seats = booking.seats,
                total = booking.total_amount,
                "pending booking saved"
            );
            session.save_pending_booking(&booking)?;
        }
    } else {
        warn!("no buses matched; skipping seat selection");
    }

    // Resume demo: personal info, one experience through the form flow,
    // and a couple of skills with de-dup.
    session.resume.update_personal_info(PersonalInfoPatch {
        full_name: Some("Asha Rao".into()),
        job_title: Some("Software Engineer".into()),
        email: Some(user.email.clone()),
        phone: Some("9876543210".into()),
        ..Default::default()
    });

    let mut experience_form: FormFlow<ExperienceDraft> = FormFlow::new();
    experience_form.begin_add();
    {
        let draft = experience_form.draft_mut();
        draft.job_title = "Software Engineer".into();
        draft.company = "Acme Systems".into();
        draft.location = "Pune".into();
        draft.start_date = "2021-04".into();
        draft.current = true;
        draft.description = "Backend services for ticketing".into();
    }
    match experience_form.submit() {
        Ok(SubmitAction::Add(draft)) => {
            let entry = session.resume.add_experience(draft);
            info!(id = %entry.id, company = %entry.company, "experience added");
        }
        Ok(SubmitAction::Update(..)) => unreachable!("form was opened in add mode"),
        Err(errors) => warn!(?errors, "experience submit blocked"),
    }

    for name in ["Rust", "SQL", "rust"] {
        match session.resume.add_skill(SkillDraft {
            name: name.into(),
            ..Default::default()
        }) {
            Some(skill) => info!(name = %skill.name, "skill added"),
            None => info!(name, "duplicate skill skipped"),
        }
    }

    info!(
        experience = session.resume.experience().len(),
        skills = session.resume.skills().len(),
        "resume state"
    );

    Ok(())
}
