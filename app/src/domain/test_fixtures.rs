//! Shared fixtures for domain unit tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use super::{Creator, Project, ProjectDraft, ProjectId, Role, Session, UserId, UserProfile};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn creator() -> Creator {
    Creator {
        id: UserId::new("00000000-0000-4000-8000-000000000001").expect("fixture id"),
        name: "John Doe".to_owned(),
        avatar: "/placeholder-avatar.png".to_owned(),
        title: "Founder".to_owned(),
    }
}

pub(crate) fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_owned(),
        description: "Short summary".to_owned(),
        detailed_description: "Longer description".to_owned(),
        category: "Web Development".to_owned(),
        is_paid: true,
        budget: 1_000,
        deadline: fixture_timestamp() + Duration::days(30),
        required_skills: vec!["React".to_owned(), "Node.js".to_owned()],
        team_size: 2,
        location: "Remote".to_owned(),
        duration: "1 month".to_owned(),
        responsibilities: vec!["Build the frontend".to_owned()],
        requirements: vec!["React experience".to_owned()],
    }
}

pub(crate) fn project(title: &str) -> Project {
    Project::from_draft(
        ProjectId::random(),
        project_draft(title),
        creator(),
        fixture_timestamp(),
    )
}

pub(crate) fn profile(id: UserId) -> UserProfile {
    UserProfile {
        id,
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        avatar: "/placeholder-avatar.png".to_owned(),
        bio: "Full-stack developer".to_owned(),
        skills: vec!["React".to_owned()],
        location: "New York, USA".to_owned(),
        website: "https://example.com".to_owned(),
        github: "johndoe".to_owned(),
        linkedin: "johndoe".to_owned(),
    }
}

pub(crate) fn session(email: &str, role: Role) -> Session {
    Session {
        id: UserId::new("00000000-0000-4000-8000-000000000001").expect("fixture id"),
        name: "John Doe".to_owned(),
        email: email.to_owned(),
        role,
        avatar: "/placeholder-avatar.png".to_owned(),
    }
}
