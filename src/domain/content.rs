// SPDX-License-Identifier: MPL-2.0
//! Records behind the events, sermons, ministries and contact pages.

use super::id::RecordId;
use super::ministry_icon::MinistryIcon;
use super::video_link;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

impl Event {
    /// Short human date, e.g. `Sun 14 Apr 2024 · 10:30`.
    #[must_use]
    pub fn when_label(&self) -> String {
        self.starts_at.format("%a %e %b %Y · %H:%M").to_string()
    }
}

/// Published events starting at or after `now`, soonest first.
#[must_use]
pub fn upcoming_events(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|event| event.published && event.starts_at >= now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|event| event.starts_at);
    upcoming
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sermon {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub preacher: Option<String>,
    pub preached_on: NaiveDate,
    #[serde(default)]
    pub scripture: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

impl Sermon {
    /// Explicit thumbnail, else the hosted video's poster.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.thumbnail_url
            .clone()
            .or_else(|| self.video_url.as_deref().and_then(video_link::poster_url))
    }

    #[must_use]
    pub fn byline(&self) -> String {
        let date = self.preached_on.format("%e %B %Y").to_string();
        let date = date.trim();
        match (&self.preacher, &self.scripture) {
            (Some(preacher), Some(scripture)) => format!("{preacher} · {scripture} · {date}"),
            (Some(preacher), None) => format!("{preacher} · {date}"),
            (None, Some(scripture)) => format!("{scripture} · {date}"),
            (None, None) => date.to_string(),
        }
    }
}

/// Published sermons, newest first.
#[must_use]
pub fn latest_sermons(sermons: &[Sermon]) -> Vec<Sermon> {
    let mut published: Vec<Sermon> = sermons.iter().filter(|s| s.published).cloned().collect();
    published.sort_by(|a, b| b.preached_on.cmp(&a.preached_on));
    published
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ministry {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name as typed in the admin area, e.g. `"music"` or `"Heart"`.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl Ministry {
    #[must_use]
    pub fn resolved_icon(&self) -> MinistryIcon {
        MinistryIcon::from_name(self.icon.as_deref().unwrap_or_default())
    }
}

/// Longest message body accepted by the contact form.
pub const MAX_MESSAGE_CHARS: usize = 4000;

/// A visitor's message, inserted into `contact_messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactProblem {
    MissingName,
    InvalidEmail,
    MissingMessage,
    MessageTooLong,
}

impl ContactProblem {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            ContactProblem::MissingName => "Please tell us your name.",
            ContactProblem::InvalidEmail => "Please enter a valid email address.",
            ContactProblem::MissingMessage => "Please write a message.",
            ContactProblem::MessageTooLong => "Your message is too long.",
        }
    }
}

impl ContactMessage {
    /// Returns the trimmed message, or every problem found.
    pub fn validated(&self) -> Result<ContactMessage, Vec<ContactProblem>> {
        let trimmed = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        let mut problems = Vec::new();
        if trimmed.name.is_empty() {
            problems.push(ContactProblem::MissingName);
        }
        if !looks_like_email(&trimmed.email) {
            problems.push(ContactProblem::InvalidEmail);
        }
        if trimmed.message.is_empty() {
            problems.push(ContactProblem::MissingMessage);
        } else if trimmed.message.chars().count() > MAX_MESSAGE_CHARS {
            problems.push(ContactProblem::MessageTooLong);
        }

        if problems.is_empty() {
            Ok(trimmed)
        } else {
            Err(problems)
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: &str, day: u32, published: bool) -> Event {
        Event {
            id: RecordId::new(id),
            title: format!("Event {id}"),
            description: None,
            starts_at: Utc.with_ymd_and_hms(2024, 5, day, 10, 0, 0).unwrap(),
            location: None,
            image_url: None,
            published,
        }
    }

    #[test]
    fn upcoming_filters_past_and_unpublished() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let events = vec![
            event("late", 20, true),
            event("past", 2, true),
            event("draft", 15, false),
            event("soon", 12, true),
        ];
        let ids: Vec<String> = upcoming_events(&events, now)
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["soon", "late"]);
    }

    #[test]
    fn sermons_sorted_newest_first() {
        let sermon = |id: &str, day: u32| Sermon {
            id: RecordId::new(id),
            title: id.to_string(),
            preacher: None,
            preached_on: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            scripture: None,
            video_url: None,
            thumbnail_url: None,
            published: true,
        };
        let latest = latest_sermons(&[sermon("a", 3), sermon("b", 17), sermon("c", 10)]);
        let ids: Vec<&str> = latest.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn byline_joins_available_parts() {
        let sermon = Sermon {
            id: RecordId::new("1"),
            title: "Hope".into(),
            preacher: Some("Pastor Ann".into()),
            preached_on: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            scripture: Some("Romans 5".into()),
            video_url: None,
            thumbnail_url: None,
            published: true,
        };
        assert_eq!(sermon.byline(), "Pastor Ann · Romans 5 · 3 March 2024");
    }

    #[test]
    fn contact_validation_collects_all_problems() {
        let message = ContactMessage {
            name: "  ".into(),
            email: "nobody".into(),
            message: String::new(),
        };
        assert_eq!(
            message.validated(),
            Err(vec![
                ContactProblem::MissingName,
                ContactProblem::InvalidEmail,
                ContactProblem::MissingMessage
            ])
        );
    }

    #[test]
    fn contact_validation_trims_fields() {
        let message = ContactMessage {
            name: " Ruth ".into(),
            email: " ruth@example.org ".into(),
            message: " Hello! ".into(),
        };
        let valid = message.validated().expect("valid");
        assert_eq!(valid.name, "Ruth");
        assert_eq!(valid.email, "ruth@example.org");
        assert_eq!(valid.message, "Hello!");
    }

    #[test]
    fn overlong_message_is_rejected() {
        let message = ContactMessage {
            name: "Ruth".into(),
            email: "ruth@example.org".into(),
            message: "a".repeat(MAX_MESSAGE_CHARS + 1),
        };
        assert_eq!(message.validated(), Err(vec![ContactProblem::MessageTooLong]));
    }

    #[test]
    fn event_row_parses_rfc3339() {
        let row = r#"{"id": 1, "title": "Picnic", "starts_at": "2024-06-01T12:00:00+00:00"}"#;
        let event: Event = serde_json::from_str(row).expect("row");
        assert_eq!(event.when_label(), "Sat  1 Jun 2024 · 12:00");
        assert!(event.published);
    }
}
