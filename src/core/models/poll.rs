use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Poll {
    pub id: i32,
    pub question: String,
    pub pub_date: DateTime<Utc>,
}

impl Poll {
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// True when the poll went live within the 24 hours up to `now`, bounds included.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

impl fmt::Display for Poll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question)
    }
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub question: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub pub_date_lte: Option<DateTime<Utc>>,
}

impl Query {
    pub fn published(now: DateTime<Utc>) -> Self {
        Self { pub_date_lte: Some(now) }
    }

    pub fn matches(&self, poll: &Poll) -> bool {
        self.pub_date_lte.map_or(true, |lte| poll.pub_date <= lte)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Detail {
    pub id: i32,
    pub question: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl Detail {
    pub fn new(poll: Poll, now: DateTime<Utc>) -> Self {
        let was_published_recently = poll.was_published_recently(now);
        Self {
            id: poll.id,
            question: poll.question,
            pub_date: poll.pub_date,
            was_published_recently,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_at(pub_date: DateTime<Utc>) -> Poll {
        Poll {
            id: 1,
            question: String::new(),
            pub_date,
        }
    }

    #[test]
    fn was_published_recently_with_future_poll() {
        let now = Utc::now();
        assert!(!poll_at(now + Duration::days(30)).was_published_recently(now));
        assert!(!poll_at(now + Duration::seconds(1)).was_published_recently(now));
    }

    #[test]
    fn was_published_recently_with_old_poll() {
        let now = Utc::now();
        assert!(!poll_at(now - Duration::days(30)).was_published_recently(now));
        assert!(!poll_at(now - Duration::days(1) - Duration::seconds(1)).was_published_recently(now));
    }

    #[test]
    fn was_published_recently_with_recent_poll() {
        let now = Utc::now();
        assert!(poll_at(now - Duration::hours(1)).was_published_recently(now));
        assert!(poll_at(now - Duration::hours(23) - Duration::minutes(59)).was_published_recently(now));
    }

    #[test]
    fn was_published_recently_bounds_are_inclusive() {
        let now = Utc::now();
        assert!(poll_at(now).was_published_recently(now));
        assert!(poll_at(now - Duration::days(1)).was_published_recently(now));
    }

    #[test]
    fn published_query_excludes_future_polls() {
        let now = Utc::now();
        let query = Query::published(now);
        assert!(query.matches(&poll_at(now)));
        assert!(query.matches(&poll_at(now - Duration::days(30))));
        assert!(!query.matches(&poll_at(now + Duration::days(30))));
        assert!(Query::default().matches(&poll_at(now + Duration::days(30))));
    }

    #[test]
    fn display_is_the_question() {
        let poll = Poll {
            id: 7,
            question: "What's new?".into(),
            pub_date: Utc::now(),
        };
        assert_eq!(poll.to_string(), "What's new?");
    }
}
