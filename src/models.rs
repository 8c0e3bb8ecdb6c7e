use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A dated happening that tickets are issued against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
}

impl Event {
    /// An event is expired once its date lies before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.date < now
    }
}

/// An admission record tied to one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub event_id: i64,
    pub owner: String,
    pub code: String,
    pub used: bool,
}

type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Body of `POST /events` and `PUT /events/{id}`.
///
/// Both fields are optional on the wire so that a missing or null field
/// surfaces as a validation error instead of a decoding error. Only JSON
/// objects are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct EventPayload {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct EventFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    date: Option<DateTime<Utc>>,
}

impl TryFrom<JsonObject> for EventPayload {
    type Error = serde_json::Error;

    fn try_from(object: JsonObject) -> Result<Self, Self::Error> {
        let fields: EventFields = serde_json::from_value(object.into())?;
        Ok(EventPayload {
            name: fields.name,
            date: fields.date,
        })
    }
}

/// Validated event fields, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// Body of `POST /tickets`. Only JSON objects are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct TicketPayload {
    pub event_id: Option<i64>,
    pub owner: Option<String>,
    pub code: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TicketFields {
    #[serde(default)]
    event_id: Option<i64>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl TryFrom<JsonObject> for TicketPayload {
    type Error = serde_json::Error;

    fn try_from(object: JsonObject) -> Result<Self, Self::Error> {
        let fields: TicketFields = serde_json::from_value(object.into())?;
        Ok(TicketPayload {
            event_id: fields.event_id,
            owner: fields.owner,
            code: fields.code,
        })
    }
}

/// Validated ticket fields, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub event_id: i64,
    pub owner: String,
    pub code: String,
}

/// Result of marking a ticket as used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOutcome {
    Marked,
    AlreadyUsed,
    NotFound,
}

/// Parse a date as RFC 3339, as a naive `YYYY-MM-DDTHH:MM:SS` (UTC), or as a
/// plain `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", s))),
    }
}
