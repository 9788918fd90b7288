//! # Data model — identities, profiles, posts, timestamps
//!
//! The wire records exchanged with the backend. Field names on the wire are
//! camelCase (`createdAt`, `updatedAt`) to stay compatible with the data the
//! original client generation wrote into the same collections.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::Document;
use crate::error::ApiError;

/// Authenticated identity as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

impl From<&Identity> for store::SessionUser {
    fn from(identity: &Identity) -> Self {
        store::SessionUser {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
        }
    }
}

/// Profile record in the `users` collection, written once at registration
/// and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    /// Optional display name; empty means "use the email".
    #[serde(default)]
    pub username: String,
    /// ISO string from the registering client's clock.
    #[serde(default)]
    pub created_at: String,
}

/// A blog post document from the `posts` collection.
///
/// The id is backend-assigned and lives outside the stored fields; it is
/// carried over by [`Post::from_document`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Display label stamped at publish time (username or email), not a
    /// stable user id.
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Post {
    /// Decode a stored document, carrying the backend-assigned id over.
    pub fn from_document(doc: &Document) -> Result<Self, ApiError> {
        let mut post: Post = doc.decode()?;
        post.id = doc.id.clone();
        Ok(post)
    }
}

/// Timestamp value as stored by the backend.
///
/// Documents written by different client generations carry different
/// encodings, so all of them are accepted: epoch milliseconds, an ISO-8601
/// string, a raw `{seconds[, nanos]}` structure, and the server-timestamp
/// sentinel that the backend replaces at write time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Server-assigned sentinel, usable as a field value on writes.
    ServerSet {
        #[serde(rename = "__server_timestamp__")]
        server: bool,
    },
    /// Epoch milliseconds.
    Millis(i64),
    /// ISO-8601 / RFC 3339 string.
    Iso(String),
    /// Raw seconds structure.
    Seconds {
        seconds: i64,
        #[serde(default)]
        nanos: u32,
    },
}

impl Timestamp {
    /// The sentinel the backend substitutes with its own clock.
    pub fn server_set() -> Self {
        Timestamp::ServerSet { server: true }
    }

    /// Normalise to a concrete instant. Sentinels that were never resolved
    /// and unparseable strings have none.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::ServerSet { .. } => None,
            Timestamp::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            Timestamp::Iso(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Timestamp::Seconds { seconds, nanos } => Utc.timestamp_opt(*seconds, *nanos).single(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timestamp_encodings_denote_the_same_instant() {
        let millis = Timestamp::Millis(1_700_000_000_000);
        let iso = Timestamp::Iso("2023-11-14T22:13:20Z".to_string());
        let seconds = Timestamp::Seconds {
            seconds: 1_700_000_000,
            nanos: 0,
        };

        let instant = millis.to_datetime().unwrap();
        assert_eq!(iso.to_datetime().unwrap(), instant);
        assert_eq!(seconds.to_datetime().unwrap(), instant);
    }

    #[test]
    fn test_timestamp_decodes_every_wire_shape() {
        let millis: Timestamp = serde_json::from_value(json!(1_700_000_000_000i64)).unwrap();
        assert_eq!(millis, Timestamp::Millis(1_700_000_000_000));

        let iso: Timestamp = serde_json::from_value(json!("2023-11-14T22:13:20Z")).unwrap();
        assert_eq!(iso, Timestamp::Iso("2023-11-14T22:13:20Z".to_string()));

        let seconds: Timestamp = serde_json::from_value(json!({"seconds": 1_700_000_000})).unwrap();
        assert_eq!(
            seconds,
            Timestamp::Seconds {
                seconds: 1_700_000_000,
                nanos: 0
            }
        );

        let sentinel: Timestamp =
            serde_json::from_value(json!({"__server_timestamp__": true})).unwrap();
        assert_eq!(sentinel, Timestamp::server_set());
        assert!(sentinel.to_datetime().is_none());
    }

    #[test]
    fn test_server_sentinel_round_trips() {
        let encoded = serde_json::to_value(Timestamp::server_set()).unwrap();
        assert_eq!(encoded, json!({"__server_timestamp__": true}));
    }

    #[test]
    fn test_unparseable_iso_has_no_instant() {
        assert!(Timestamp::Iso("not a date".to_string()).to_datetime().is_none());
    }

    #[test]
    fn test_post_from_document_carries_the_id() {
        let doc = Document {
            id: "p1".to_string(),
            fields: json!({
                "title": "Hello",
                "content": "World",
                "author": "a@x.com",
                "createdAt": 1_700_000_000_000i64
            }),
        };

        let post = Post::from_document(&doc).unwrap();
        assert_eq!(post.id, "p1");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.author, "a@x.com");
        assert_eq!(post.created_at, Some(Timestamp::Millis(1_700_000_000_000)));
        assert!(post.updated_at.is_none());
    }
}
