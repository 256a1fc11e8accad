use serde::{Deserialize, Serialize};
use bson::{oid::ObjectId, DateTime as BsonDateTime};

use crate::models::engine::Engine;

// Match document as stored in the `matches` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatch {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    // References into `engines`; either may be absent on malformed documents
    pub engine1: Option<ObjectId>,
    pub engine2: Option<ObjectId>,

    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub total: i64,

    #[serde(rename = "tc")]
    pub time_control: String,

    pub diff: f64,

    pub date: BsonDateTime,
}

impl RawMatch {
    /// Both engine references, if the document carries them.
    pub fn engine_refs(&self) -> Option<(ObjectId, ObjectId)> {
        Some((self.engine1?, self.engine2?))
    }

    /// Whole seconds since the Unix epoch, rounded towards negative infinity.
    pub fn date_seconds(&self) -> i64 {
        self.date.timestamp_millis().div_euclid(1000)
    }
}

// Denormalized match with both engines embedded
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub engine1: Engine,
    pub engine2: Engine,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub total: i64,
    pub time_control: String,
    pub diff: f64,
    pub date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(engine1: Option<ObjectId>, engine2: Option<ObjectId>, millis: i64) -> RawMatch {
        RawMatch {
            id: None,
            engine1,
            engine2,
            wins: 1,
            draws: 2,
            losses: 3,
            total: 6,
            time_control: "10+0.1".into(),
            diff: -12.0,
            date: BsonDateTime::from_millis(millis),
        }
    }

    #[test]
    fn refs_require_both_engines() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        assert_eq!(raw(Some(a), Some(b), 0).engine_refs(), Some((a, b)));
        assert_eq!(raw(Some(a), None, 0).engine_refs(), None);
        assert_eq!(raw(None, Some(b), 0).engine_refs(), None);
    }

    #[test]
    fn date_seconds_floor_milliseconds() {
        assert_eq!(raw(None, None, 1_672_617_600_999).date_seconds(), 1_672_617_600);
        assert_eq!(raw(None, None, -1).date_seconds(), -1);
    }

    #[test]
    fn documents_without_references_still_decode() {
        let doc = bson::doc! {
            "wins": 3_i32,
            "draws": 4_i32,
            "losses": 1_i32,
            "total": 8_i32,
            "tc": "40/4",
            "diff": 35.5,
            "date": BsonDateTime::from_millis(1_000),
        };
        let decoded: RawMatch = bson::from_document(doc).unwrap();
        assert!(decoded.engine_refs().is_none());
        assert_eq!(decoded.time_control, "40/4");
    }
}
