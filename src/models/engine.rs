use serde::{Deserialize, Serialize};
use bson::oid::ObjectId;

// Engine document - one entry in the `engines` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    pub rating: f64,

    pub stable: bool,

    pub games: i64,

    pub author: String,
}

// For creating new engines
#[derive(Debug, Clone, PartialEq)]
pub struct NewEngine {
    pub name: String,
    pub rating: f64,
    pub author: String,
}

impl NewEngine {
    /// New engines start unstable with no games played.
    pub fn into_document(self) -> Engine {
        Engine {
            id: None,
            name: self.name,
            rating: self.rating,
            stable: false,
            games: 0,
            author: self.author,
        }
    }
}
