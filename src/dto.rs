use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note in the feed. Invoices are embedded in `content` as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedNote {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
