//! Card records owned by users. Only the owner column matters for access
//! checks; the rest is returned to callers that pass them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::types::{CardId, GraphTypeId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CardData {
    #[schema(value_type = i32)]
    pub id: CardId,
    /// Owner of the card.
    #[schema(value_type = i32)]
    pub user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_active: bool,
    #[schema(value_type = i32)]
    pub graph_type_id: GraphTypeId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCardRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[schema(value_type = i32)]
    pub graph_type_id: GraphTypeId,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CreateCardRequest {
    pub fn has_valid_window(&self) -> bool {
        self.end_time >= self.start_time
    }
}

/// Partial card update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCardRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    #[schema(value_type = Option<i32>)]
    pub graph_type_id: Option<GraphTypeId>,
}

impl UpdateCardRequest {
    /// Checks the time window the card would have after this update.
    pub fn has_valid_window_for(&self, card: &CardData) -> bool {
        let start = self.start_time.unwrap_or(card.start_time);
        let end = self.end_time.unwrap_or(card.end_time);
        end >= start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stored_card() -> CardData {
        let start = Utc::now();
        CardData {
            id: CardId::new(1),
            user_id: UserId::new(2),
            start_time: start,
            end_time: start + Duration::hours(1),
            is_active: true,
            graph_type_id: GraphTypeId::new(3),
            created_at: start,
            updated_at: start,
        }
    }

    #[test]
    fn create_request_defaults_to_active() {
        let request: CreateCardRequest = serde_json::from_value(serde_json::json!({
            "start_time": "2024-01-01T00:00:00Z",
            "end_time": "2024-01-01T01:00:00Z",
            "graph_type_id": 4
        }))
        .expect("deserialize");
        assert!(request.is_active);
        assert_eq!(request.graph_type_id, GraphTypeId::new(4));
        assert!(request.has_valid_window());
    }

    #[test]
    fn create_request_rejects_inverted_window() {
        let request: CreateCardRequest = serde_json::from_value(serde_json::json!({
            "start_time": "2024-01-01T02:00:00Z",
            "end_time": "2024-01-01T01:00:00Z",
            "graph_type_id": 4
        }))
        .expect("deserialize");
        assert!(!request.has_valid_window());
    }

    #[test]
    fn update_window_merges_with_stored_values() {
        let card = stored_card();

        let untouched = UpdateCardRequest::default();
        assert!(untouched.has_valid_window_for(&card));

        let past_end = UpdateCardRequest {
            start_time: Some(card.end_time + Duration::minutes(1)),
            ..Default::default()
        };
        assert!(!past_end.has_valid_window_for(&card));

        let moved = UpdateCardRequest {
            start_time: Some(card.end_time + Duration::minutes(1)),
            end_time: Some(card.end_time + Duration::hours(2)),
            ..Default::default()
        };
        assert!(moved.has_valid_window_for(&card));
    }

    #[test]
    fn update_request_accepts_partial_body() {
        let request: UpdateCardRequest =
            serde_json::from_value(serde_json::json!({ "is_active": false })).expect("deserialize");
        assert_eq!(request.is_active, Some(false));
        assert!(request.start_time.is_none());
        assert!(request.graph_type_id.is_none());
    }
}
