//! Shared types for the checklist service and its RPC clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A single checklist task with its completion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

/// Free-text note attached to a `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNote {
    pub date: String,
    pub note: String,
}

/// Per-date completion counts plus the note for that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub date: String,
    pub total: usize,
    pub completed: usize,
    pub note: String,
}

/// Single-day drill-down: the items created that day with their counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDetail {
    pub date: String,
    pub items: Vec<ChecklistItem>,
    pub note: String,
    pub total: usize,
    pub completed: usize,
}

// =====================================================
// RPC Request Types
// =====================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub title: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpsertNoteRequest {
    #[serde(default)]
    pub note: Option<String>,
}

// =====================================================
// RPC Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> RpcResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// =====================================================
// Service Status
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub total_items: usize,
    pub completed_items: usize,
    pub notes: usize,
}
