// SPDX-License-Identifier: MPL-2.0
//! Wire shapes for the platform API. These types define serialization
//! only; no behavior lives here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discoverable place, as listed by the nearby/explore endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f32,
    pub favourite_count: u32,
}

/// Full detail for a single place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetail {
    #[serde(flatten)]
    pub summary: LocationSummary,
    pub description: String,
    pub address: String,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub body: String,
    pub rating: f32,
    pub posted_at: DateTime<Utc>,
}

/// One entry of the social feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub author: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub likes: u32,
}

/// A shared video clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub stream_url: String,
    pub duration_secs: u32,
    pub posted_at: DateTime<Utc>,
}

/// Point balance plus recent activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub balance_points: i64,
    pub updated_at: DateTime<Utc>,
    pub transactions: Vec<WalletTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: String,
    pub label: String,
    /// Positive for credits, negative for debits.
    pub amount_points: i64,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub handle: String,
    pub bio: String,
    pub joined_at: DateTime<Utc>,
    pub followers: u32,
    pub following: u32,
}

// Auth sequence wire shapes.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Issued after credentials check out; the code travels out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpChallenge {
    pub challenge_id: String,
    /// Masked delivery target, e.g. `j***@example.com`.
    pub sent_to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpVerifyRequest {
    pub challenge_id: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// An authenticated session as returned by verify/register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// Payload for publishing a feed post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPostRequest {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// File name of the attached media, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_name: Option<String>,
}
