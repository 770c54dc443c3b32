// SPDX-License-Identifier: MPL-2.0
//! Bundled mock data set, served by the client when no API base URL is
//! configured. Ids here are referenced by deep-link tests and demo flows.

use super::dto::{
    AuthSession, FeedPost, LocationDetail, LocationSummary, OtpChallenge, Review, UserProfile,
    VideoItem, WalletSnapshot, WalletTransaction,
};
use chrono::{DateTime, TimeZone, Utc};

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn nearby_locations() -> Vec<LocationSummary> {
    vec![
        LocationSummary {
            id: "harbor-market".into(),
            name: "Harbor Market".into(),
            category: "market".into(),
            latitude: 47.6089,
            longitude: -122.3401,
            rating: 4.6,
            favourite_count: 132,
        },
        LocationSummary {
            id: "cedar-park".into(),
            name: "Cedar Park".into(),
            category: "park".into(),
            latitude: 47.6152,
            longitude: -122.3447,
            rating: 4.2,
            favourite_count: 87,
        },
        LocationSummary {
            id: "mill-roasters".into(),
            name: "Mill Roasters".into(),
            category: "cafe".into(),
            latitude: 47.6034,
            longitude: -122.3352,
            rating: 4.8,
            favourite_count: 215,
        },
        LocationSummary {
            id: "north-gallery".into(),
            name: "North Gallery".into(),
            category: "gallery".into(),
            latitude: 47.6201,
            longitude: -122.3490,
            rating: 4.0,
            favourite_count: 41,
        },
    ]
}

pub fn location_detail(id: &str) -> Option<LocationDetail> {
    let summary = nearby_locations().into_iter().find(|l| l.id == id)?;
    Some(LocationDetail {
        description: match id {
            "harbor-market" => "Waterfront stalls with fresh produce and street food.".into(),
            "cedar-park" => "Quiet paths under old cedars, with a view of the bay.".into(),
            "mill-roasters" => "Small-batch roastery with a busy counter.".into(),
            _ => "A favourite spot among locals.".into(),
        },
        address: format!("{} Waterfront District", summary.name),
        reviews: vec![
            Review {
                author: "marta".into(),
                body: "Worth the detour.".into(),
                rating: 5.0,
                posted_at: ts(2025, 5, 18, 9, 30),
            },
            Review {
                author: "kenji".into(),
                body: "Crowded on weekends, lovely otherwise.".into(),
                rating: 4.0,
                posted_at: ts(2025, 4, 2, 17, 5),
            },
        ],
        summary,
    })
}

pub fn feed() -> Vec<FeedPost> {
    vec![
        FeedPost {
            id: "post-301".into(),
            author: "marta".into(),
            body: "Sunrise over the pier, and the market is already buzzing.".into(),
            location_id: Some("harbor-market".into()),
            video_id: None,
            posted_at: ts(2025, 6, 3, 6, 40),
            likes: 48,
        },
        FeedPost {
            id: "post-302".into(),
            author: "kenji".into(),
            body: "Cut together yesterday's skate session.".into(),
            location_id: None,
            video_id: Some("vid-88".into()),
            posted_at: ts(2025, 6, 2, 20, 15),
            likes: 102,
        },
        FeedPost {
            id: "post-303".into(),
            author: "ana".into(),
            body: "Cedar Park picnic meetup this Saturday, all welcome.".into(),
            location_id: Some("cedar-park".into()),
            video_id: None,
            posted_at: ts(2025, 6, 1, 12, 0),
            likes: 23,
        },
    ]
}

pub fn video(id: &str) -> Option<VideoItem> {
    let videos = vec![
        VideoItem {
            id: "vid-88".into(),
            title: "Harbor line session".into(),
            author: "kenji".into(),
            stream_url: "https://cdn.wayfare.example/videos/vid-88.m3u8".into(),
            duration_secs: 94,
            posted_at: ts(2025, 6, 2, 20, 10),
        },
        VideoItem {
            id: "vid-91".into(),
            title: "Market walkthrough".into(),
            author: "marta".into(),
            stream_url: "https://cdn.wayfare.example/videos/vid-91.m3u8".into(),
            duration_secs: 211,
            posted_at: ts(2025, 5, 28, 8, 0),
        },
    ];
    videos.into_iter().find(|v| v.id == id)
}

pub fn wallet() -> WalletSnapshot {
    WalletSnapshot {
        balance_points: 1240,
        updated_at: ts(2025, 6, 3, 7, 0),
        transactions: vec![
            WalletTransaction {
                id: "txn-9001".into(),
                label: "Check-in bonus: Harbor Market".into(),
                amount_points: 50,
                posted_at: ts(2025, 6, 2, 10, 12),
            },
            WalletTransaction {
                id: "txn-9002".into(),
                label: "Redeemed: espresso at Mill Roasters".into(),
                amount_points: -200,
                posted_at: ts(2025, 5, 30, 15, 45),
            },
            WalletTransaction {
                id: "txn-9003".into(),
                label: "Referral reward".into(),
                amount_points: 500,
                posted_at: ts(2025, 5, 22, 11, 30),
            },
        ],
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: "user-demo".into(),
        display_name: "Demo Wanderer".into(),
        handle: "@wanderer".into(),
        bio: "Collecting corners of the city.".into(),
        joined_at: ts(2024, 11, 12, 0, 0),
        followers: 57,
        following: 83,
    }
}

pub fn otp_challenge() -> OtpChallenge {
    OtpChallenge {
        challenge_id: "mock-challenge-1".into(),
        sent_to: "d***@wayfare.example".into(),
    }
}

pub fn session() -> AuthSession {
    AuthSession {
        token: "mock-session-token".into(),
        user: profile(),
    }
}
