// SPDX-License-Identifier: MPL-2.0
//! Page views, one module per route table entry.
//!
//! Display pages are plain view functions over borrowed state. Pages with
//! form state (the auth sequence and the upload composer) follow the
//! State/Message/Event pattern and are wired up in `app::update`.

pub mod auth;
pub mod explore;
pub mod favourites;
pub mod home;
pub mod location_detail;
pub mod map_view;
pub mod not_found;
pub mod profile;
pub mod social;
pub mod social_upload;
pub mod video;
pub mod wallet;
