//! Arcjet tools module.
//!
//! Read-only tools backed by the Arcjet API:
//! - `list_teams`: Teams visible to the configured session
//! - `list_sites`: Sites belonging to one team
//!
//! Each tool owns its parameters, messages and route.

pub mod common;
pub mod list_sites;
pub mod list_teams;

pub use list_sites::{ListSitesParams, ListSitesTool};
pub use list_teams::{ListTeamsParams, ListTeamsTool};
