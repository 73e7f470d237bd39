//! Repository layer over the migrated schema

pub mod fixtures;
pub mod sites;
pub mod users;

pub use fixtures::FixtureRepo;
pub use sites::{Site, SiteRepo};
pub use users::{NewUser, User, UserRepo};
