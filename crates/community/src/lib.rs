//! `campushub-community` — resource models of the community platform.
//!
//! Five searchable resource kinds plus the user account record. Each kind
//! carries exactly one ownership attribute, exposed through the
//! [`campushub_auth::Owned`] seam so the authorization gate needs no
//! per-kind code.

pub mod classgroup;
pub mod event;
pub mod forum;
pub mod project;
pub mod team;
pub mod user;

pub use classgroup::ClassGroup;
pub use event::CommunityEvent;
pub use forum::ForumPost;
pub use project::Project;
pub use team::Team;
pub use user::UserAccount;
