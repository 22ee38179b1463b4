//! Headless view-state client for the waitlist site.
//!
//! Models the single-page site as a fixed set of pages plus a signup form
//! draft, and talks to the waitlist service through [`WaitlistApi`].

pub mod api;
pub mod rotating;
pub mod view_state;

pub use api::{ClientError, HttpWaitlistApi, JoinResponse, WaitlistApi};
pub use rotating::RotatingWords;
pub use view_state::{FormField, Page, Screen, Section, SubmitStatus, ViewState, WaitlistForm};
