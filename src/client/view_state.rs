use std::time::Duration;

use serde::Serialize;

use crate::{
    client::api::{ClientError, JoinResponse, WaitlistApi},
    entities::year_of_study::YearOfStudy,
};

/// School every signup from this site belongs to.
pub const SCHOOL: &str = "Boston College";

/// The site's top-level views. Only user navigation moves between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Landing,
    Connect,
    About,
    Support,
    Onboarding,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Landing,
        Page::Connect,
        Page::About,
        Page::Support,
        Page::Onboarding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Connect => "connect",
            Page::About => "about",
            Page::Support => "support",
            Page::Onboarding => "onboarding",
        }
    }

    /// Pages that embed the signup form and its status message.
    pub fn has_signup_form(&self) -> bool {
        matches!(self, Page::Connect | Page::Onboarding)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown page: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Editable text fields of the signup form. School is pinned and the year
/// is chosen from [`YearOfStudy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
}

/// In-memory draft of the signup form, posted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub year_of_study: YearOfStudy,
    pub school: String,
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            year_of_study: YearOfStudy::default(),
            school: SCHOOL.to_string(),
        }
    }
}

impl WaitlistForm {
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
        }
    }

    pub fn set_year(&mut self, year: YearOfStudy) {
        self.year_of_study = year;
    }
}

/// A section of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    WaitlistCount,
    SignupForm,
    About,
    Support,
}

/// What the current view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub page: Page,
    pub sections: Vec<Section>,
    /// Inline message under the form, if any.
    pub banner: Option<&'static str>,
    pub submit_enabled: bool,
    pub count: i64,
}

pub const SUCCESS_BANNER: &str = "You're on the waitlist! We'll be in touch soon.";

#[derive(Debug, Default)]
pub struct ViewState {
    page: Page,
    draft: WaitlistForm,
    status: SubmitStatus,
    submitting: bool,
    count: i64,
    last_error: Option<&'static str>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn draft(&self) -> &WaitlistForm {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = %self.page, to = %page, "Navigate");
        self.page = page;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn set_year(&mut self, year: YearOfStudy) {
        self.draft.set_year(year);
    }

    /// Starts a submission: resets the status, disables the submit control
    /// and returns the draft to send. `None` while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<WaitlistForm> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        self.last_error = None;
        Some(self.draft.clone())
    }

    /// Applies the outcome of a submission and re-enables the submit control.
    /// Success clears the draft; failure keeps it for a retry.
    pub fn finish_submit(&mut self, result: Result<JoinResponse, ClientError>) -> SubmitStatus {
        self.submitting = false;
        match result {
            Ok(resp) => {
                self.draft = WaitlistForm::default();
                self.count = resp.count;
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Waitlist submission failed");
                self.last_error = Some(err.user_message());
                self.status = SubmitStatus::Error;
            }
        }
        self.status
    }

    pub async fn submit(&mut self, api: &dyn WaitlistApi) -> SubmitStatus {
        let Some(form) = self.begin_submit() else {
            return self.status;
        };
        let result = api.join(&form).await;
        self.finish_submit(result)
    }

    /// Like [`ViewState::submit`], then moves to the connect page after
    /// `delay` if the submission succeeded.
    pub async fn submit_and_redirect(
        &mut self,
        api: &dyn WaitlistApi,
        delay: Duration,
    ) -> SubmitStatus {
        let status = self.submit(api).await;
        if status == SubmitStatus::Success {
            tokio::time::sleep(delay).await;
            self.navigate(Page::Connect);
        }
        status
    }

    /// Refreshes the displayed counter. Failures show zero.
    pub async fn refresh_count(&mut self, api: &dyn WaitlistApi) -> i64 {
        self.count = match api.count().await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(error = %err, "Could not load waitlist count");
                0
            }
        };
        self.count
    }

    pub fn render(&self) -> Screen {
        let sections = match self.page {
            Page::Landing => vec![Section::Hero, Section::WaitlistCount],
            Page::Connect => vec![Section::SignupForm, Section::WaitlistCount],
            Page::About => vec![Section::About],
            Page::Support => vec![Section::Support],
            Page::Onboarding => vec![Section::SignupForm],
        };

        let banner = if self.page.has_signup_form() {
            match self.status {
                SubmitStatus::Idle => None,
                SubmitStatus::Success => Some(SUCCESS_BANNER),
                SubmitStatus::Error => self.last_error,
            }
        } else {
            None
        };

        Screen {
            page: self.page,
            sections,
            banner,
            submit_enabled: !self.submitting,
            count: self.count,
        }
    }
}
