use std::sync::Arc;

use crate::{infra::config::AppConfig, use_cases::waitlist::WaitlistUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
}
