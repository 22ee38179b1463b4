use crate::{
    app_error::{AppError, AppResult},
    entities::waitlist_entry::{NewWaitlistEntry, WaitlistSubmission},
};

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Names of required fields that are absent or empty, in form order.
/// `phone` is optional and never reported.
pub fn missing_required_fields(submission: &WaitlistSubmission) -> Vec<&'static str> {
    [
        ("first_name", &submission.first_name),
        ("last_name", &submission.last_name),
        ("email", &submission.email),
        ("year_of_study", &submission.year_of_study),
        ("school", &submission.school),
    ]
    .into_iter()
    .filter(|(_, value)| !is_present(value))
    .map(|(name, _)| name)
    .collect()
}

/// Checks presence of the required fields and produces an insertable entry.
///
/// Values are taken as-is: no trimming, no email format check and no check of
/// `year_of_study` against the known years. An empty phone becomes `None`.
pub fn validate_submission(submission: WaitlistSubmission) -> AppResult<NewWaitlistEntry> {
    let missing = missing_required_fields(&submission);
    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }

    let WaitlistSubmission {
        first_name,
        last_name,
        email,
        phone,
        year_of_study,
        school,
    } = submission;

    Ok(NewWaitlistEntry {
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone: phone.filter(|p| !p.is_empty()),
        year_of_study: year_of_study.unwrap_or_default(),
        school: school.unwrap_or_default(),
    })
}
