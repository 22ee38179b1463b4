use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            r#"INSERT INTO waitlist (first_name, last_name, email, phone, year_of_study, school)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, first_name, last_name, email, phone, year_of_study, school, created_at"#,
        )
        .bind(&entry.first_name)
        .bind(&entry.last_name)
        .bind(&entry.email)
        .bind(&entry.phone)
        .bind(&entry.year_of_study)
        .bind(&entry.school)
        .fetch_one(self.pool())
        .await?;

        Ok(rec)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM waitlist"#)
            .fetch_one(self.pool())
            .await?;

        Ok(count)
    }
}
