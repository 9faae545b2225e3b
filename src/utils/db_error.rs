//! Helpers for classifying database errors.

/// Name Postgres gives the primary key constraint of the `url` table.
pub const URL_PRIMARY_KEY: &str = "url_pkey";

/// Returns `true` if `e` is a unique violation on the short code column.
pub fn is_unique_violation_on_short_url(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(URL_PRIMARY_KEY))
}
