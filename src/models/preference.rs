use sqlx::prelude::FromRow;

/// One stored key-value preference.
#[derive(Debug, Clone, FromRow)]
pub struct PreferenceRecord {
    pub namespace: String,
    pub key: String,
    pub value: String,
    pub updated_at: String,
}
