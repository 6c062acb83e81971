/// All database primary keys are UUIDs generated by PostgreSQL.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (start/end of an education or experience).
pub type Date = chrono::NaiveDate;

/// Subject id issued by the identity provider. The tenancy key for every table.
pub type OwnerId = String;
