/// All primary keys are UUIDs generated at insert time.
pub type DbId = uuid::Uuid;
