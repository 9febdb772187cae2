//! Column checks shared by the entity save hooks.

use sea_orm::{ActiveValue, DbErr};

/// Rejects a string column assigned an empty value, or left unset on insert.
pub(crate) fn required_string(
    field: &'static str,
    value: &ActiveValue<String>,
    insert: bool,
) -> Result<(), DbErr> {
    match value {
        ActiveValue::Set(v) if v.is_empty() => Err(must_be_set(field)),
        ActiveValue::NotSet if insert => Err(must_be_set(field)),
        _ => Ok(()),
    }
}

/// Rejects a foreign key column assigned zero, or left unset on insert.
pub(crate) fn required_id(
    field: &'static str,
    value: &ActiveValue<i32>,
    insert: bool,
) -> Result<(), DbErr> {
    match value {
        ActiveValue::Set(v) if *v == 0 => Err(must_be_set(field)),
        ActiveValue::NotSet if insert => Err(must_be_set(field)),
        _ => Ok(()),
    }
}

fn must_be_set(field: &'static str) -> DbErr {
    DbErr::Custom(format!("{field} must be set"))
}
