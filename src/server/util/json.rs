use sea_orm::DbErr;
use serde::{de::DeserializeOwned, Serialize};

/// Decodes a JSON column into its domain type.
///
/// # Arguments
/// - `value` - Raw column value
/// - `column` - Column name, used in the error message
///
/// # Returns
/// - `Ok(T)` - Decoded value
/// - `Err(DbErr::Custom)` - Stored JSON does not match `T`
pub fn decode<T: DeserializeOwned>(value: serde_json::Value, column: &str) -> Result<T, DbErr> {
    serde_json::from_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to decode {} column: {}", column, e)))
}

/// Encodes a domain value for storage in a JSON column.
pub fn encode<T: Serialize>(value: &T, column: &str) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to encode {} column: {}", column, e)))
}
