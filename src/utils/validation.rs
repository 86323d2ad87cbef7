use crate::utils::error::{Result, ShopEnvError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ShopEnvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShopEnvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShopEnvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Fails on the first id that was already seen.
pub fn validate_unique_ids<I>(table: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = u32>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ShopEnvError::DuplicateIdError {
                table: table.to_string(),
                id,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "fixtures/env.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "  ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("members.username", "jdoe").is_ok());
        assert!(validate_non_empty_string("members.username", " \t").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("members", [1, 2, 3]).is_ok());

        let err = validate_unique_ids("users", [4, 5, 4]).unwrap_err();
        match err {
            ShopEnvError::DuplicateIdError { table, id } => {
                assert_eq!(table, "users");
                assert_eq!(id, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
