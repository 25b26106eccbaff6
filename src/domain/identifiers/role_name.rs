use super::validation::validate_folder_token;
use crate::domain::AppError;
use crate::impl_validated_id;

/// Name of the synthetic aggregate role.
pub const ASSEMBLY_ROLE: &str = "ASSEMBLY";

/// A validated role (department) name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, or `_`
/// - No path traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleName(String);

impl_validated_id!(RoleName, validate_folder_token, AppError::InvalidRoleName);

impl RoleName {
    /// Validate and create a new role name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        Self::check(name)?;
        Ok(Self(name.to_string()))
    }

    /// The synthetic `ASSEMBLY` role.
    pub fn assembly() -> Self {
        Self(ASSEMBLY_ROLE.to_string())
    }

    pub fn is_assembly(&self) -> bool {
        self.0 == ASSEMBLY_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_role_names() {
        assert!(RoleName::new("LAYOUT").is_ok());
        assert!(RoleName::new("look-dev").is_ok());
        assert!(RoleName::new("FX_2").is_ok());
    }

    #[test]
    fn invalid_role_names() {
        assert!(RoleName::new("").is_err());
        assert!(RoleName::new("a/b").is_err());
        assert!(RoleName::new("..").is_err());
        assert!(RoleName::new("has space").is_err());
    }

    #[test]
    fn assembly_is_detected_by_exact_name() {
        assert!(RoleName::assembly().is_assembly());
        assert!(RoleName::new("ASSEMBLY").unwrap().is_assembly());
        assert!(!RoleName::new("Assembly").unwrap().is_assembly());
    }

    #[test]
    fn deserializes_with_validation() {
        #[derive(serde::Deserialize)]
        struct Holder {
            role: RoleName,
        }
        let ok: Holder = toml::from_str("role = \"LIGHTING\"").unwrap();
        assert_eq!(ok.role.as_str(), "LIGHTING");
        assert!(toml::from_str::<Holder>("role = \"bad role\"").is_err());
    }
}
