/// Validates a role-style identifier.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', '_', or (optionally) '.'
pub fn validate_identifier(id: &str, allow_dots: bool) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || (allow_dots && c == '.'))
}

/// Validates a folder token used verbatim as a path component and inside
/// generated file names.
///
/// Stricter than `validate_identifier`: dots are never allowed, so a token can
/// neither hide a file (`.foo`) nor smuggle an extension into `<prefix>_<shot>_<role>.<ext>`.
pub fn validate_folder_token(token: &str) -> bool {
    if token.is_empty() || token.contains('\0') {
        return false;
    }
    validate_identifier(token, false)
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $validate:path, $err_variant:path) => {
        impl $name {
            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            fn check(id: &str) -> Result<(), $crate::domain::AppError> {
                if $validate(id) { Ok(()) } else { Err($err_variant(id.to_string())) }
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for String {
            fn from(val: $name) -> Self {
                val.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::new(&s).map_err(serde::de::Error::custom)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }
    };
}
