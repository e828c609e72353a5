pub trait Identifier: Sized {
    /// Create a new (random) identifier
    fn new() -> Self;
}

#[macro_export]
macro_rules! identifier {
    ($id_name: ident) => {
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, Clone, Copy, Hash)]
        pub struct $id_name(pub uuid::Uuid);

        impl $crate::util::Identifier for $id_name {
            fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl std::fmt::Display for $id_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $id_name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(
                    <uuid::Uuid as std::str::FromStr>::from_str(s)
                        .map_err(|_error| $crate::error::Error::InvalidUuid)?,
                ))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Identifier;
    use std::str::FromStr;

    identifier!(TestId);

    #[test]
    fn round_trips_through_a_string() {
        let id = TestId::new();
        let parsed = TestId::from_str(&id.to_string()).unwrap();

        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_malformed_uuids() {
        assert!(TestId::from_str("not-a-uuid").is_err());
    }
}
