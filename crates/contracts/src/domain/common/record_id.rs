use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов записей
pub trait RecordId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (ключ списка и выбора)
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl RecordId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>().map_err(|e| format!("Invalid u32: {}", e))
    }
}

/// Declares a `u32` newtype id implementing [`RecordId`].
#[macro_export]
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl $crate::domain::common::RecordId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.parse::<u32>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    record_id!(SampleId);

    #[test]
    fn test_u32_round_trip() {
        assert_eq!(42u32.as_string(), "42");
        assert_eq!(u32::from_string("42"), Ok(42));
        assert!(u32::from_string("x").is_err());
    }

    #[test]
    fn test_newtype_id() {
        let id = SampleId(7);
        assert_eq!(id.as_string(), "7");
        assert_eq!(SampleId::from_string("7"), Ok(id));
        assert!(SampleId::from_string("").unwrap_err().contains("SampleId"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
