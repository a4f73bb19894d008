//! Typed ID wrappers for compile-time type safety.
//!
//! The schema keys every table with a `SERIAL` integer; these wrappers keep a
//! card id from being passed where a user id is expected.

use serde::{Deserialize, Serialize};
use sqlx::{encode::IsNull, error::BoxDynError, Database, Decode, Encode, Type};
use std::fmt;
use std::str::FromStr;

/// Macro to generate typed ID wrappers with common trait implementations.
macro_rules! typed_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl<'r, DB: Database> Decode<'r, DB> for $name
        where
            i32: Decode<'r, DB>,
        {
            fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
                i32::decode(value).map(Self)
            }
        }

        impl<'q, DB: Database> Encode<'q, DB> for $name
        where
            i32: Encode<'q, DB>,
        {
            fn encode_by_ref(
                &self,
                buf: &mut <DB as Database>::ArgumentBuffer<'q>,
            ) -> Result<IsNull, BoxDynError> {
                self.0.encode_by_ref(buf)
            }
        }

        impl<DB: Database> Type<DB> for $name
        where
            i32: Type<DB>,
        {
            fn type_info() -> <DB as Database>::TypeInfo {
                <i32 as Type<DB>>::type_info()
            }

            fn compatible(ty: &<DB as Database>::TypeInfo) -> bool {
                <i32 as Type<DB>>::compatible(ty)
            }
        }
    };
}

typed_id!(UserId, "Identifier of a row in the `user` table.");
typed_id!(RoleId, "Identifier of a row in the `role` table.");
typed_id!(CardId, "Identifier of a row in the `card_data` table.");
typed_id!(GraphTypeId, "Identifier of a row in the `graph_type` table.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_integer_ids() {
        let id: UserId = " 42 ".parse().expect("parse user id");
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<CardId>().is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_value(CardId::new(7)).expect("serialize");
        assert_eq!(json, serde_json::json!(7));
        let back: CardId = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, CardId::new(7));
    }
}
