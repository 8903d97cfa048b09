//! Typed identifier newtypes backed by storage-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw key handed out by the storage engine.
            #[must_use]
            pub fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the inner key.
            #[must_use]
            pub fn as_raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Home`](crate::home::Home).
    HomeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = HomeId::from_raw(17);
        let parsed: HomeId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        assert!(HomeId::from_str("not-a-number").is_err());
    }

    #[test]
    fn should_wrap_raw_key_when_using_from_raw() {
        assert_eq!(HomeId::from_raw(3).as_raw(), 3);
    }
}
