//! Options fixed when a cursor is created and inherited by every cursor derived from it.

use std::str::FromStr;

use derive_more::{Display, IsVariant};

use crate::util::error::InvalidType;

/// How the elements behind a cursor are linked, which decides whether it can move backwards.
#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum LinkType {
    /// Forward links only: no `previous`, `start` or `end`.
    #[display("single")]
    Single,
    /// Links in both directions.
    #[default]
    #[display("double")]
    Double,
}

impl FromStr for LinkType {
    type Err = InvalidType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "singly" => Ok(LinkType::Single),
            "double" | "doubly" => Ok(LinkType::Double),
            _ => Err(InvalidType {
                found: s.to_owned(),
            }),
        }
    }
}

/// The configuration of a cursor. The default is a doubly linked, circular list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    pub link_type: LinkType,
    /// When set, traversal stops at either end of the list instead of wrapping around.
    pub finite: bool,
}

impl Config {
    pub const fn new() -> Config {
        Config {
            link_type: LinkType::Double,
            finite: false,
        }
    }

    pub const fn with_link_type(self, link_type: LinkType) -> Config {
        Config { link_type, ..self }
    }

    pub const fn single(self) -> Config {
        self.with_link_type(LinkType::Single)
    }

    pub const fn double(self) -> Config {
        self.with_link_type(LinkType::Double)
    }

    pub const fn finite(self, finite: bool) -> Config {
        Config { finite, ..self }
    }

    /// Builds a configuration from a textual link type, such as one read from user input.
    pub fn parse(link_type: &str, finite: bool) -> Result<Config, InvalidType> {
        Ok(Config::new().with_link_type(link_type.parse()?).finite(finite))
    }
}
