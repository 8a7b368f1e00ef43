//! Members and their postal address.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(pub u32);

impl From<u32> for MemberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "member_{}", self.0)
    }
}

/// Postal address value object. Copied, never shared, between members and deliveries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            zipcode: zipcode.into(),
        }
    }
}

/// A registered customer.
///
/// Orders point at members by [`MemberId`]; a member's orders are found with an
/// `OrderSearch` on the order store rather than through a back-reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub address: Address,
}

/// Payload for registering a member.
#[derive(Debug, Clone)]
pub struct MemberCreate {
    pub name: String,
    pub address: Address,
}

/// Payload for editing a member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub address: Option<Address>,
}
