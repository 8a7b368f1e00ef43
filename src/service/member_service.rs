//! Member registration and lookup.
//!
//! Name uniqueness is enforced by the member store itself, so any number of
//! `MemberService` instances may register members concurrently.

use crate::clients::MemberClient;
use crate::error::ShopError;
use crate::model::{Address, Member, MemberCreate, MemberId, MemberUpdate};
use crate::store::EntityClient;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct MemberService {
    members: MemberClient,
}

impl MemberService {
    pub fn new(members: MemberClient) -> Self {
        Self { members }
    }

    /// Registers a member.
    ///
    /// # Errors
    /// - [`ShopError::DuplicateMember`] when another member already has `name`
    /// - [`ShopError::Invalid`] for a blank name
    #[instrument(skip(self, address))]
    pub async fn join(&self, name: &str, address: Address) -> Result<MemberId, ShopError> {
        let id = self
            .members
            .create_member(MemberCreate {
                name: name.to_string(),
                address,
            })
            .await?;
        info!(%id, "Member joined");
        Ok(id)
    }

    pub async fn find_members(&self) -> Result<Vec<Member>, ShopError> {
        Ok(self.members.find_all().await?)
    }

    pub async fn find_one(&self, id: MemberId) -> Result<Member, ShopError> {
        self.members
            .find_by_id(id)
            .await?
            .ok_or_else(|| ShopError::not_found("member", id))
    }

    /// Renames a member. The new name must be free; keeping one's own name is fine.
    #[instrument(skip(self))]
    pub async fn update(&self, id: MemberId, name: &str) -> Result<Member, ShopError> {
        let update = MemberUpdate {
            name: Some(name.to_string()),
            address: None,
        };
        Ok(self.members.update_member(id, update).await?)
    }
}
