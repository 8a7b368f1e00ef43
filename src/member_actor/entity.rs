//! [`Entity`] implementation for [`Member`].
//!
//! Members have no dependencies and no custom actions. Names are unique across the store:
//! [`Entity::conflicts_with`] rejects a create or rename that would reuse one, and the
//! store actor runs that check and the write as one step.

use super::error::MemberError;
use crate::model::{Member, MemberCreate, MemberId, MemberUpdate};
use crate::store::Entity;
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), MemberError> {
    if name.trim().is_empty() {
        return Err(MemberError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}

#[async_trait]
impl Entity for Member {
    type Id = MemberId;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MemberError;

    fn from_create_params(id: MemberId, params: MemberCreate) -> Result<Self, MemberError> {
        validate_name(&params.name)?;
        Ok(Self {
            id,
            name: params.name,
            address: params.address,
        })
    }

    /// # Fields Updated
    /// - `name`: must not be blank
    /// - `address`: replaced as a whole
    async fn on_update(
        &mut self,
        update: MemberUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), MemberError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        Ok(())
    }

    fn conflicts_with(&self, other: &Self) -> Option<MemberError> {
        (self.name == other.name).then(|| MemberError::Duplicate(self.name.clone()))
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &Self::Context,
    ) -> Result<(), MemberError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;

    #[test]
    fn blank_names_are_rejected() {
        let params = MemberCreate {
            name: "  ".to_string(),
            address: Address::default(),
        };
        assert!(matches!(
            Member::from_create_params(MemberId(1), params),
            Err(MemberError::Validation(_))
        ));
    }

    #[test]
    fn same_name_conflicts() {
        let member = |id, name: &str| Member {
            id: MemberId(id),
            name: name.to_string(),
            address: Address::default(),
        };
        assert_eq!(
            member(1, "kim").conflicts_with(&member(2, "kim")),
            Some(MemberError::Duplicate("kim".to_string()))
        );
        assert_eq!(member(1, "kim").conflicts_with(&member(2, "lee")), None);
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let mut member = Member::from_create_params(
            MemberId(1),
            MemberCreate {
                name: "kim".to_string(),
                address: Address::new("Seoul", "Eunpyeong", "123-123"),
            },
        )
        .unwrap();

        let update = MemberUpdate {
            name: Some("lee".to_string()),
            address: None,
        };
        member.on_update(update, &()).await.unwrap();

        assert_eq!(member.name, "lee");
        assert_eq!(member.address.city, "Seoul");
    }
}
