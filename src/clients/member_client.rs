use crate::member_actor::MemberError;
use crate::model::{Member, MemberCreate, MemberId, MemberUpdate};
use crate::store::{EntityClient, Filter, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Member store.
#[derive(Clone)]
pub struct MemberClient {
    inner: StoreClient<Member>,
}

impl MemberClient {
    pub fn new(inner: StoreClient<Member>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_member(&self, params: MemberCreate) -> Result<MemberId, MemberError> {
        debug!("Sending request");
        self.inner.save(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_member(
        &self,
        id: MemberId,
        update: MemberUpdate,
    ) -> Result<Member, MemberError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| Self::map_id_error(id, e))
    }

    /// Members whose name equals `name` exactly.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Member>, MemberError> {
        debug!("Sending request");
        let name = name.to_string();
        self.inner
            .find(Filter::new(move |member: &Member| member.name == name))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<Member> for MemberClient {
    type Error = MemberError;

    fn inner(&self) -> &StoreClient<Member> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.downcast::<MemberError>()
            .unwrap_or_else(|e| MemberError::ActorCommunication(e.to_string()))
    }

    fn not_found(id: MemberId) -> Self::Error {
        MemberError::NotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;
    use crate::store::mock::{create_mock_client, expect_save};

    #[tokio::test]
    async fn create_member_forwards_the_payload() {
        let (client, mut receiver) = create_mock_client::<Member>(10);
        let member_client = MemberClient::new(client);

        let task = tokio::spawn(async move {
            member_client
                .create_member(MemberCreate {
                    name: "kim".to_string(),
                    address: Address::new("Seoul", "Eunpyeong", "123-123"),
                })
                .await
        });

        let (params, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(params.name, "kim");
        responder.send(Ok(MemberId(4))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), MemberId(4));
    }

    #[tokio::test]
    async fn validation_errors_survive_the_round_trip() {
        let (client, mut receiver) = create_mock_client::<Member>(10);
        let member_client = MemberClient::new(client);

        let task = tokio::spawn(async move {
            member_client
                .create_member(MemberCreate {
                    name: String::new(),
                    address: Address::default(),
                })
                .await
        });

        let (_, responder) = expect_save(&mut receiver).await.unwrap();
        responder
            .send(Err(StoreError::Entity(Box::new(MemberError::Validation(
                "name must not be blank".to_string(),
            )))))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(MemberError::Validation("name must not be blank".to_string()))
        );
    }

    #[tokio::test]
    async fn missing_member_maps_to_not_found() {
        let mut mock = crate::store::mock::MockClient::<Member>::new();
        mock.expect_update(MemberId(9))
            .return_err(StoreError::NotFound("member_9".to_string()));

        let client = MemberClient::new(mock.client());
        let result = client.update_member(MemberId(9), MemberUpdate::default()).await;

        assert_eq!(result, Err(MemberError::NotFound(MemberId(9))));
        mock.verify();
    }
}
