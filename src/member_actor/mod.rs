//! # Member Store
//!
//! Keeps registered members. No dependencies (`Context = ()`) and no custom actions.
//!
//! ```rust
//! use shop_actors::member_actor;
//! use shop_actors::model::{Address, MemberCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = member_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = MemberCreate {
//!         name: "kim".to_string(),
//!         address: Address::new("Seoul", "Eunpyeong", "123-123"),
//!     };
//!     let id = client.create_member(params).await?;
//!     assert_eq!(id.to_string(), "member_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MemberClient;
use crate::model::Member;
use crate::store::StoreActor;

/// Creates a new Member store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Member>, MemberClient) {
    let (actor, inner) = StoreActor::new(buffer_size);
    (actor, MemberClient::new(inner))
}
