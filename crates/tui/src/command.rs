//! Side effects requested by the update path.
//!
//! A [`Command`] is plain data so the update path stays testable without a
//! backend. The runtime turns each one into exactly one request and feeds
//! the outcome back as a [`Msg`].

use mazzura_client::ApiClient;
use mazzura_core::{OutfitRequest, Profile, WardrobeItem};
use tracing::{Instrument, info_span};

use crate::message::Msg;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CheckHealth,
    LoadChallenges,
    SaveProfile(Profile),
    FetchProfile(String),
    AddItem(WardrobeItem),
    ListWardrobe(String),
    /// List the owner's wardrobe after an item was added for them.
    RefreshWardrobe(String),
    GenerateOutfit(OutfitRequest),
}

impl Command {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CheckHealth => "check_health",
            Self::LoadChallenges => "load_challenges",
            Self::SaveProfile(_) => "save_profile",
            Self::FetchProfile(_) => "fetch_profile",
            Self::AddItem(_) => "add_item",
            Self::ListWardrobe(_) => "list_wardrobe",
            Self::RefreshWardrobe(_) => "refresh_wardrobe",
            Self::GenerateOutfit(_) => "generate_outfit",
        }
    }

    /// Perform the request and describe its outcome.
    pub async fn execute(self, client: &ApiClient) -> Msg {
        let span = info_span!("command", name = self.name());
        async move {
            match self {
                Self::CheckHealth => Msg::HealthChecked(client.health().await),
                Self::LoadChallenges => Msg::ChallengesLoaded(client.challenges().await),
                Self::SaveProfile(payload) => {
                    let result = client.save_profile(&payload).await;
                    Msg::ProfileSaved { payload, result }
                }
                Self::FetchProfile(email) => Msg::ProfileFetched(client.fetch_profile(&email).await),
                Self::AddItem(item) => {
                    let result = client.add_item(&item).await;
                    Msg::ItemAdded {
                        owner: item.owner_email,
                        result,
                    }
                }
                Self::ListWardrobe(owner) => {
                    Msg::WardrobeListed(client.list_wardrobe(&owner).await)
                }
                Self::RefreshWardrobe(owner) => {
                    let result = client.list_wardrobe(&owner).await;
                    Msg::WardrobeRefreshed { owner, result }
                }
                Self::GenerateOutfit(request) => {
                    Msg::OutfitGenerated(client.generate_outfit(&request).await)
                }
            }
        }
        .instrument(span)
        .await
    }
}
