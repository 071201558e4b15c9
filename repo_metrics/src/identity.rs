use strum_macros::{Display, EnumString};

use crate::api::{Client, Contributor, Result, UserProfile};

/// How much self-identifying information a user publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DisclosureLevel {
    Low,
    High,
}

impl UserProfile {
    /// `Low` only if location, company, twitter handle, blog and email are all empty or absent.
    pub fn disclosure_level(&self) -> DisclosureLevel {
        let fields = [
            &self.location,
            &self.company,
            &self.twitter_username,
            &self.blog,
            &self.email,
        ];
        let disclosed = fields
            .iter()
            .any(|field| field.as_deref().map_or(false, |value| !value.is_empty()));
        if disclosed {
            DisclosureLevel::High
        } else {
            DisclosureLevel::Low
        }
    }
}

pub async fn user_disclosure_level<CLIENT>(client: &CLIENT, login: &str) -> Result<DisclosureLevel>
where
    CLIENT: Client,
{
    client.user(login).await.map(|profile| profile.disclosure_level())
}

/// Anonymous contributors have no profile to disclose anything in.
pub async fn contributor_disclosure_level<CLIENT>(
    client: &CLIENT,
    contributor: &Contributor,
) -> Result<DisclosureLevel>
where
    CLIENT: Client,
{
    match contributor {
        Contributor::User(login) => user_disclosure_level(client, login).await,
        Contributor::Anonymous => Ok(DisclosureLevel::Low),
    }
}
