//! Recipient DTOs
//!
//! Data transfer objects for recipient endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::Recipient;

/// DTO for creating a recipient
///
/// Any `id` sent by the client is ignored; the provider assigns it.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipientDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub image_src: Option<String>,

    #[serde(default)]
    pub number_of_friends: u32,
}

impl From<CreateRecipientDto> for Recipient {
    fn from(dto: CreateRecipientDto) -> Self {
        Self {
            id: None,
            name: dto.name,
            bio: dto.bio,
            image_src: dto.image_src,
            number_of_friends: dto.number_of_friends,
        }
    }
}

/// Recipient response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResponseDto {
    pub id: Option<String>,
    pub name: String,
    pub bio: Option<String>,
    pub image_src: Option<String>,
    pub number_of_friends: u32,
}

impl From<Recipient> for RecipientResponseDto {
    fn from(recipient: Recipient) -> Self {
        Self {
            id: recipient.id.map(|id| id.into_inner()),
            name: recipient.name,
            bio: recipient.bio,
            image_src: recipient.image_src,
            number_of_friends: recipient.number_of_friends,
        }
    }
}
