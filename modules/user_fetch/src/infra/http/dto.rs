//! Wire shapes of the user service. Field names follow the remote JSON;
//! conversion into contract models renames them.

use serde::Deserialize;

use crate::contract::model::{Support, UserRecord, UserResponse};

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponseDto {
    pub data: UserDataDto,
    pub support: SupportDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDataDto {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupportDto {
    pub url: String,
    pub text: String,
}

/// Body the service may send with a non-2xx status. Diagnostic only.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessageDto {
    pub error: String,
}

impl From<UserResponseDto> for UserResponse {
    fn from(dto: UserResponseDto) -> Self {
        Self {
            user: dto.data.into(),
            support: dto.support.into(),
        }
    }
}

impl From<UserDataDto> for UserRecord {
    fn from(dto: UserDataDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            avatar_url: dto.avatar,
        }
    }
}

impl From<SupportDto> for Support {
    fn from(dto: SupportDto) -> Self {
        Self {
            url: dto.url,
            text: dto.text,
        }
    }
}
