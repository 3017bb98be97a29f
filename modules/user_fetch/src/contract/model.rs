/// A remote user as returned by the demo user service.
///
/// Field values are passed through exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: String,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Support metadata that accompanies every user response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Support {
    pub url: String,
    pub text: String,
}

/// Fully decoded response envelope. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub user: UserRecord,
    pub support: Support,
}
