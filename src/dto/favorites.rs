use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppError, models::Favorite};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct UsernameQuery {
    /// Username of the favorites owner
    pub username: Option<String>,
}

impl UsernameQuery {
    pub fn require(self) -> Result<String, AppError> {
        require_username(self.username)
    }
}

impl AddFavoriteRequest {
    pub fn require(self) -> Result<String, AppError> {
        require_username(self.username)
    }
}

fn require_username(username: Option<String>) -> Result<String, AppError> {
    match username.map(|u| u.trim().to_string()) {
        Some(u) if !u.is_empty() => Ok(u),
        _ => Err(AppError::BadRequest("Username is required".into())),
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteList {
    #[schema(value_type = Vec<Favorite>)]
    pub items: Vec<Favorite>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_is_rejected() {
        let query = UsernameQuery {
            username: Some("   ".into()),
        };
        assert!(matches!(query.require(), Err(AppError::BadRequest(_))));
        let body = AddFavoriteRequest { username: None };
        assert!(matches!(body.require(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn username_is_trimmed() {
        let query = UsernameQuery {
            username: Some(" luke ".into()),
        };
        assert_eq!(query.require().unwrap(), "luke");
    }
}
