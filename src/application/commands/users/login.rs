use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let token = self
            .token_manager
            .issue(TokenSubject {
                user_id: user.id,
                username: user.username.to_string(),
            })
            .await?;

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }
}
