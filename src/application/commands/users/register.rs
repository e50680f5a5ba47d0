use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    #[tracing::instrument(skip_all)]
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let user = self
            .user_repo
            .insert(NewUser {
                username,
                password_hash: PasswordHash::new(hashed)?,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(user = %user.id, "user registered");
        Ok(user.into())
    }
}
