use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::MemoryPersistence,
    app_error::AppResult,
    domain::entities::user::{NewUser, User},
    use_cases::user::UserRepo,
};

#[async_trait]
impl UserRepo for MemoryPersistence {
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let user = user.into_user(Uuid::new_v4());
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }
}
