use secrecy::SecretString;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: SecretString,
}

impl NewUser {
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
