//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserProfile, UserRepository};
use crate::domain::DomainError;

#[derive(Debug)]
struct Tables {
    users: BTreeMap<UserId, User>,
    /// Index for login -> user ID lookup
    login_index: HashMap<String, UserId>,
    /// Ids are never reused, like a database sequence
    next_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            login_index: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;

        Ok(tables
            .login_index
            .get(login)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().map(User::profile).collect())
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.login_index.contains_key(&user.login) {
            return Err(DomainError::conflict(format!(
                "Login '{}' already exists",
                user.login
            )));
        }

        let id = UserId::new(tables.next_id);
        tables.next_id += 1;

        let created = User::new(id, user.login, user.password_hash, user.name);
        tables.login_index.insert(created.login().to_string(), id);
        tables.users.insert(id, created.clone());

        Ok(created)
    }

    async fn update_name_by_login(
        &self,
        login: &str,
        name: &str,
    ) -> Result<UserProfile, DomainError> {
        let mut tables = self.tables.write().await;

        let id = *tables
            .login_index
            .get(login)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", login)))?;

        let user = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| DomainError::internal(format!("Login index out of sync for '{}'", login)))?;

        user.set_name(name);
        Ok(user.profile())
    }

    async fn delete_by_login(&self, login: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        match tables.login_index.remove(login) {
            Some(id) => {
                tables.users.remove(&id);
                Ok(())
            }
            None => Err(DomainError::not_found(format!("User '{}' not found", login))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(login: &str, name: Option<&str>) -> NewUser {
        NewUser {
            login: login.to_string(),
            password_hash: "hashed_password".to_string(),
            name: name.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();

        let created = repo.insert(new_user("alice", Some("Alice"))).await.unwrap();
        assert_eq!(created.id().value(), 1);

        let retrieved = repo.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(retrieved.name(), Some("Alice"));
        assert_eq!(retrieved.password_hash(), "hashed_password");

        let not_found = repo.find_by_login("nonexistent").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_login_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();

        repo.insert(new_user("alice", None)).await.unwrap();

        assert!(repo.find_by_login("Alice").await.unwrap().is_none());
        assert!(repo.insert(new_user("Alice", None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_login() {
        let repo = InMemoryUserRepository::new();

        repo.insert(new_user("alice", Some("Alice"))).await.unwrap();

        let result = repo.insert(new_user("alice", Some("Other"))).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        let original = repo.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(original.name(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_update_name() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", Some("Alice"))).await.unwrap();

        let updated = repo.update_name_by_login("alice", "Alicia").await.unwrap();
        assert_eq!(updated.name.as_deref(), Some("Alicia"));
        assert_eq!(updated.login, "alice");

        let retrieved = repo.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(retrieved.name(), Some("Alicia"));
    }

    #[tokio::test]
    async fn test_update_missing_does_not_create() {
        let repo = InMemoryUserRepository::new();

        let result = repo.update_name_by_login("ghost", "Ghost").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", None)).await.unwrap();

        repo.delete_by_login("alice").await.unwrap();
        assert!(repo.find_by_login("alice").await.unwrap().is_none());

        let again = repo.delete_by_login("alice").await;
        assert!(matches!(again, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryUserRepository::new();

        repo.insert(new_user("zed", None)).await.unwrap();
        repo.insert(new_user("amy", None)).await.unwrap();

        let all = repo.list().await.unwrap();
        let logins: Vec<&str> = all.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["zed", "amy"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryUserRepository::new();

        repo.insert(new_user("alice", None)).await.unwrap();
        repo.delete_by_login("alice").await.unwrap();

        let next = repo.insert(new_user("bob", None)).await.unwrap();
        assert_eq!(next.id().value(), 2);
    }
}
