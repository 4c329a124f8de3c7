use tracing::{debug, info};

use crate::{
    accounts::dto::{Credentials, CredentialsQuery},
    error::{Operation, ServiceError},
    repo::{AccountStore, StoreError, User},
};

/// Both fields must be present and non-empty. No trimming or normalization.
pub(crate) fn require_credentials(q: CredentialsQuery) -> Result<Credentials, ServiceError> {
    match (q.username, q.password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            Ok(Credentials { username, password })
        }
        _ => Err(ServiceError::Validation),
    }
}

pub async fn register(store: &dyn AccountStore, creds: &Credentials) -> Result<User, ServiceError> {
    match store.insert_user(&creds.username, &creds.password).await {
        Ok(user) => {
            info!(user_id = user.id, username = %user.username, "user registered");
            Ok(user)
        }
        Err(StoreError::Duplicate) => Err(ServiceError::DuplicateUser),
        Err(e) => Err(ServiceError::storage(Operation::Registration)(e)),
    }
}

pub async fn verify(store: &dyn AccountStore, creds: &Credentials) -> Result<User, ServiceError> {
    let user = store
        .find_user_by_credentials(&creds.username, &creds.password)
        .await
        .map_err(ServiceError::storage(Operation::Verification))?
        .ok_or(ServiceError::InvalidCredentials)?;
    debug!(user_id = user.id, "credentials verified");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MemoryAccountStore;

    fn query(username: Option<&str>, password: Option<&str>) -> CredentialsQuery {
        CredentialsQuery {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn presence_check_rejects_missing_or_empty() {
        for q in [
            query(None, Some("pw")),
            query(Some("alice"), None),
            query(Some(""), Some("pw")),
            query(Some("alice"), Some("")),
            query(None, None),
        ] {
            assert!(matches!(
                require_credentials(q),
                Err(ServiceError::Validation)
            ));
        }
    }

    #[test]
    fn presence_check_keeps_whitespace() {
        let creds = require_credentials(query(Some(" alice "), Some(" pw"))).unwrap();
        assert_eq!(creds.username, " alice ");
        assert_eq!(creds.password, " pw");
    }

    #[tokio::test]
    async fn register_then_verify() {
        let store = MemoryAccountStore::new();
        let creds = require_credentials(query(Some("alice"), Some("pw"))).unwrap();
        register(&store, &creds).await.unwrap();

        assert!(verify(&store, &creds).await.is_ok());
        let wrong = require_credentials(query(Some("alice"), Some("PW"))).unwrap();
        assert!(matches!(
            verify(&store, &wrong).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn duplicate_maps_to_conflict() {
        let store = MemoryAccountStore::new();
        let creds = require_credentials(query(Some("alice"), Some("pw"))).unwrap();
        register(&store, &creds).await.unwrap();
        assert!(matches!(
            register(&store, &creds).await,
            Err(ServiceError::DuplicateUser)
        ));
    }

    #[tokio::test]
    async fn store_fault_maps_to_storage_error() {
        let store = MemoryAccountStore::new();
        store.set_failing(true);
        let creds = require_credentials(query(Some("alice"), Some("pw"))).unwrap();
        assert!(matches!(
            register(&store, &creds).await,
            Err(ServiceError::Storage {
                op: Operation::Registration,
                ..
            })
        ));
        assert!(matches!(
            verify(&store, &creds).await,
            Err(ServiceError::Storage {
                op: Operation::Verification,
                ..
            })
        ));
    }
}
