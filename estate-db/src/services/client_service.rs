//! Client Service

use chrono::Utc;
use estate_core::logging::operations;
use estate_core::{
    Client, ClientFilter, ClientInput, ClientType, RecordId, ServiceError, ServiceResult,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::repos::Database;
use crate::store::Store;

/// Client Service
pub struct ClientService {
    db: Arc<Database>,
}

impl ClientService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Client>> {
        Ok(self.db.clients.find_all().await?)
    }

    pub async fn get(&self, id: RecordId) -> ServiceResult<Option<Client>> {
        Ok(self.db.clients.find_by_id(id).await?)
    }

    pub async fn list_by_type(&self, client_type: ClientType) -> ServiceResult<Vec<Client>> {
        Ok(self
            .db
            .clients
            .find_where(&|c: &Client| c.client_type == client_type)
            .await?)
    }

    /// Case-insensitive substring match on first name, last name, email or phone
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<Client>> {
        let needle = query.trim().to_lowercase();
        debug!(query = %needle, operation = operations::SEARCH, "Searching clients");
        Ok(self
            .db
            .clients
            .find_where(&|c: &Client| {
                c.first_name.to_lowercase().contains(&needle)
                    || c.last_name.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
                    || c.phone.contains(&needle)
            })
            .await?)
    }

    pub async fn advanced_search(&self, filter: &ClientFilter) -> ServiceResult<Vec<Client>> {
        Ok(self
            .db
            .clients
            .find_where(&|c: &Client| filter.matches(c))
            .await?)
    }

    pub async fn create(&self, input: ClientInput) -> ServiceResult<Client> {
        validate(&input)?;

        let now = Utc::now();
        let client = Client {
            id: 0,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            client_type: input.client_type,
            status: input.status,
            created_at: now,
            updated_at: now,
        };

        let saved = self.db.clients.save(client).await?;
        info!(client_id = saved.id, operation = operations::CREATE, "Client created");
        Ok(saved)
    }

    /// Replace every client field; `None` if the client does not exist
    pub async fn update(&self, id: RecordId, input: ClientInput) -> ServiceResult<Option<Client>> {
        validate(&input)?;
        let Some(mut client) = self.db.clients.find_by_id(id).await? else {
            return Ok(None);
        };

        client.first_name = input.first_name;
        client.last_name = input.last_name;
        client.email = input.email;
        client.phone = input.phone;
        client.address = input.address;
        client.client_type = input.client_type;
        client.status = input.status;

        let saved = self.db.clients.save(client).await?;
        info!(client_id = id, operation = operations::UPDATE, "Client updated");
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        let deleted = self.db.clients.delete_by_id(id).await?;
        if deleted {
            info!(client_id = id, operation = operations::DELETE, "Client deleted");
        }
        Ok(deleted)
    }
}

fn validate(input: &ClientInput) -> ServiceResult<()> {
    if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
        return Err(ServiceError::Validation("first and last name are required".to_string()));
    }
    if !input.email.contains('@') {
        return Err(ServiceError::Validation(format!("invalid email: {}", input.email)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::ClientStatus;

    fn input(first: &str, last: &str, email: &str, client_type: ClientType) -> ClientInput {
        ClientInput {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: "090-1234-5678".to_string(),
            address: None,
            client_type,
            status: ClientStatus::Active,
        }
    }

    async fn seeded() -> ClientService {
        let service = ClientService::new(Arc::new(Database::new()));
        service
            .create(input("Taro", "Tanaka", "tanaka@example.com", ClientType::Buyer))
            .await
            .unwrap();
        service
            .create(input("Hanako", "Sato", "sato@example.com", ClientType::Seller))
            .await
            .unwrap();
        service
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let service = seeded().await;
        let err = service
            .create(input("Jiro", "Tanaka", "tanaka@example.com", ClientType::Tenant))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_create_validation() {
        let service = seeded().await;
        let err = service
            .create(input("Jiro", "Yamada", "not-an-email", ClientType::Tenant))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_search() {
        let service = seeded().await;
        assert_eq!(service.search("TANAKA").await.unwrap().len(), 1);
        assert_eq!(service.search("example.com").await.unwrap().len(), 2);
        assert_eq!(service.search("090-1234").await.unwrap().len(), 2);
        assert!(service.search("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_advanced_search() {
        let service = seeded().await;
        let filter = ClientFilter {
            name: Some("hana".to_string()),
            client_type: Some(ClientType::Seller),
            ..Default::default()
        };
        let hits = service.advanced_search(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "sato@example.com");

        let filter = ClientFilter {
            client_type: Some(ClientType::Landlord),
            ..Default::default()
        };
        assert!(service.advanced_search(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let service = seeded().await;
        let mut replacement = input("Taro", "Tanaka", "taro@example.com", ClientType::Landlord);
        replacement.address = Some("1-1-1 Nishi-Shinjuku".to_string());

        let updated = service.update(1, replacement).await.unwrap().unwrap();
        assert_eq!(updated.email, "taro@example.com");
        assert_eq!(updated.client_type, ClientType::Landlord);
        assert_eq!(service.list_by_type(ClientType::Buyer).await.unwrap().len(), 0);

        // old email is free again, the other client's is not
        service
            .create(input("Ken", "Ito", "tanaka@example.com", ClientType::Buyer))
            .await
            .unwrap();
        let err = service
            .update(1, input("Taro", "Tanaka", "sato@example.com", ClientType::Buyer))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));

        assert!(service
            .update(42, input("A", "B", "ab@example.com", ClientType::Buyer))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let service = seeded().await;
        assert!(service.delete(2).await.unwrap());
        assert!(!service.delete(2).await.unwrap());
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }
}
