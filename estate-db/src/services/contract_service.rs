//! Contract Service
//!
//! Contracts reference a property and a client; both must exist when the
//! contract is written. Reads are returned as [`ContractView`]s carrying the
//! property name and the client's full name.

use chrono::{DateTime, Utc};
use estate_core::logging::operations;
use estate_core::{
    Contract, ContractInput, ContractStatus, ContractType, ContractView, RecordId, ServiceError,
    ServiceResult,
};
use std::sync::Arc;
use tracing::info;

use crate::repos::Database;
use crate::store::Store;

/// Contract Service
pub struct ContractService {
    db: Arc<Database>,
}

impl ContractService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<ContractView>> {
        self.list_where(|_| true).await
    }

    pub async fn get(&self, id: RecordId) -> ServiceResult<Option<ContractView>> {
        match self.db.contracts.find_by_id(id).await? {
            Some(contract) => Ok(Some(self.to_view(contract).await?)),
            None => Ok(None),
        }
    }

    pub async fn list_by_type(
        &self,
        contract_type: ContractType,
    ) -> ServiceResult<Vec<ContractView>> {
        self.list_where(move |c| c.contract_type == contract_type).await
    }

    pub async fn list_by_status(&self, status: ContractStatus) -> ServiceResult<Vec<ContractView>> {
        self.list_where(move |c| c.status == status).await
    }

    pub async fn list_by_property(
        &self,
        property_id: RecordId,
    ) -> ServiceResult<Vec<ContractView>> {
        self.list_where(move |c| c.property_id == property_id).await
    }

    pub async fn list_by_client(&self, client_id: RecordId) -> ServiceResult<Vec<ContractView>> {
        self.list_where(move |c| c.client_id == client_id).await
    }

    /// ACTIVE contracts ending on or before `before`
    pub async fn list_expiring(&self, before: DateTime<Utc>) -> ServiceResult<Vec<ContractView>> {
        self.list_where(move |c| c.status == ContractStatus::Active && c.end_date <= before)
            .await
    }

    pub async fn create(&self, input: ContractInput) -> ServiceResult<ContractView> {
        self.validate(&input).await?;

        let now = Utc::now();
        let contract = Contract {
            id: 0,
            contract_number: input.contract_number,
            property_id: input.property_id,
            client_id: input.client_id,
            contract_type: input.contract_type,
            status: input.status,
            amount: input.amount,
            monthly_rent: input.monthly_rent,
            start_date: input.start_date,
            end_date: input.end_date,
            terms: input.terms,
            created_at: now,
            updated_at: now,
        };

        let saved = self.db.contracts.save(contract).await?;
        info!(
            contract_id = saved.id,
            contract_number = %saved.contract_number,
            operation = operations::CREATE,
            "Contract created"
        );
        self.to_view(saved).await
    }

    /// Replace every contract field; `None` if the contract does not exist
    pub async fn update(
        &self,
        id: RecordId,
        input: ContractInput,
    ) -> ServiceResult<Option<ContractView>> {
        let Some(mut contract) = self.db.contracts.find_by_id(id).await? else {
            return Ok(None);
        };
        self.validate(&input).await?;

        contract.contract_number = input.contract_number;
        contract.property_id = input.property_id;
        contract.client_id = input.client_id;
        contract.contract_type = input.contract_type;
        contract.status = input.status;
        contract.amount = input.amount;
        contract.monthly_rent = input.monthly_rent;
        contract.start_date = input.start_date;
        contract.end_date = input.end_date;
        contract.terms = input.terms;

        let saved = self.db.contracts.save(contract).await?;
        info!(contract_id = id, operation = operations::UPDATE, "Contract updated");
        Ok(Some(self.to_view(saved).await?))
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        let deleted = self.db.contracts.delete_by_id(id).await?;
        if deleted {
            info!(contract_id = id, operation = operations::DELETE, "Contract deleted");
        }
        Ok(deleted)
    }

    async fn validate(&self, input: &ContractInput) -> ServiceResult<()> {
        if input.contract_number.trim().is_empty() {
            return Err(ServiceError::Validation("contract_number is required".to_string()));
        }
        if input.end_date < input.start_date {
            return Err(ServiceError::Validation(
                "end_date must not precede start_date".to_string(),
            ));
        }
        if input.amount.is_sign_negative() {
            return Err(ServiceError::Validation("amount must not be negative".to_string()));
        }
        if self.db.properties.find_by_id(input.property_id).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "property {} does not exist",
                input.property_id
            )));
        }
        if self.db.clients.find_by_id(input.client_id).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "client {} does not exist",
                input.client_id
            )));
        }
        Ok(())
    }

    async fn list_where<F>(&self, pred: F) -> ServiceResult<Vec<ContractView>>
    where
        F: Fn(&Contract) -> bool + Send + Sync,
    {
        let contracts = self.db.contracts.find_where(&pred).await?;
        let mut views = Vec::with_capacity(contracts.len());
        for contract in contracts {
            views.push(self.to_view(contract).await?);
        }
        Ok(views)
    }

    async fn to_view(&self, contract: Contract) -> ServiceResult<ContractView> {
        let property_name = self
            .db
            .properties
            .find_by_id(contract.property_id)
            .await?
            .map(|p| p.name);
        let client_name = self
            .db
            .clients
            .find_by_id(contract.client_id)
            .await?
            .map(|c| c.full_name());

        Ok(ContractView {
            contract,
            property_name,
            client_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use estate_core::{
        ClientInput, ClientStatus, ClientType, NewProperty, PropertyStatus, PropertyType,
    };
    use rust_decimal::Decimal;

    use crate::services::{ClientService, PropertyService};

    async fn fixture() -> ContractService {
        let db = Arc::new(Database::new());
        PropertyService::new(db.clone())
            .create(NewProperty {
                name: "Aoyama Mansion 101".to_string(),
                address: "1-1-1 Aoyama".to_string(),
                description: None,
                property_type: PropertyType::Apartment,
                status: PropertyStatus::Available,
                price: Decimal::from(85_000_000),
                area: Decimal::new(655, 1),
                rooms: 2,
                bathrooms: 1,
                parking_spaces: 1,
                year_built: 2015,
            })
            .await
            .unwrap();
        ClientService::new(db.clone())
            .create(ClientInput {
                first_name: "Jiro".to_string(),
                last_name: "Yamada".to_string(),
                email: "yamada@example.com".to_string(),
                phone: "090-5555-6666".to_string(),
                address: None,
                client_type: ClientType::Tenant,
                status: ClientStatus::Active,
            })
            .await
            .unwrap();
        ContractService::new(db)
    }

    fn rental(number: &str, ends_in_days: i64) -> ContractInput {
        let now = Utc::now();
        ContractInput {
            contract_number: number.to_string(),
            property_id: 1,
            client_id: 1,
            contract_type: ContractType::Rental,
            status: ContractStatus::Active,
            amount: Decimal::from(150_000),
            monthly_rent: Some(Decimal::from(150_000)),
            start_date: now - Duration::days(180),
            end_date: now + Duration::days(ends_in_days),
            terms: Some("Two months deposit".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_embeds_names() {
        let service = fixture().await;
        let view = service.create(rental("CNT-2024-001", 180)).await.unwrap();

        assert_eq!(view.contract.id, 1);
        assert_eq!(view.property_name.as_deref(), Some("Aoyama Mansion 101"));
        assert_eq!(view.client_name.as_deref(), Some("Jiro Yamada"));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_number() {
        let service = fixture().await;
        service.create(rental("CNT-2024-001", 180)).await.unwrap();
        let err = service.create(rental("CNT-2024-001", 90)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_create_requires_references_and_dates() {
        let service = fixture().await;

        let mut missing_property = rental("CNT-2024-002", 10);
        missing_property.property_id = 9;
        assert!(matches!(
            service.create(missing_property).await.unwrap_err(),
            ServiceError::Validation(_)
        ));

        let mut missing_client = rental("CNT-2024-003", 10);
        missing_client.client_id = 9;
        assert!(matches!(
            service.create(missing_client).await.unwrap_err(),
            ServiceError::Validation(_)
        ));

        let mut backwards = rental("CNT-2024-004", 10);
        backwards.end_date = backwards.start_date - Duration::days(1);
        assert!(matches!(
            service.create(backwards).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_list_expiring() {
        let service = fixture().await;
        service.create(rental("CNT-2024-001", 20)).await.unwrap();
        service.create(rental("CNT-2024-002", 400)).await.unwrap();
        let mut draft = rental("CNT-2024-003", 5);
        draft.status = ContractStatus::Draft;
        service.create(draft).await.unwrap();

        let expiring = service
            .list_expiring(Utc::now() + Duration::days(30))
            .await
            .unwrap();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].contract.contract_number, "CNT-2024-001");
    }

    #[tokio::test]
    async fn test_filters_update_and_delete() {
        let service = fixture().await;
        service.create(rental("CNT-2024-001", 20)).await.unwrap();

        assert_eq!(service.list_by_property(1).await.unwrap().len(), 1);
        assert_eq!(service.list_by_client(1).await.unwrap().len(), 1);
        assert_eq!(service.list_by_type(ContractType::Rental).await.unwrap().len(), 1);
        assert!(service.list_by_type(ContractType::Sale).await.unwrap().is_empty());

        let mut terminated = rental("CNT-2024-001", 20);
        terminated.status = ContractStatus::Terminated;
        let view = service.update(1, terminated).await.unwrap().unwrap();
        assert_eq!(view.contract.status, ContractStatus::Terminated);
        assert_eq!(
            service.list_by_status(ContractStatus::Terminated).await.unwrap().len(),
            1
        );

        assert!(service.update(5, rental("CNT-X", 1)).await.unwrap().is_none());
        assert!(service.delete(1).await.unwrap());
        assert!(service.get(1).await.unwrap().is_none());
    }
}
