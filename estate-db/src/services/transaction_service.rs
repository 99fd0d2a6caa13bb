//! Transaction Service

use chrono::Utc;
use estate_core::logging::operations;
use estate_core::{
    RecordId, ServiceError, ServiceResult, Transaction, TransactionInput, TransactionStatus,
    TransactionType,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

use crate::repos::Database;
use crate::store::Store;

/// Transaction Service
pub struct TransactionService {
    db: Arc<Database>,
}

impl TransactionService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Transaction>> {
        Ok(self.db.transactions.find_all().await?)
    }

    pub async fn get(&self, id: RecordId) -> ServiceResult<Option<Transaction>> {
        Ok(self.db.transactions.find_by_id(id).await?)
    }

    pub async fn list_by_contract(&self, contract_id: RecordId) -> ServiceResult<Vec<Transaction>> {
        Ok(self
            .db
            .transactions
            .find_where(&|t: &Transaction| t.contract_id == contract_id)
            .await?)
    }

    pub async fn list_by_type(
        &self,
        transaction_type: TransactionType,
    ) -> ServiceResult<Vec<Transaction>> {
        Ok(self
            .db
            .transactions
            .find_where(&|t: &Transaction| t.transaction_type == transaction_type)
            .await?)
    }

    pub async fn list_by_status(
        &self,
        status: TransactionStatus,
    ) -> ServiceResult<Vec<Transaction>> {
        Ok(self
            .db
            .transactions
            .find_where(&|t: &Transaction| t.status == status)
            .await?)
    }

    pub async fn create(&self, input: TransactionInput) -> ServiceResult<Transaction> {
        self.validate(&input).await?;

        let now = Utc::now();
        let transaction = Transaction {
            id: 0,
            contract_id: input.contract_id,
            transaction_type: input.transaction_type,
            amount: input.amount,
            transaction_date: input.transaction_date,
            description: input.description,
            status: input.status,
            created_at: now,
            updated_at: now,
        };

        let saved = self.db.transactions.save(transaction).await?;
        info!(
            transaction_id = saved.id,
            contract_id = saved.contract_id,
            operation = operations::CREATE,
            "Transaction recorded"
        );
        Ok(saved)
    }

    /// Replace every transaction field; `None` if the transaction does not exist
    pub async fn update(
        &self,
        id: RecordId,
        input: TransactionInput,
    ) -> ServiceResult<Option<Transaction>> {
        let Some(mut transaction) = self.db.transactions.find_by_id(id).await? else {
            return Ok(None);
        };
        self.validate(&input).await?;

        transaction.contract_id = input.contract_id;
        transaction.transaction_type = input.transaction_type;
        transaction.amount = input.amount;
        transaction.transaction_date = input.transaction_date;
        transaction.description = input.description;
        transaction.status = input.status;

        let saved = self.db.transactions.save(transaction).await?;
        info!(transaction_id = id, operation = operations::UPDATE, "Transaction updated");
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        let deleted = self.db.transactions.delete_by_id(id).await?;
        if deleted {
            info!(transaction_id = id, operation = operations::DELETE, "Transaction deleted");
        }
        Ok(deleted)
    }

    async fn validate(&self, input: &TransactionInput) -> ServiceResult<()> {
        if input.amount <= Decimal::ZERO {
            return Err(ServiceError::Validation("amount must be positive".to_string()));
        }
        if self.db.contracts.find_by_id(input.contract_id).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "contract {} does not exist",
                input.contract_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use estate_core::{
        ClientInput, ClientStatus, ClientType, ContractInput, ContractStatus, ContractType,
        NewProperty, PropertyStatus, PropertyType,
    };

    use crate::services::{ClientService, ContractService, PropertyService};

    async fn fixture() -> TransactionService {
        let db = Arc::new(Database::new());
        PropertyService::new(db.clone())
            .create(NewProperty {
                name: "Ikebukuro Investment Flat".to_string(),
                address: "1-1-1 Ikebukuro".to_string(),
                description: None,
                property_type: PropertyType::Apartment,
                status: PropertyStatus::Rented,
                price: Decimal::from(45_000_000),
                area: Decimal::from(45),
                rooms: 1,
                bathrooms: 1,
                parking_spaces: 0,
                year_built: 2005,
            })
            .await
            .unwrap();
        ClientService::new(db.clone())
            .create(ClientInput {
                first_name: "Yumi".to_string(),
                last_name: "Nakamura".to_string(),
                email: "nakamura@example.com".to_string(),
                phone: "090-9999-0000".to_string(),
                address: None,
                client_type: ClientType::Tenant,
                status: ClientStatus::Active,
            })
            .await
            .unwrap();
        let now = Utc::now();
        ContractService::new(db.clone())
            .create(ContractInput {
                contract_number: "CNT-2024-005".to_string(),
                property_id: 1,
                client_id: 1,
                contract_type: ContractType::Rental,
                status: ContractStatus::Active,
                amount: Decimal::from(85_000),
                monthly_rent: Some(Decimal::from(85_000)),
                start_date: now - Duration::days(240),
                end_date: now + Duration::days(120),
                terms: None,
            })
            .await
            .unwrap();
        TransactionService::new(db)
    }

    fn payment(amount: i64) -> TransactionInput {
        TransactionInput {
            contract_id: 1,
            transaction_type: TransactionType::Payment,
            amount: Decimal::from(amount),
            transaction_date: Utc::now(),
            description: Some("January rent".to_string()),
            status: TransactionStatus::Completed,
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = fixture().await;
        service.create(payment(85_000)).await.unwrap();
        let mut repair = payment(50_000);
        repair.transaction_type = TransactionType::Maintenance;
        repair.status = TransactionStatus::Pending;
        service.create(repair).await.unwrap();

        assert_eq!(service.list_by_contract(1).await.unwrap().len(), 2);
        assert_eq!(
            service.list_by_type(TransactionType::Maintenance).await.unwrap().len(),
            1
        );
        assert_eq!(
            service.list_by_status(TransactionStatus::Completed).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_create_validation() {
        let service = fixture().await;
        assert!(matches!(
            service.create(payment(0)).await.unwrap_err(),
            ServiceError::Validation(_)
        ));

        let mut orphan = payment(1000);
        orphan.contract_id = 9;
        assert!(matches!(
            service.create(orphan).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let service = fixture().await;
        let created = service.create(payment(85_000)).await.unwrap();

        let mut refund = payment(10_000);
        refund.transaction_type = TransactionType::Refund;
        let updated = service.update(created.id, refund).await.unwrap().unwrap();
        assert_eq!(updated.transaction_type, TransactionType::Refund);
        assert_eq!(updated.amount, Decimal::from(10_000));

        assert!(service.update(99, payment(1)).await.unwrap().is_none());
        assert!(service.delete(created.id).await.unwrap());
        assert!(service.get(created.id).await.unwrap().is_none());
    }
}
