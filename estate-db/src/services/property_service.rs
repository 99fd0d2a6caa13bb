//! Property Service

use chrono::Utc;
use estate_core::logging::operations;
use estate_core::{
    NewProperty, Property, PropertyCriteria, PropertyPatch, PropertyStatus, PropertyType, RecordId,
    ServiceError, ServiceResult,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

use crate::repos::Database;
use crate::store::Store;

/// Property Service
pub struct PropertyService {
    db: Arc<Database>,
}

impl PropertyService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Property>> {
        Ok(self.db.properties.find_all().await?)
    }

    pub async fn get(&self, id: RecordId) -> ServiceResult<Option<Property>> {
        Ok(self.db.properties.find_by_id(id).await?)
    }

    pub async fn list_by_type(&self, property_type: PropertyType) -> ServiceResult<Vec<Property>> {
        Ok(self
            .db
            .properties
            .find_where(&|p: &Property| p.property_type == property_type)
            .await?)
    }

    pub async fn list_by_status(&self, status: PropertyStatus) -> ServiceResult<Vec<Property>> {
        Ok(self
            .db
            .properties
            .find_where(&|p: &Property| p.status == status)
            .await?)
    }

    /// Case-insensitive substring match on name or address
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<Property>> {
        let needle = query.trim().to_lowercase();
        debug!(query = %needle, operation = operations::SEARCH, "Searching properties");
        Ok(self
            .db
            .properties
            .find_where(&|p: &Property| {
                p.name.to_lowercase().contains(&needle)
                    || p.address.to_lowercase().contains(&needle)
            })
            .await?)
    }

    pub async fn search_by_criteria(
        &self,
        criteria: &PropertyCriteria,
    ) -> ServiceResult<Vec<Property>> {
        Ok(self
            .db
            .properties
            .find_where(&|p: &Property| criteria.matches(p))
            .await?)
    }

    pub async fn create(&self, input: NewProperty) -> ServiceResult<Property> {
        validate(&input.name, &input.address, input.price, input.area)?;

        let now = Utc::now();
        let property = Property {
            id: 0,
            name: input.name,
            address: input.address,
            description: input.description,
            property_type: input.property_type,
            status: input.status,
            price: input.price,
            area: input.area,
            rooms: input.rooms,
            bathrooms: input.bathrooms,
            parking_spaces: input.parking_spaces,
            year_built: input.year_built,
            created_at: now,
            updated_at: now,
        };

        let saved = self.db.properties.save(property).await?;
        info!(property_id = saved.id, operation = operations::CREATE, "Property created");
        Ok(saved)
    }

    /// Apply a partial update; `None` if the property does not exist
    pub async fn update(
        &self,
        id: RecordId,
        patch: PropertyPatch,
    ) -> ServiceResult<Option<Property>> {
        let Some(mut property) = self.db.properties.find_by_id(id).await? else {
            return Ok(None);
        };

        patch.apply(&mut property);
        validate(&property.name, &property.address, property.price, property.area)?;

        let saved = self.db.properties.save(property).await?;
        info!(property_id = id, operation = operations::UPDATE, "Property updated");
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        let deleted = self.db.properties.delete_by_id(id).await?;
        if deleted {
            info!(property_id = id, operation = operations::DELETE, "Property deleted");
        }
        Ok(deleted)
    }
}

fn validate(name: &str, address: &str, price: Decimal, area: Decimal) -> ServiceResult<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name is required".to_string()));
    }
    if address.trim().is_empty() {
        return Err(ServiceError::Validation("address is required".to_string()));
    }
    if price.is_sign_negative() {
        return Err(ServiceError::Validation("price must not be negative".to_string()));
    }
    if area.is_sign_negative() {
        return Err(ServiceError::Validation("area must not be negative".to_string()));
    }
    Ok(())
}
