//! Sample data
//!
//! A small Tokyo-area portfolio for demos and manual testing. Records go
//! through the services, so the usual validation and unique keys apply.

use chrono::{DateTime, Duration, Months, Utc};
use estate_core::logging::operations;
use estate_core::{
    ClientInput, ClientStatus, ClientType, ContractInput, ContractStatus, ContractType,
    NewProperty, PropertyStatus, PropertyType, RecordId, ServiceResult, TransactionInput,
    TransactionStatus, TransactionType,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

use crate::repos::Database;
use crate::services::{ClientService, ContractService, PropertyService, TransactionService};
use crate::store::Store;

/// Counts of inserted records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub properties: usize,
    pub clients: usize,
    pub contracts: usize,
    pub transactions: usize,
}

struct PropertySeed {
    name: &'static str,
    address: &'static str,
    description: &'static str,
    property_type: PropertyType,
    status: PropertyStatus,
    price: i64,
    /// Tenths of a square metre
    area_tenths: i64,
    rooms: u32,
    bathrooms: u32,
    parking_spaces: u32,
    year_built: i32,
}

const PROPERTIES: &[PropertySeed] = &[
    PropertySeed {
        name: "Aoyama Mansion 101",
        address: "1-1-1 Aoyama, Minato-ku, Tokyo",
        description: "Five minutes from the station, south facing, 24h security, parcel lockers.",
        property_type: PropertyType::Apartment,
        status: PropertyStatus::Available,
        price: 85_000_000,
        area_tenths: 655,
        rooms: 2,
        bathrooms: 1,
        parking_spaces: 1,
        year_built: 2015,
    },
    PropertySeed {
        name: "Daikanyama House",
        address: "1-2-3 Daikanyama-cho, Shibuya-ku, Tokyo",
        description: "Renovated detached house on a quiet street, garden and parking for two.",
        property_type: PropertyType::House,
        status: PropertyStatus::Available,
        price: 120_000_000,
        area_tenths: 1200,
        rooms: 4,
        bathrooms: 2,
        parking_spaces: 2,
        year_built: 2010,
    },
    PropertySeed {
        name: "Shinjuku Office Building",
        address: "3-1-1 Shinjuku, Shinjuku-ku, Tokyo",
        description: "Three minutes from Shinjuku station, retail on the ground floor.",
        property_type: PropertyType::Commercial,
        status: PropertyStatus::Available,
        price: 250_000_000,
        area_tenths: 2000,
        rooms: 0,
        bathrooms: 0,
        parking_spaces: 5,
        year_built: 2008,
    },
    PropertySeed {
        name: "Roppongi Hills Residence",
        address: "6-10-1 Roppongi, Minato-ku, Tokyo",
        description: "Top-floor penthouse with views of Tokyo Tower and Skytree.",
        property_type: PropertyType::Apartment,
        status: PropertyStatus::Available,
        price: 350_000_000,
        area_tenths: 1800,
        rooms: 4,
        bathrooms: 3,
        parking_spaces: 2,
        year_built: 2003,
    },
    PropertySeed {
        name: "Ginza Commercial Building",
        address: "4-5-6 Ginza, Chuo-ku, Tokyo",
        description: "Central Ginza, direct subway access.",
        property_type: PropertyType::Commercial,
        status: PropertyStatus::Available,
        price: 180_000_000,
        area_tenths: 1500,
        rooms: 0,
        bathrooms: 0,
        parking_spaces: 3,
        year_built: 2012,
    },
    PropertySeed {
        name: "Setagaya Land Plot",
        address: "1-1-1 Setagaya, Setagaya-ku, Tokyo",
        description: "Vacant lot in a residential area, no building conditions.",
        property_type: PropertyType::Land,
        status: PropertyStatus::Available,
        price: 80_000_000,
        area_tenths: 6600,
        rooms: 0,
        bathrooms: 0,
        parking_spaces: 0,
        year_built: 0,
    },
    PropertySeed {
        name: "Shibuya Office Floor",
        address: "2-24-12 Shibuya, Shibuya-ku, Tokyo",
        description: "Whole-floor lease five minutes from Shibuya station.",
        property_type: PropertyType::Office,
        status: PropertyStatus::Available,
        price: 120_000_000,
        area_tenths: 3000,
        rooms: 0,
        bathrooms: 0,
        parking_spaces: 8,
        year_built: 2018,
    },
    PropertySeed {
        name: "Minatomirai Warehouse",
        address: "2-2-1 Minatomirai, Nishi-ku, Yokohama",
        description: "Large logistics warehouse, 24h operation.",
        property_type: PropertyType::Warehouse,
        status: PropertyStatus::Available,
        price: 95_000_000,
        area_tenths: 5000,
        rooms: 0,
        bathrooms: 0,
        parking_spaces: 20,
        year_built: 2015,
    },
    PropertySeed {
        name: "Kichijoji Traditional House",
        address: "1-1-1 Kichijoji-honcho, Musashino, Tokyo",
        description: "Fifty-year-old house with garden, ten minutes from the station.",
        property_type: PropertyType::House,
        status: PropertyStatus::Available,
        price: 68_000_000,
        area_tenths: 900,
        rooms: 3,
        bathrooms: 1,
        parking_spaces: 1,
        year_built: 1973,
    },
    PropertySeed {
        name: "Ikebukuro Investment Flat",
        address: "1-1-1 Ikebukuro, Toshima-ku, Tokyo",
        description: "Currently let, stable rental income.",
        property_type: PropertyType::Apartment,
        status: PropertyStatus::Rented,
        price: 45_000_000,
        area_tenths: 450,
        rooms: 1,
        bathrooms: 1,
        parking_spaces: 0,
        year_built: 2005,
    },
];

/// (first name, last name, email, phone, address, type)
const CLIENTS: &[(&str, &str, &str, &str, &str, ClientType)] = &[
    (
        "Taro",
        "Tanaka",
        "tanaka@example.com",
        "090-1234-5678",
        "1-1-1 Nishi-Shinjuku, Shinjuku-ku",
        ClientType::Buyer,
    ),
    (
        "Hanako",
        "Sato",
        "sato@example.com",
        "090-8765-4321",
        "1-2-3 Shibuya, Shibuya-ku",
        ClientType::Seller,
    ),
    (
        "Jiro",
        "Yamada",
        "yamada@example.com",
        "090-5555-6666",
        "1-3-5 Roppongi, Minato-ku",
        ClientType::Tenant,
    ),
    (
        "Misaki",
        "Suzuki",
        "suzuki@example.com",
        "090-1111-2222",
        "1-1-1 Ginza, Chuo-ku",
        ClientType::Buyer,
    ),
    (
        "Kenichi",
        "Takahashi",
        "takahashi@example.com",
        "090-3333-4444",
        "1-1-1 Setagaya, Setagaya-ku",
        ClientType::Landlord,
    ),
    (
        "Keiko",
        "Ito",
        "ito@example.com",
        "090-5555-7777",
        "1-1-1 Kichijoji, Musashino",
        ClientType::Seller,
    ),
    (
        "Yuichi",
        "Watanabe",
        "watanabe@example.com",
        "090-7777-8888",
        "1-1-1 Minatomirai, Yokohama",
        ClientType::Buyer,
    ),
    (
        "Yumi",
        "Nakamura",
        "nakamura@example.com",
        "090-9999-0000",
        "1-1-1 Ikebukuro, Toshima-ku",
        ClientType::Tenant,
    ),
    (
        "Masao",
        "Kobayashi",
        "kobayashi@example.com",
        "090-1212-3434",
        "1-1-1 Shinjuku, Shinjuku-ku",
        ClientType::Seller,
    ),
    (
        "Aiko",
        "Kato",
        "kato@example.com",
        "090-5656-7878",
        "1-1-1 Aoyama, Minato-ku",
        ClientType::Buyer,
    ),
];

/// Contract row; `property` and `client` index into the seeded lists
struct ContractSeed {
    property: usize,
    client: usize,
    contract_type: ContractType,
    status: ContractStatus,
    amount: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    terms: &'static str,
}

fn months_ago(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(now - Duration::days(30 * i64::from(months)))
}

fn months_ahead(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_add_months(Months::new(months))
        .unwrap_or(now + Duration::days(30 * i64::from(months)))
}

/// Insert the sample portfolio; a database that already holds properties is left untouched.
pub async fn seed_sample_data(db: &Arc<Database>) -> ServiceResult<SeedSummary> {
    if db.properties.count().await? > 0 {
        info!(operation = operations::SEED, "Database already populated, skipping seed");
        return Ok(SeedSummary::default());
    }

    let property_service = PropertyService::new(db.clone());
    let client_service = ClientService::new(db.clone());
    let contract_service = ContractService::new(db.clone());
    let transaction_service = TransactionService::new(db.clone());

    let mut property_ids = Vec::with_capacity(PROPERTIES.len());
    for seed in PROPERTIES {
        let property = property_service
            .create(NewProperty {
                name: seed.name.to_string(),
                address: seed.address.to_string(),
                description: Some(seed.description.to_string()),
                property_type: seed.property_type,
                status: seed.status,
                price: Decimal::from(seed.price),
                area: Decimal::new(seed.area_tenths, 1),
                rooms: seed.rooms,
                bathrooms: seed.bathrooms,
                parking_spaces: seed.parking_spaces,
                year_built: seed.year_built,
            })
            .await?;
        property_ids.push(property.id);
    }

    let mut client_ids = Vec::with_capacity(CLIENTS.len());
    for (first_name, last_name, email, phone, address, client_type) in CLIENTS {
        let client = client_service
            .create(ClientInput {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                address: Some(address.to_string()),
                client_type: *client_type,
                status: ClientStatus::Active,
            })
            .await?;
        client_ids.push(client.id);
    }

    let now = Utc::now();
    let contracts = [
        ContractSeed {
            property: 0,
            client: 2,
            contract_type: ContractType::Rental,
            status: ContractStatus::Active,
            amount: 150_000,
            start_date: months_ago(now, 6),
            end_date: months_ahead(now, 6),
            terms: "Rent 150,000 incl. common charges, two months deposit, one month key money",
        },
        ContractSeed {
            property: 3,
            client: 6,
            contract_type: ContractType::Sale,
            status: ContractStatus::Pending,
            amount: 320_000_000,
            start_date: now - Duration::days(30),
            end_date: now + Duration::days(60),
            terms: "20% down payment, balance by mortgage, fees borne by the seller",
        },
        ContractSeed {
            property: 4,
            client: 3,
            contract_type: ContractType::Lease,
            status: ContractStatus::Active,
            amount: 800_000,
            start_date: months_ago(now, 12),
            end_date: months_ahead(now, 24),
            terms: "Monthly rent 800,000, two months security deposit, one month renewal fee",
        },
        ContractSeed {
            property: 7,
            client: 4,
            contract_type: ContractType::Management,
            status: ContractStatus::Active,
            amount: 50_000,
            start_date: months_ago(now, 3),
            end_date: months_ahead(now, 12),
            terms: "Management fee 50,000 per month, tenant sourcing and rent collection",
        },
        ContractSeed {
            property: 9,
            client: 7,
            contract_type: ContractType::Rental,
            status: ContractStatus::Active,
            amount: 85_000,
            start_date: months_ago(now, 8),
            end_date: months_ahead(now, 4),
            terms: "Monthly rent 85,000, one month deposit, no key money, common charges extra",
        },
    ];

    let mut contract_ids: Vec<RecordId> = Vec::with_capacity(contracts.len());
    for (n, seed) in contracts.into_iter().enumerate() {
        let monthly_rent = matches!(seed.contract_type, ContractType::Rental | ContractType::Lease)
            .then(|| Decimal::from(seed.amount));
        let view = contract_service
            .create(ContractInput {
                contract_number: format!("CNT-{}-{:03}", now.format("%Y"), n + 1),
                property_id: property_ids[seed.property],
                client_id: client_ids[seed.client],
                contract_type: seed.contract_type,
                status: seed.status,
                amount: Decimal::from(seed.amount),
                monthly_rent,
                start_date: seed.start_date,
                end_date: seed.end_date,
                terms: Some(seed.terms.to_string()),
            })
            .await?;
        contract_ids.push(view.contract.id);
    }

    // (contract index, type, amount, days ago, description)
    let transactions: [(usize, TransactionType, i64, i64, &str); 8] = [
        (0, TransactionType::Payment, 150_000, 15, "January rent"),
        (0, TransactionType::Payment, 150_000, 15, "February rent"),
        (1, TransactionType::Payment, 64_000_000, 10, "Down payment"),
        (2, TransactionType::Payment, 800_000, 5, "January lease payment"),
        (3, TransactionType::Commission, 25_000, 20, "Management commission"),
        (4, TransactionType::Payment, 85_000, 12, "January rent"),
        (0, TransactionType::Maintenance, 50_000, 8, "Air conditioner repair"),
        (2, TransactionType::Insurance, 120_000, 25, "Fire insurance premium"),
    ];

    for (contract, transaction_type, amount, days_ago, description) in transactions {
        transaction_service
            .create(TransactionInput {
                contract_id: contract_ids[contract],
                transaction_type,
                amount: Decimal::from(amount),
                transaction_date: now - Duration::days(days_ago),
                description: Some(description.to_string()),
                status: TransactionStatus::Completed,
            })
            .await?;
    }

    let summary = SeedSummary {
        properties: property_ids.len(),
        clients: client_ids.len(),
        contracts: contract_ids.len(),
        transactions: transactions.len(),
    };
    info!(
        properties = summary.properties,
        clients = summary.clients,
        contracts = summary.contracts,
        transactions = summary.transactions,
        operation = operations::SEED,
        "Sample data loaded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_sample_data() {
        let db = Arc::new(Database::new());
        let summary = seed_sample_data(&db).await.unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                properties: 10,
                clients: 10,
                contracts: 5,
                transactions: 8,
            }
        );
        assert_eq!(db.contracts.count().await.unwrap(), 5);

        let views = ContractService::new(db.clone()).list_all().await.unwrap();
        assert!(views
            .iter()
            .all(|v| v.property_name.is_some() && v.client_name.is_some()));
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_populated() {
        let db = Arc::new(Database::new());
        seed_sample_data(&db).await.unwrap();

        let second = seed_sample_data(&db).await.unwrap();
        assert_eq!(second, SeedSummary::default());
        assert_eq!(db.properties.count().await.unwrap(), 10);
    }
}
