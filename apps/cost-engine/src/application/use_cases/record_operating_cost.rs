//! Record Operating Cost Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::dto::RecordOperatingCostDto;
use crate::application::ports::OperatingCostStore;
use crate::domain::costing::CostingError;
use crate::domain::records::OperatingCost;
use crate::domain::shared::{Money, MonthKey};

/// Use case for creating a monthly operating-cost record.
pub struct RecordOperatingCostUseCase<O>
where
    O: OperatingCostStore,
{
    operating: Arc<O>,
}

impl<O> RecordOperatingCostUseCase<O>
where
    O: OperatingCostStore,
{
    /// Create a new use case over the operating-cost store.
    pub fn new(operating: Arc<O>) -> Self {
        Self { operating }
    }

    /// Validate and save a monthly record.
    ///
    /// # Errors
    ///
    /// Returns `CostingError::InvalidInput` for a malformed month key or a
    /// negative cost component, `CostingError::DuplicateMonth` when a
    /// record for the month already exists, or a store error.
    pub async fn execute(
        &self,
        request: RecordOperatingCostDto,
    ) -> Result<OperatingCost, CostingError> {
        let month = MonthKey::parse(&request.month)?;
        validate_component("supervisor_salary", request.supervisor_salary)?;
        validate_component("utilities", request.utilities)?;
        validate_component("maintenance", request.maintenance)?;
        validate_component("other", request.other)?;

        if self.operating.find_by_month(month).await?.is_some() {
            return Err(CostingError::DuplicateMonth {
                month: month.to_string(),
            });
        }

        let record = OperatingCost {
            month,
            supervisor_salary: Money::new(request.supervisor_salary),
            utilities: Money::new(request.utilities),
            maintenance: Money::new(request.maintenance),
            other: Money::new(request.other),
        };
        self.operating.save(&record).await?;
        tracing::info!(month = %month, total = %record.total(), "operating cost recorded");
        Ok(record)
    }
}

fn validate_component(field: &str, value: Decimal) -> Result<(), CostingError> {
    if value < Decimal::ZERO {
        return Err(CostingError::InvalidInput {
            field: field.to_string(),
            message: "cost components must be non-negative".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryOperatingCostStore;
    use rust_decimal_macros::dec;

    fn request(month: &str) -> RecordOperatingCostDto {
        RecordOperatingCostDto {
            month: month.to_string(),
            supervisor_salary: dec!(1200),
            utilities: dec!(300),
            maintenance: dec!(150),
            other: dec!(50),
        }
    }

    #[tokio::test]
    async fn records_a_new_month() {
        let store = Arc::new(InMemoryOperatingCostStore::new());
        let use_case = RecordOperatingCostUseCase::new(Arc::clone(&store));

        let record = use_case.execute(request("2025-08")).await.unwrap();
        assert_eq!(record.total().amount(), dec!(1700));

        let found = store
            .find_by_month(MonthKey::parse("2025-08").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(record));
    }

    #[tokio::test]
    async fn rejects_duplicate_month() {
        let use_case =
            RecordOperatingCostUseCase::new(Arc::new(InMemoryOperatingCostStore::new()));

        use_case.execute(request("2025-08")).await.unwrap();
        let err = use_case.execute(request("2025-08")).await.unwrap_err();

        assert!(matches!(err, CostingError::DuplicateMonth { .. }));
        assert!(format!("{err}").contains("already exist"));
    }

    #[tokio::test]
    async fn rejects_malformed_month() {
        let use_case =
            RecordOperatingCostUseCase::new(Arc::new(InMemoryOperatingCostStore::new()));

        let err = use_case.execute(request("August 2025")).await.unwrap_err();
        assert!(matches!(err, CostingError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn rejects_negative_component() {
        let use_case =
            RecordOperatingCostUseCase::new(Arc::new(InMemoryOperatingCostStore::new()));

        let mut bad = request("2025-08");
        bad.utilities = dec!(-1);
        let err = use_case.execute(bad).await.unwrap_err();

        assert!(matches!(err, CostingError::InvalidInput { .. }));
    }
}
