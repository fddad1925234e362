//! In-memory session store
//!
//! Every mutation validates its input first and leaves the store untouched
//! on error. Dashboard views are derived on demand from the current snapshot.

use std::collections::HashSet;

use tracing::{debug, info};

use super::dataset::Dataset;
use crate::engine::{Dashboard, DashboardOptions};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    Budget, BudgetValidationError, Money, MonthPeriod, Transaction, TransactionId,
    TransactionInput,
};

/// Transactions (in insertion order) and the current budget set
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded data, applying the same rules as manual entry
    pub fn from_dataset(dataset: Dataset) -> DashboardResult<Self> {
        let mut store = Self::new();
        for (idx, txn) in dataset.transactions.into_iter().enumerate() {
            store.insert_transaction(txn).map_err(|e| match e {
                DashboardError::Validation(msg) => {
                    DashboardError::Validation(format!("transaction #{}: {}", idx + 1, msg))
                }
                other => other,
            })?;
        }
        store.replace_budgets(dataset.budgets)?;
        Ok(store)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Budget amount for a category, zero when none is set
    pub fn budget_for(&self, category: &str) -> Money {
        self.budgets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.amount)
            .unwrap_or_default()
    }

    /// Validate an entry, assign it a fresh identifier and append it
    pub fn add_transaction(&mut self, input: TransactionInput) -> DashboardResult<&Transaction> {
        input.validate()?;
        let txn = input.into_transaction();
        info!(id = %txn.id.short(), amount = %txn.amount, category = %txn.category, "added transaction");
        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Append a transaction that already carries an identifier
    pub fn insert_transaction(&mut self, txn: Transaction) -> DashboardResult<()> {
        txn.validate()?;
        if self.get(txn.id).is_some() {
            return Err(DashboardError::duplicate_transaction(txn.id.to_string()));
        }
        debug!(id = %txn.id.short(), "inserted transaction");
        self.transactions.push(txn);
        Ok(())
    }

    /// Replace the transaction with the same identifier, returning the old one
    pub fn edit_transaction(&mut self, txn: Transaction) -> DashboardResult<Transaction> {
        txn.validate()?;
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == txn.id)
            .ok_or_else(|| DashboardError::transaction_not_found(txn.id.to_string()))?;
        info!(id = %txn.id.short(), "edited transaction");
        Ok(std::mem::replace(slot, txn))
    }

    /// Remove a transaction, returning it
    pub fn delete_transaction(&mut self, id: TransactionId) -> DashboardResult<Transaction> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DashboardError::transaction_not_found(id.to_string()))?;
        info!(id = %id.short(), "deleted transaction");
        Ok(self.transactions.remove(idx))
    }

    /// Replace the whole budget set
    ///
    /// Zero amounts mean "no budget" and are dropped. Negative amounts and
    /// repeated categories are rejected.
    pub fn replace_budgets(&mut self, budgets: Vec<Budget>) -> DashboardResult<()> {
        let mut seen = HashSet::new();
        for budget in &budgets {
            budget.validate()?;
            if !seen.insert(budget.category.as_str()) {
                return Err(DashboardError::duplicate_budget(budget.category.clone()));
            }
        }

        let budgets: Vec<Budget> = budgets.into_iter().filter(Budget::is_set).collect();
        info!(count = budgets.len(), "replaced budgets");
        self.budgets = budgets;
        Ok(())
    }

    /// Parse `Category=Amount` assignments and replace the budget set
    pub fn replace_budgets_from_assignments<S: AsRef<str>>(
        &mut self,
        assignments: &[S],
    ) -> DashboardResult<()> {
        let budgets = assignments
            .iter()
            .map(|s| Budget::parse_assignment(s.as_ref()))
            .collect::<Result<Vec<_>, BudgetValidationError>>()?;
        self.replace_budgets(budgets)
    }

    /// Run the engine over the current snapshot
    pub fn dashboard(&self, period: MonthPeriod, options: DashboardOptions) -> Dashboard {
        Dashboard::build_with(&self.transactions, &self.budgets, period, options)
    }

    /// Copy the current state out as a dataset
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            transactions: self.transactions.clone(),
            budgets: self.budgets.clone(),
        }
    }
}
