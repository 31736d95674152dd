//! Audit configuration.
//!
//! The shipped tool runs with [`AuditConfig::default`]. Tests and embedders
//! inject their own contract table or dashboard rules through the builder
//! methods.

use crate::checks::DashboardRules;
use crate::contract::ContractTable;

/// Everything an audit run needs to know.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// CSV contract table
    pub contracts: ContractTable,
    /// Dashboard glob and pattern lists
    pub dashboard: DashboardRules,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            contracts: ContractTable::builtin(),
            dashboard: DashboardRules::builtin(),
        }
    }
}

impl AuditConfig {
    /// Replaces the contract table.
    pub fn with_contracts(mut self, contracts: ContractTable) -> Self {
        self.contracts = contracts;
        self
    }

    /// Replaces the dashboard rules.
    pub fn with_dashboard(mut self, dashboard: DashboardRules) -> Self {
        self.dashboard = dashboard;
        self
    }
}
