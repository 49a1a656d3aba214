use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub factory_code_id: Option<u64>,
    pub router_code_id: Option<u64>,
    pub storage_code_id: Option<u64>,
}

#[cw_serde]
pub enum DeploymentKind {
    Swap,
    Storage,
}

/// Checkpoints a deployment run passes through. Percents are reported in
/// response attributes and mirrored in [`PendingDeployment::progress`];
/// within one run they only ever increase.
#[cw_serde]
#[derive(Copy)]
pub enum Milestone {
    SwapDispatched,
    FactoryDeployed,
    RouterDeployed,
    StorageDispatched,
    StorageDeployed,
}

impl Milestone {
    pub const fn percent(self) -> u8 {
        match self {
            Milestone::SwapDispatched => 5,
            Milestone::FactoryDeployed => 40,
            Milestone::RouterDeployed => 90,
            Milestone::StorageDispatched => 20,
            Milestone::StorageDeployed => 100,
        }
    }
}

/// The run currently in flight. Present in storage only between dispatch and
/// settlement; at most one run may be live at a time.
#[cw_serde]
pub struct PendingDeployment {
    pub kind: DeploymentKind,
    pub admin: Addr,
    pub progress: u8,
}

/// Addresses produced by the most recent run of each orchestrator. A field is
/// cleared when the run that produces it starts, and set exactly once by that
/// run's reply handler.
#[cw_serde]
#[derive(Default)]
pub struct DeployedContracts {
    pub factory: Option<Addr>,
    pub router: Option<Addr>,
    pub storage: Option<Addr>,
}

// Stores the contract's configuration
pub const CONFIG: Item<Config> = Item::new("config");

pub const PENDING: Item<PendingDeployment> = Item::new("pending");

pub const CONTRACTS: Item<DeployedContracts> = Item::new("contracts");

// Grow-only record of every contract ever deployed, keyed
// "<ContractName>_<address>" with the address string as value.
pub const DEPLOYMENTS: Map<&str, String> = Map::new("deployments");

pub const LAST_ERROR: Item<String> = Item::new("last_error");
