#[allow(unused_imports)]
use crate::state::Config;
use cosmwasm_schema::{cw_serde, QueryResponses};

// Instantiate interfaces of the contracts this deployer spawns. Only the
// instantiate side is owned here; everything else those contracts do is out
// of scope.
pub mod swap_factory {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {
        /// Account that administers the factory (fee setter, pair admin).
        pub owner: String,
    }
}

pub mod swap_router {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {
        /// Address of the factory the router trades against.
        pub factory: String,
        pub owner: String,
    }
}

pub mod project_storage {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {
        pub owner: String,
    }
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to trigger deployments; defaults to the sender.
    pub owner: Option<String>,
    pub factory_code_id: Option<u64>,
    pub router_code_id: Option<u64>,
    pub storage_code_id: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deploy the swap factory/router pair, factory first. `admin` becomes
    /// the administrator of both contracts.
    DeploySwap { admin: String },
    /// Deploy the project storage contract with `admin` as administrator.
    DeployStorage { admin: String },
    /// Register or replace the code ids used for deployments. `None` leaves
    /// the stored id unchanged.
    UpdateCodeIds {
        factory_code_id: Option<u64>,
        router_code_id: Option<u64>,
        storage_code_id: Option<u64>,
    },
    UpdateOwner { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// Everything a frontend needs to render the deployment form.
    #[returns(StatusResponse)]
    Status {},
    /// Whether each deployment could currently be started for `admin`.
    #[returns(EligibilityResponse)]
    Eligibility { admin: String },
    /// Paginated listing of the deployment record.
    #[returns(DeploymentsResponse)]
    Deployments {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct StatusResponse {
    pub pending: bool,
    /// Milestone percent of the in-flight run; `None` when no run is live.
    pub progress: Option<u8>,
    pub factory: Option<String>,
    pub router: Option<String>,
    pub storage: Option<String>,
    pub last_error: Option<String>,
}

#[cw_serde]
pub struct EligibilityResponse {
    pub can_deploy_swap: bool,
    pub can_deploy_storage: bool,
}

#[cw_serde]
pub struct DeploymentEntry {
    /// `"<ContractName>_<address>"`
    pub key: String,
    pub address: String,
}

#[cw_serde]
pub struct DeploymentsResponse {
    pub entries: Vec<DeploymentEntry>,
}
