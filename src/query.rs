use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    DeploymentEntry, DeploymentsResponse, EligibilityResponse, StatusResponse,
};
use crate::state::{Config, CONFIG, CONTRACTS, DEPLOYMENTS, LAST_ERROR, PENDING};

const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config: Config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_status(deps: Deps) -> StdResult<Binary> {
    let pending = PENDING.may_load(deps.storage)?;
    let contracts = CONTRACTS.load(deps.storage)?;

    let response = StatusResponse {
        pending: pending.is_some(),
        progress: pending.map(|run| run.progress),
        factory: contracts.factory.map(|addr| addr.into_string()),
        router: contracts.router.map(|addr| addr.into_string()),
        storage: contracts.storage.map(|addr| addr.into_string()),
        last_error: LAST_ERROR.may_load(deps.storage)?,
    };
    to_json_binary(&response)
}

/// Pure function of (config, admin string). An invalid or empty admin is not
/// an error; the flags simply come back `false`.
pub fn query_eligibility(deps: Deps, admin: String) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let admin_is_valid = deps.api.addr_validate(&admin).is_ok();

    let response = EligibilityResponse {
        can_deploy_swap: admin_is_valid
            && config.factory_code_id.is_some()
            && config.router_code_id.is_some(),
        can_deploy_storage: admin_is_valid && config.storage_code_id.is_some(),
    };
    to_json_binary(&response)
}

pub fn query_deployments(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let start = start_after.as_deref().map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let entries = DEPLOYMENTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (key, address) = item?;
            Ok(DeploymentEntry { key, address })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&DeploymentsResponse { entries })
}
