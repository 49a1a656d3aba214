use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, DeployedContracts, CONFIG, CONTRACTS};

pub const CONTRACT_NAME: &str = "crates.io:dex-deployer";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let config = Config {
        owner,
        factory_code_id: msg.factory_code_id,
        router_code_id: msg.router_code_id,
        storage_code_id: msg.storage_code_id,
    };
    CONFIG.save(deps.storage, &config)?;
    CONTRACTS.save(deps.storage, &DeployedContracts::default())?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DeploySwap { admin } => crate::execute::deploy_swap(deps, info, admin),
        ExecuteMsg::DeployStorage { admin } => crate::execute::deploy_storage(deps, info, admin),
        ExecuteMsg::UpdateCodeIds {
            factory_code_id,
            router_code_id,
            storage_code_id,
        } => crate::execute::update_code_ids(
            deps,
            info,
            factory_code_id,
            router_code_id,
            storage_code_id,
        ),
        ExecuteMsg::UpdateOwner { new_owner } => {
            crate::execute::update_owner(deps, info, new_owner)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => crate::query::query_config(deps),
        QueryMsg::Status {} => crate::query::query_status(deps),
        QueryMsg::Eligibility { admin } => crate::query::query_eligibility(deps, admin),
        QueryMsg::Deployments { start_after, limit } => {
            crate::query::query_deployments(deps, start_after, limit)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    crate::reply::handle_reply(deps, env, msg)
}
