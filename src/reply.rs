use cosmwasm_std::{
    to_json_binary, Addr, Api, DepsMut, Env, Event, Reply, Response, Storage, SubMsg,
    SubMsgResult, WasmMsg,
};

use crate::error::ContractError;
use crate::execute::ROUTER_LABEL;
use crate::msg::swap_router;
use crate::state::{
    DeploymentKind, Milestone, PendingDeployment, CONFIG, CONTRACTS, DEPLOYMENTS, LAST_ERROR,
    PENDING,
};

pub const REPLY_FACTORY_INSTANTIATED: u64 = 1;
pub const REPLY_ROUTER_INSTANTIATED: u64 = 2;
pub const REPLY_STORAGE_INSTANTIATED: u64 = 3;

pub fn handle_reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING
        .may_load(deps.storage)?
        .ok_or(ContractError::NoDeploymentInFlight {})?;

    // A reply must belong to the run that is actually in flight.
    match (msg.id, pending.kind.clone()) {
        (REPLY_FACTORY_INSTANTIATED, DeploymentKind::Swap) => {
            factory_instantiated(deps, pending, msg.result)
        }
        (REPLY_ROUTER_INSTANTIATED, DeploymentKind::Swap) => {
            router_instantiated(deps, msg.result)
        }
        (REPLY_STORAGE_INSTANTIATED, DeploymentKind::Storage) => {
            storage_instantiated(deps, msg.result)
        }
        (id, _) => Err(ContractError::InvalidReplyId { id }),
    }
}

/// The factory is up. Register it, then chain the router instantiation, which
/// needs the factory's address and therefore could not be dispatched earlier.
fn factory_instantiated(
    deps: DepsMut,
    mut pending: PendingDeployment,
    result: SubMsgResult,
) -> Result<Response, ContractError> {
    let response = match result {
        SubMsgResult::Ok(response) => response,
        SubMsgResult::Err(err) => return fail_deployment(deps.storage, "factory", &err),
    };
    let factory = parse_instantiated_address(deps.api, &response.events)?;

    let mut contracts = CONTRACTS.load(deps.storage)?;
    contracts.factory = Some(factory.clone());
    CONTRACTS.save(deps.storage, &contracts)?;
    record_deployment(deps.storage, "Factory", &factory)?;

    let milestone = Milestone::FactoryDeployed;
    pending.progress = milestone.percent();
    PENDING.save(deps.storage, &pending)?;

    let config = CONFIG.load(deps.storage)?;
    let router_code_id = config.router_code_id.ok_or_else(|| ContractError::CodeIdNotSet {
        contract: "router".to_string(),
    })?;

    let submsg = SubMsg::reply_always(
        WasmMsg::Instantiate {
            admin: Some(pending.admin.to_string()),
            code_id: router_code_id,
            msg: to_json_binary(&swap_router::InstantiateMsg {
                factory: factory.to_string(),
                owner: pending.admin.to_string(),
            })?,
            funds: vec![],
            label: ROUTER_LABEL.to_string(),
        },
        REPLY_ROUTER_INSTANTIATED,
    );

    Ok(Response::new()
        .add_submessage(submsg)
        .add_attribute("action", "factory_deployed")
        .add_attribute("contract_address", factory)
        .add_attribute("progress", milestone.percent().to_string()))
}

fn router_instantiated(deps: DepsMut, result: SubMsgResult) -> Result<Response, ContractError> {
    let response = match result {
        SubMsgResult::Ok(response) => response,
        SubMsgResult::Err(err) => return fail_deployment(deps.storage, "router", &err),
    };
    let router = parse_instantiated_address(deps.api, &response.events)?;

    let mut contracts = CONTRACTS.load(deps.storage)?;
    contracts.router = Some(router.clone());
    CONTRACTS.save(deps.storage, &contracts)?;
    record_deployment(deps.storage, "Router", &router)?;

    // Run complete: the pending slot goes away and progress is hidden again.
    PENDING.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "router_deployed")
        .add_attribute("contract_address", router)
        .add_attribute("progress", Milestone::RouterDeployed.percent().to_string()))
}

fn storage_instantiated(deps: DepsMut, result: SubMsgResult) -> Result<Response, ContractError> {
    let response = match result {
        SubMsgResult::Ok(response) => response,
        SubMsgResult::Err(err) => return fail_deployment(deps.storage, "storage", &err),
    };
    let storage_addr = parse_instantiated_address(deps.api, &response.events)?;

    let mut contracts = CONTRACTS.load(deps.storage)?;
    contracts.storage = Some(storage_addr.clone());
    CONTRACTS.save(deps.storage, &contracts)?;
    record_deployment(deps.storage, "Storage", &storage_addr)?;

    PENDING.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "storage_deployed")
        .add_attribute("contract_address", storage_addr)
        .add_attribute("progress", Milestone::StorageDeployed.percent().to_string()))
}

/// Settle a failed run: report the error, clear pending state, and return `Ok`
/// so whatever earlier submessages already committed (a deployed factory and
/// its record) survives. No retry.
fn fail_deployment(
    storage: &mut dyn Storage,
    stage: &str,
    err: &str,
) -> Result<Response, ContractError> {
    LAST_ERROR.save(storage, &err.to_string())?;
    PENDING.remove(storage);

    Ok(Response::new()
        .add_attribute("action", "deploy_failed")
        .add_attribute("stage", stage)
        .add_attribute("error", err))
}

pub(crate) fn record_deployment(
    storage: &mut dyn Storage,
    name: &str,
    addr: &Addr,
) -> Result<(), ContractError> {
    let key = format!("{}_{}", name, addr);
    DEPLOYMENTS.save(storage, &key, &addr.to_string())?;
    Ok(())
}

pub(crate) fn parse_instantiated_address(
    api: &dyn Api,
    events: &[Event],
) -> Result<Addr, ContractError> {
    let event = events
        .iter()
        .find(|event| event.ty == "instantiate")
        .ok_or(ContractError::ReplyParseError {})?;
    let addr = event
        .attributes
        .iter()
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.as_str())
        .ok_or(ContractError::ReplyParseError {})?;

    Ok(api.addr_validate(addr)?)
}
