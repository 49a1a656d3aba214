use cosmwasm_std::{to_json_binary, Addr, Api, DepsMut, MessageInfo, Response, SubMsg, WasmMsg};

use crate::error::ContractError;
use crate::msg::{project_storage, swap_factory};
use crate::reply::{REPLY_FACTORY_INSTANTIATED, REPLY_STORAGE_INSTANTIATED};
use crate::state::{
    DeploymentKind, Milestone, PendingDeployment, CONFIG, CONTRACTS, LAST_ERROR, PENDING,
};

pub const FACTORY_LABEL: &str = "swap-factory";
pub const ROUTER_LABEL: &str = "swap-router";
pub const STORAGE_LABEL: &str = "project-storage";

pub fn deploy_swap(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    if PENDING.may_load(deps.storage)?.is_some() {
        return Err(ContractError::DeploymentInProgress {});
    }

    let factory_code_id = config.factory_code_id.ok_or_else(|| ContractError::CodeIdNotSet {
        contract: "factory".to_string(),
    })?;
    // The router is instantiated from the factory's reply; refuse to start a
    // run that cannot finish.
    if config.router_code_id.is_none() {
        return Err(ContractError::CodeIdNotSet {
            contract: "router".to_string(),
        });
    }
    let admin = validate_admin(deps.api, &admin)?;

    let mut contracts = CONTRACTS.load(deps.storage)?;
    contracts.factory = None;
    contracts.router = None;
    CONTRACTS.save(deps.storage, &contracts)?;
    LAST_ERROR.remove(deps.storage);

    let milestone = Milestone::SwapDispatched;
    PENDING.save(
        deps.storage,
        &PendingDeployment {
            kind: DeploymentKind::Swap,
            admin: admin.clone(),
            progress: milestone.percent(),
        },
    )?;

    let submsg = SubMsg::reply_always(
        WasmMsg::Instantiate {
            admin: Some(admin.to_string()),
            code_id: factory_code_id,
            msg: to_json_binary(&swap_factory::InstantiateMsg {
                owner: admin.to_string(),
            })?,
            funds: vec![],
            label: FACTORY_LABEL.to_string(),
        },
        REPLY_FACTORY_INSTANTIATED,
    );

    Ok(Response::new()
        .add_submessage(submsg)
        .add_attribute("action", "deploy_swap")
        .add_attribute("admin", admin)
        .add_attribute("progress", milestone.percent().to_string()))
}

pub fn deploy_storage(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    if PENDING.may_load(deps.storage)?.is_some() {
        return Err(ContractError::DeploymentInProgress {});
    }

    let storage_code_id = config.storage_code_id.ok_or_else(|| ContractError::CodeIdNotSet {
        contract: "storage".to_string(),
    })?;
    let admin = validate_admin(deps.api, &admin)?;

    let mut contracts = CONTRACTS.load(deps.storage)?;
    contracts.storage = None;
    CONTRACTS.save(deps.storage, &contracts)?;
    LAST_ERROR.remove(deps.storage);

    let milestone = Milestone::StorageDispatched;
    PENDING.save(
        deps.storage,
        &PendingDeployment {
            kind: DeploymentKind::Storage,
            admin: admin.clone(),
            progress: milestone.percent(),
        },
    )?;

    let submsg = SubMsg::reply_always(
        WasmMsg::Instantiate {
            admin: Some(admin.to_string()),
            code_id: storage_code_id,
            msg: to_json_binary(&project_storage::InstantiateMsg {
                owner: admin.to_string(),
            })?,
            funds: vec![],
            label: STORAGE_LABEL.to_string(),
        },
        REPLY_STORAGE_INSTANTIATED,
    );

    Ok(Response::new()
        .add_submessage(submsg)
        .add_attribute("action", "deploy_storage")
        .add_attribute("admin", admin)
        .add_attribute("progress", milestone.percent().to_string()))
}

pub fn update_code_ids(
    deps: DepsMut,
    info: MessageInfo,
    factory_code_id: Option<u64>,
    router_code_id: Option<u64>,
    storage_code_id: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    if let Some(id) = factory_code_id {
        config.factory_code_id = Some(id);
    }
    if let Some(id) = router_code_id {
        config.router_code_id = Some(id);
    }
    if let Some(id) = storage_code_id {
        config.storage_code_id = Some(id);
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_code_ids"))
}

pub fn update_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("new_owner", new_owner))
}

pub(crate) fn validate_admin(api: &dyn Api, admin: &str) -> Result<Addr, ContractError> {
    api.addr_validate(admin)
        .map_err(|_| ContractError::InvalidAdminAddress {
            address: admin.to_string(),
        })
}
