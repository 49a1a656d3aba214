use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("A deployment is already in progress")]
    DeploymentInProgress {},

    #[error("Received a deployment reply but no deployment is in flight")]
    NoDeploymentInFlight {},

    #[error("Code id for the {contract} contract is not set")]
    CodeIdNotSet { contract: String },

    #[error("Invalid admin address: {address}")]
    InvalidAdminAddress { address: String },

    #[error("Invalid reply ID: {id}")]
    InvalidReplyId { id: u64 },

    #[error("Failed to parse reply from submessage")]
    ReplyParseError {},
}
