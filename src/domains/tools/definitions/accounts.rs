use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

pub const GET_ACCOUNTS: Operation = Operation::new(
    "get_accounts",
    "Get all accounts from Pylon",
    Endpoint::get("accounts"),
);

pub const GET_ACCOUNT: Operation = Operation::new(
    "get_account",
    "Get a specific account by ID",
    Endpoint::get("accounts/{account_id}"),
)
.with_params(&[Param::required("account_id", ParamKind::String, "Account ID")]);
