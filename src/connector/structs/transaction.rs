use crate::connector::enums::transaction_state::TransactionState;
use crate::driver::enums::isolation_level::IsolationLevel;
use crate::driver::structs::transaction_handle::TransactionHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) handle: TransactionHandle,
    pub(crate) isolation: IsolationLevel,
    pub(crate) state: TransactionState,
}
