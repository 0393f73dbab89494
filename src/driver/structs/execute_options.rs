use crate::driver::structs::transaction_handle::TransactionHandle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Run the statement on the connection pinned to this transaction.
    pub transaction: Option<TransactionHandle>,
}
