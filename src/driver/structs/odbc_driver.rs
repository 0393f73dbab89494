use crate::driver::structs::transaction_handle::TransactionHandle;
use odbc_api::Connection;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

pub struct OdbcDriver {
    pub(crate) pool: Arc<OdbcPool>,
    pub(crate) transactions: Mutex<HashMap<TransactionHandle, Arc<Mutex<Connection<'static>>>>>,
    pub(crate) next_transaction: AtomicU64,
}

pub struct OdbcPool {
    pub(crate) connection_string: String,
    pub(crate) max_idle: usize,
    pub(crate) idle: Mutex<Vec<Connection<'static>>>,
}
