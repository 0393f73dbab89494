use crate::connector::enums::transaction_state::TransactionState;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::db2_connector::Db2Connector;
use crate::connector::structs::transaction::Transaction;
use crate::connector::traits::transactional::Transactional;
use crate::driver::enums::isolation_level::IsolationLevel;
use crate::driver::structs::execute_options::ExecuteOptions;
use crate::driver::structs::transaction_handle::TransactionHandle;
use async_trait::async_trait;
use log::debug;

impl Transaction {
    pub fn new(handle: TransactionHandle, isolation: IsolationLevel) -> Self {
        Self {
            handle,
            isolation,
            state: TransactionState::Active,
        }
    }

    pub fn handle(&self) -> TransactionHandle {
        self.handle
    }

    pub fn isolation(&self) -> IsolationLevel {
        self.isolation
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == TransactionState::Active
    }

    /// Options that route a connector call through this transaction.
    pub fn options(&self) -> ExecuteOptions {
        ExecuteOptions {
            transaction: Some(self.handle),
        }
    }

    fn ensure_active(&self) -> Result<(), ConnectorError> {
        if self.is_active() {
            return Ok(());
        }
        Err(ConnectorError::TransactionFinished {
            id: self.handle.0,
            state: self.state,
        })
    }
}

#[async_trait]
impl Transactional for Db2Connector {
    async fn begin_transaction(&self, isolation: IsolationLevel) -> Result<Transaction, ConnectorError> {
        let handle = self.base.driver.begin(isolation).await?;
        debug!("[DB2i] begin transaction {} WITH {}", handle.0, isolation.db2_clause());
        Ok(Transaction::new(handle, isolation))
    }

    async fn commit(&self, transaction: &mut Transaction) -> Result<(), ConnectorError> {
        transaction.ensure_active()?;
        self.base.driver.commit(transaction.handle).await?;
        transaction.state = TransactionState::Committed;
        debug!("[DB2i] commit transaction {}", transaction.handle.0);
        Ok(())
    }

    async fn rollback(&self, transaction: &mut Transaction) -> Result<(), ConnectorError> {
        transaction.ensure_active()?;
        self.base.driver.rollback(transaction.handle).await?;
        transaction.state = TransactionState::RolledBack;
        debug!("[DB2i] rollback transaction {}", transaction.handle.0);
        Ok(())
    }
}
