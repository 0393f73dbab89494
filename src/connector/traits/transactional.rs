use crate::connector::errors::ConnectorError;
use crate::connector::structs::transaction::Transaction;
use crate::driver::enums::isolation_level::IsolationLevel;
use async_trait::async_trait;

#[async_trait]
pub trait Transactional: Send + Sync {
    async fn begin_transaction(&self, isolation: IsolationLevel) -> Result<Transaction, ConnectorError>;

    async fn commit(&self, transaction: &mut Transaction) -> Result<(), ConnectorError>;

    async fn rollback(&self, transaction: &mut Transaction) -> Result<(), ConnectorError>;
}
