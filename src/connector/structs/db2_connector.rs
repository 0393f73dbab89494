use crate::connector::structs::sql_connector::SqlConnector;
use regex::Regex;

#[derive(Clone)]
pub struct Db2Connector {
    pub(crate) base: SqlConnector,
    pub(crate) limit_re: Regex,
    pub(crate) offset_re: Regex,
}
