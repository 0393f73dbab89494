#[cfg(test)]
mod connector_tests {
    use crate::config::structs::connection_settings::ConnectionSettings;
    use crate::connector::errors::ConnectorError;
    use crate::connector::structs::db2_connector::Db2Connector;
    use crate::connector::traits::connector::Connector;
    use crate::driver::errors::ExecutionError;
    use crate::driver::structs::execute_options::ExecuteOptions;
    use crate::driver::structs::execution_result::ExecutionResult;
    use crate::driver::traits::executor::MockExecutor;
    use crate::driver::types::Row;
    use crate::model::enums::property_type::PropertyType;
    use crate::model::structs::model_definition::ModelDefinition;
    use crate::model::structs::property_definition::PropertyDefinition;
    use crate::sql::errors::StatementError;
    use crate::sql::structs::filter::Filter;
    use crate::sql::structs::where_filter::Where;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn customer() -> ModelDefinition {
        ModelDefinition::new("Customer")
            .with_property(PropertyDefinition::new("id", PropertyType::Integer).id().generated())
            .with_property(PropertyDefinition::new("name", PropertyType::String).length(64))
            .with_property(PropertyDefinition::new("active", PropertyType::Boolean))
    }

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("rows must be objects"),
        }
    }

    fn rows(values: Vec<Value>) -> ExecutionResult {
        ExecutionResult::from_rows(values.into_iter().map(row).collect())
    }

    fn connector_with(mock: MockExecutor, settings: ConnectionSettings) -> Db2Connector {
        let connector = Db2Connector::new(settings, Arc::new(mock)).unwrap();
        connector.define_model(customer());
        connector
    }

    fn connector(mock: MockExecutor) -> Db2Connector {
        connector_with(mock, ConnectionSettings::default())
    }

    fn expect_sql(mock: &mut MockExecutor, expected_sql: &'static str, expected_params: Vec<Value>, result: ExecutionResult) {
        mock.expect_execute()
            .withf(move |sql, params, _| sql == expected_sql && params.to_vec() == expected_params)
            .times(1)
            .returning(move |_, _, _| Ok(result.clone()));
    }

    mod crud_tests {
        use super::*;

        #[tokio::test]
        async fn test_create_selects_id_from_final_table() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT \"id\" FROM FINAL TABLE (INSERT INTO \"Customer\" (\"name\",\"active\") VALUES (?,?))",
                vec![json!("Bob"), json!(1)],
                rows(vec![json!({"ID": 7})]),
            );
            let data = row(json!({"name": "Bob", "active": true}));
            let id = connector(mock).create("Customer", &data, &ExecuteOptions::default()).await.unwrap();
            assert_eq!(id, json!(7));
        }

        #[tokio::test]
        async fn test_create_uses_default_schema() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT \"id\" FROM FINAL TABLE (INSERT INTO \"APP\".\"Customer\" (\"name\") VALUES (?))",
                vec![json!("Ann")],
                rows(vec![json!({"id": 1})]),
            );
            let settings = ConnectionSettings {
                schema: Some(String::from("APP")),
                ..Default::default()
            };
            let connector = connector_with(mock, settings);
            let id = connector
                .create("Customer", &row(json!({"name": "Ann"})), &ExecuteOptions::default())
                .await
                .unwrap();
            assert_eq!(id, json!(1));
        }

        #[tokio::test]
        async fn test_create_without_rows_reports_missing_identifier() {
            let mut mock = MockExecutor::new();
            mock.expect_execute().times(1).returning(|_, _, _| Ok(ExecutionResult::default()));
            let result = connector(mock)
                .create("Customer", &row(json!({"name": "Bob"})), &ExecuteOptions::default())
                .await;
            assert!(matches!(result, Err(ConnectorError::MissingIdentifier(model)) if model == "Customer"));
        }

        #[tokio::test]
        async fn test_create_unknown_model_does_no_io() {
            let mock = MockExecutor::new();
            let result = connector(mock)
                .create("Order", &row(json!({"total": 1})), &ExecuteOptions::default())
                .await;
            assert!(matches!(
                result,
                Err(ConnectorError::Statement(StatementError::UnknownModel(model))) if model == "Order"
            ));
        }

        #[tokio::test]
        async fn test_update_counts_final_table_rows() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT \"id\" FROM FINAL TABLE (UPDATE \"Customer\" SET \"name\"=? WHERE \"active\"=?)",
                vec![json!("Al"), json!(1)],
                rows(vec![json!({"id": 1}), json!({"id": 2})]),
            );
            let result = connector(mock)
                .update("Customer", &Where::eq("active", true), &row(json!({"name": "Al"})), &ExecuteOptions::default())
                .await
                .unwrap();
            assert_eq!(result.count, 2);
        }

        #[tokio::test]
        async fn test_update_without_matches_is_zero() {
            let mut mock = MockExecutor::new();
            mock.expect_execute().times(1).returning(|_, _, _| Ok(ExecutionResult::default()));
            let result = connector(mock)
                .update("Customer", &Where::eq("id", 99), &row(json!({"name": "X"})), &ExecuteOptions::default())
                .await
                .unwrap();
            assert_eq!(result.count, 0);
        }

        #[tokio::test]
        async fn test_destroy_all_selects_from_old_table() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT \"id\" FROM OLD TABLE (DELETE FROM \"Customer\" WHERE \"id\"=?)",
                vec![json!(5)],
                rows(vec![json!({"id": 5})]),
            );
            let result = connector(mock)
                .destroy_all("Customer", &Where::eq("id", 5), &ExecuteOptions::default())
                .await
                .unwrap();
            assert_eq!(result.count, 1);
        }

        #[tokio::test]
        async fn test_destroy_all_without_where() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT \"id\" FROM OLD TABLE (DELETE FROM \"Customer\")",
                vec![],
                rows(vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]),
            );
            let result = connector(mock)
                .destroy_all("Customer", &Where::all(), &ExecuteOptions::default())
                .await
                .unwrap();
            assert_eq!(result.count, 3);
        }

        #[tokio::test]
        async fn test_execution_error_passes_through_verbatim() {
            let error = ExecutionError::new("[SQL0803] Duplicate key value specified.")
                .with_sql_state("23505")
                .with_native_code(-803);
            let returned = error.clone();
            let mut mock = MockExecutor::new();
            mock.expect_execute().times(1).returning(move |_, _, _| Err(returned.clone()));
            let result = connector(mock)
                .create("Customer", &row(json!({"name": "Bob"})), &ExecuteOptions::default())
                .await;
            match result {
                Err(ConnectorError::Execution(passed)) => {
                    assert_eq!(passed, error);
                    assert_eq!(ConnectorError::Execution(passed).to_string(), error.to_string());
                }
                other => panic!("expected execution error, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_update_execution_error_passes_through_verbatim() {
            let error = ExecutionError::new("[SQL0913] Row or object CUSTOMER in APP type *FILE in use.")
                .with_sql_state("57033")
                .with_native_code(-913);
            let returned = error.clone();
            let mut mock = MockExecutor::new();
            mock.expect_execute()
                .withf(|sql, _, _| sql.starts_with("SELECT \"id\" FROM FINAL TABLE (UPDATE "))
                .times(1)
                .returning(move |_, _, _| Err(returned.clone()));
            let result = connector(mock)
                .update("Customer", &Where::eq("active", true), &row(json!({"name": "Al"})), &ExecuteOptions::default())
                .await;
            match result {
                Err(ConnectorError::Execution(passed)) => {
                    assert_eq!(passed, error);
                    assert_eq!(ConnectorError::Execution(passed).to_string(), error.to_string());
                }
                other => panic!("expected execution error, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_destroy_all_execution_error_passes_through_verbatim() {
            let error = ExecutionError::new("[SQL0532] Delete prevented by referential constraint ORDERS_FK.")
                .with_sql_state("23504")
                .with_native_code(-532);
            let returned = error.clone();
            let mut mock = MockExecutor::new();
            mock.expect_execute()
                .withf(|sql, _, _| sql.starts_with("SELECT \"id\" FROM OLD TABLE (DELETE "))
                .times(1)
                .returning(move |_, _, _| Err(returned.clone()));
            let result = connector(mock)
                .destroy_all("Customer", &Where::eq("id", 5), &ExecuteOptions::default())
                .await;
            match result {
                Err(ConnectorError::Execution(passed)) => {
                    assert_eq!(passed, error);
                    assert_eq!(ConnectorError::Execution(passed).to_string(), error.to_string());
                }
                other => panic!("expected execution error, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_all_renders_db2_paging() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT \"id\",\"name\",\"active\" FROM \"Customer\" ORDER BY \"id\" ASC OFFSET 4 ROWS FETCH FIRST 2 ROWS ONLY",
                vec![],
                rows(vec![json!({"ID": 5, "NAME": "Eve", "ACTIVE": 0})]),
            );
            let filter = Filter::default().limit(2).skip(4);
            let records = connector(mock).all("Customer", &filter, &ExecuteOptions::default()).await.unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(Value::Object(records[0].clone()), json!({"id": 5, "name": "Eve", "active": false}));
        }

        #[tokio::test]
        async fn test_count_reads_cnt() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT COUNT(*) AS \"cnt\" FROM \"Customer\" WHERE \"active\"=?",
                vec![json!(1)],
                rows(vec![json!({"CNT": 3})]),
            );
            let count = connector(mock)
                .count("Customer", &Where::eq("active", true), &ExecuteOptions::default())
                .await
                .unwrap();
            assert_eq!(count, 3);
        }

        #[tokio::test]
        async fn test_find_by_id() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT \"id\",\"name\",\"active\" FROM \"Customer\" WHERE \"id\"=? ORDER BY \"id\" ASC FETCH FIRST 1 ROWS ONLY",
                vec![json!(9)],
                rows(vec![]),
            );
            let found = connector(mock)
                .find_by_id("Customer", &json!(9), &ExecuteOptions::default())
                .await
                .unwrap();
            assert_eq!(found, None);
        }

        #[tokio::test]
        async fn test_execute_sql_rewrites_paging() {
            let mut mock = MockExecutor::new();
            expect_sql(
                &mut mock,
                "SELECT * FROM \"Customer\" OFFSET 10 ROWS FETCH FIRST 5 ROWS ONLY",
                vec![],
                rows(vec![]),
            );
            connector(mock)
                .execute_sql("SELECT * FROM \"Customer\" LIMIT 5 OFFSET 10", &[], &ExecuteOptions::default())
                .await
                .unwrap();
        }

        #[tokio::test]
        async fn test_execute_is_verbatim() {
            let mut mock = MockExecutor::new();
            expect_sql(&mut mock, "VALUES 1 LIMIT 1", vec![], rows(vec![]));
            connector(mock)
                .execute("VALUES 1 LIMIT 1", &[], &ExecuteOptions::default())
                .await
                .unwrap();
        }

        #[tokio::test]
        async fn test_options_reach_driver() {
            use crate::driver::structs::transaction_handle::TransactionHandle;

            let mut mock = MockExecutor::new();
            mock.expect_execute()
                .withf(|_, _, options| options.transaction == Some(TransactionHandle(4)))
                .times(1)
                .returning(|_, _, _| Ok(ExecutionResult::default()));
            let options = ExecuteOptions {
                transaction: Some(TransactionHandle(4)),
            };
            connector(mock)
                .destroy_all("Customer", &Where::all(), &options)
                .await
                .unwrap();
        }
    }

    mod transaction_tests {
        use super::*;
        use crate::connector::enums::transaction_state::TransactionState;
        use crate::connector::traits::transactional::Transactional;
        use crate::driver::enums::isolation_level::IsolationLevel;
        use crate::driver::structs::transaction_handle::TransactionHandle;
        use mockall::predicate::eq;

        #[tokio::test]
        async fn test_begin_and_commit() {
            let mut mock = MockExecutor::new();
            mock.expect_begin()
                .with(eq(IsolationLevel::RepeatableRead))
                .times(1)
                .returning(|_| Ok(TransactionHandle(3)));
            mock.expect_commit()
                .with(eq(TransactionHandle(3)))
                .times(1)
                .returning(|_| Ok(()));
            let connector = connector(mock);

            let mut transaction = connector.begin_transaction(IsolationLevel::RepeatableRead).await.unwrap();
            assert!(transaction.is_active());
            assert_eq!(transaction.options().transaction, Some(TransactionHandle(3)));
            connector.commit(&mut transaction).await.unwrap();
            assert_eq!(transaction.state(), TransactionState::Committed);

            let again = connector.commit(&mut transaction).await;
            assert!(matches!(
                again,
                Err(ConnectorError::TransactionFinished { id: 3, state: TransactionState::Committed })
            ));
            assert!(connector.rollback(&mut transaction).await.is_err());
        }

        #[tokio::test]
        async fn test_rollback() {
            let mut mock = MockExecutor::new();
            mock.expect_begin().times(1).returning(|_| Ok(TransactionHandle(8)));
            mock.expect_rollback()
                .with(eq(TransactionHandle(8)))
                .times(1)
                .returning(|_| Ok(()));
            let connector = connector(mock);

            let mut transaction = connector.begin_transaction(IsolationLevel::default()).await.unwrap();
            assert_eq!(transaction.isolation(), IsolationLevel::ReadCommitted);
            connector.rollback(&mut transaction).await.unwrap();
            assert_eq!(transaction.state(), TransactionState::RolledBack);
            assert_eq!(
                ConnectorError::TransactionFinished { id: 8, state: transaction.state() }.to_string(),
                "Transaction 8 is already rolled back"
            );
        }

        #[tokio::test]
        async fn test_failed_commit_keeps_transaction_active() {
            let mut mock = MockExecutor::new();
            mock.expect_begin().times(1).returning(|_| Ok(TransactionHandle(1)));
            mock.expect_commit()
                .times(1)
                .returning(|_| Err(ExecutionError::new("communication link failure").with_sql_state("08S01")));
            let connector = connector(mock);

            let mut transaction = connector.begin_transaction(IsolationLevel::Serializable).await.unwrap();
            let result = connector.commit(&mut transaction).await;
            assert!(matches!(result, Err(ConnectorError::Execution(ref e)) if e.is_connection_error()));
            assert!(transaction.is_active());
        }
    }

    mod data_source_tests {
        use super::*;
        use crate::connector::impls::data_source::initialize;
        use crate::connector::structs::data_source::DataSource;

        #[tokio::test]
        async fn test_lazy_initialize_does_not_connect() {
            let mut mock = MockExecutor::new();
            mock.expect_connect().times(0);
            let settings = ConnectionSettings {
                lazy_connect: true,
                ..Default::default()
            };
            let mut data_source = DataSource::new("db", settings, Arc::new(mock));
            assert!(matches!(data_source.connector(), Err(ConnectorError::NotInitialized(_))));
            initialize(&mut data_source).await.unwrap();
            assert!(data_source.is_initialized());
            assert_eq!(data_source.connector().unwrap().name(), "db2i");
        }

        #[tokio::test]
        async fn test_eager_initialize_connects() {
            let mut mock = MockExecutor::new();
            mock.expect_connect().times(1).returning(|| Ok(()));
            let mut data_source = DataSource::new("db", ConnectionSettings::default(), Arc::new(mock));
            initialize(&mut data_source).await.unwrap();
            assert!(data_source.is_initialized());
        }

        #[tokio::test]
        async fn test_eager_initialize_reports_connect_failure() {
            let mut mock = MockExecutor::new();
            mock.expect_connect()
                .times(1)
                .returning(|| Err(ExecutionError::new("host unreachable").with_sql_state("08001")));
            let mut data_source = DataSource::new("db", ConnectionSettings::default(), Arc::new(mock));
            let result = initialize(&mut data_source).await;
            assert!(matches!(result, Err(ConnectorError::Execution(_))));
        }

        #[tokio::test]
        async fn test_models_are_shared_with_connector() {
            let mock = MockExecutor::new();
            let settings = ConnectionSettings {
                lazy_connect: true,
                ..Default::default()
            };
            let mut data_source = DataSource::new("db", settings, Arc::new(mock));
            initialize(&mut data_source).await.unwrap();
            data_source.define(customer());
            let connector = data_source.connector().unwrap();
            assert_eq!(connector.base().id_name("Customer").unwrap(), "id");
        }
    }

    mod migration_tests {
        use super::*;
        use crate::connector::traits::migratable::Migratable;
        use parking_lot::Mutex;

        fn recording_mock(existing_table: bool, columns: Vec<&'static str>) -> (MockExecutor, Arc<Mutex<Vec<String>>>) {
            let statements = Arc::new(Mutex::new(Vec::new()));
            let recorded = statements.clone();
            let table_count = if existing_table { 1 } else { 0 };
            let mut mock = MockExecutor::new();
            mock.expect_execute().returning(move |sql, _, _| {
                recorded.lock().push(sql.to_string());
                if sql.contains("QSYS2.SYSTABLES") {
                    return Ok(rows(vec![json!({"cnt": table_count})]));
                }
                if sql.contains("QSYS2.SYSCOLUMNS") {
                    return Ok(rows(columns.iter().map(|column| json!({"column": column})).collect()));
                }
                Ok(ExecutionResult::affected(0))
            });
            (mock, statements)
        }

        #[test]
        fn test_build_create_table() {
            let connector = connector(MockExecutor::new());
            assert_eq!(
                connector.build_create_table(&customer()),
                "CREATE TABLE \"Customer\" (\"id\" INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY (START WITH 1, INCREMENT BY 1), \"name\" VARCHAR(64), \"active\" SMALLINT, PRIMARY KEY (\"id\"))"
            );
        }

        #[test]
        fn test_column_data_types() {
            let amount = PropertyDefinition::new("amount", PropertyType::Number).precision(12, 2);
            assert_eq!(Db2Connector::column_data_type(&amount), "DECIMAL(12,2)");
            let ratio = PropertyDefinition::new("ratio", PropertyType::Number);
            assert_eq!(Db2Connector::column_data_type(&ratio), "DOUBLE");
            let notes = PropertyDefinition::new("notes", PropertyType::String);
            assert_eq!(Db2Connector::column_data_type(&notes), "VARCHAR(512)");
            let created = PropertyDefinition::new("created", PropertyType::Date);
            assert_eq!(Db2Connector::column_data_type(&created), "TIMESTAMP");
        }

        #[tokio::test]
        async fn test_automigrate_drops_existing_table() {
            let (mock, statements) = recording_mock(true, vec![]);
            let connector = connector(mock);
            connector.automigrate(&[String::from("Customer")]).await.unwrap();
            let statements = statements.lock();
            assert_eq!(statements.len(), 3);
            assert!(statements[0].starts_with("SELECT COUNT(*) AS \"cnt\" FROM QSYS2.SYSTABLES WHERE TABLE_NAME = ? AND TABLE_SCHEMA = CURRENT SCHEMA"));
            assert_eq!(statements[1], "DROP TABLE \"Customer\"");
            assert!(statements[2].starts_with("CREATE TABLE \"Customer\""));
        }

        #[tokio::test]
        async fn test_automigrate_reads_text_table_count() {
            let statements = Arc::new(Mutex::new(Vec::new()));
            let recorded = statements.clone();
            let mut mock = MockExecutor::new();
            mock.expect_execute().returning(move |sql, _, _| {
                recorded.lock().push(sql.to_string());
                if sql.contains("QSYS2.SYSTABLES") {
                    return Ok(rows(vec![json!({"CNT": "1"})]));
                }
                Ok(ExecutionResult::affected(0))
            });
            connector(mock).automigrate(&[String::from("Customer")]).await.unwrap();
            let statements = statements.lock();
            assert_eq!(statements.len(), 3);
            assert_eq!(statements[1], "DROP TABLE \"Customer\"");
        }

        #[tokio::test]
        async fn test_table_exists_rejects_non_numeric_count() {
            let mut mock = MockExecutor::new();
            mock.expect_execute()
                .times(1)
                .returning(|_, _, _| Ok(rows(vec![json!({"cnt": "n/a"})])));
            let result = connector(mock).table_exists(&customer()).await;
            assert!(matches!(result, Err(ConnectorError::InvalidRow(_))));
        }

        #[tokio::test]
        async fn test_autoupdate_adds_missing_columns() {
            let (mock, statements) = recording_mock(true, vec!["id", "NAME"]);
            let connector = connector(mock);
            connector.autoupdate(&[]).await.unwrap();
            let statements = statements.lock();
            assert_eq!(
                statements.last().map(String::as_str),
                Some("ALTER TABLE \"Customer\" ADD COLUMN \"active\" SMALLINT")
            );
        }

        #[tokio::test]
        async fn test_is_actual() {
            let (mock, _) = recording_mock(true, vec!["id", "name", "active"]);
            assert!(connector(mock).is_actual(&[]).await.unwrap());
            let (mock, _) = recording_mock(true, vec!["id"]);
            assert!(!connector(mock).is_actual(&[]).await.unwrap());
            let (mock, _) = recording_mock(false, vec![]);
            assert!(!connector(mock).is_actual(&[]).await.unwrap());
        }

        #[tokio::test]
        async fn test_automigrate_unknown_model() {
            let connector = connector(MockExecutor::new());
            let result = connector.automigrate(&[String::from("Nope")]).await;
            assert!(matches!(result, Err(ConnectorError::Statement(StatementError::UnknownModel(_)))));
        }
    }

    mod discovery_tests {
        use super::*;
        use crate::connector::structs::discovery_options::DiscoveryOptions;
        use crate::connector::traits::discoverable::Discoverable;

        #[tokio::test]
        async fn test_discover_model_definitions() {
            let mut mock = MockExecutor::new();
            mock.expect_execute()
                .withf(|sql, params, _| {
                    sql.contains("FROM QSYS2.SYSTABLES WHERE TABLE_TYPE IN ('T','P') AND TABLE_SCHEMA = ?")
                        && sql.ends_with("ORDER BY TABLE_SCHEMA, TABLE_NAME FETCH FIRST 10 ROWS ONLY")
                        && params.to_vec() == vec![json!("APP")]
                })
                .times(1)
                .returning(|_, _, _| Ok(rows(vec![json!({"name": "CUSTOMER", "owner": "APP", "type": "table"})])));
            let options = DiscoveryOptions {
                owner: Some(String::from("APP")),
                limit: Some(10),
                ..Default::default()
            };
            let tables = connector(mock).discover_model_definitions(&options).await.unwrap();
            assert_eq!(tables.len(), 1);
            assert_eq!(tables[0].name, "CUSTOMER");
            assert_eq!(tables[0].table_type, "table");
        }

        #[tokio::test]
        async fn test_discover_schema() {
            let mut mock = MockExecutor::new();
            mock.expect_execute().times(2).returning(|sql, _, _| {
                if sql.contains("QSYS2.SYSCOLUMNS") {
                    return Ok(rows(vec![
                        json!({"owner": "APP", "tableName": "CUSTOMER", "columnName": "ID", "dataType": "INTEGER",
                               "dataLength": 4, "dataPrecision": 10, "dataScale": 0, "nullable": "N"}),
                        json!({"owner": "APP", "tableName": "CUSTOMER", "columnName": "NAME", "dataType": "VARCHAR",
                               "dataLength": 64, "dataPrecision": null, "dataScale": null, "nullable": "Y"}),
                        json!({"owner": "APP", "tableName": "CUSTOMER", "columnName": "BALANCE", "dataType": "DECIMAL",
                               "dataLength": 9, "dataPrecision": 9, "dataScale": 2, "nullable": "Y"}),
                    ]));
                }
                Ok(rows(vec![json!({"owner": "APP", "tableName": "CUSTOMER", "columnName": "ID", "keySeq": 1, "pkName": "CUSTOMER_PK"})]))
            });
            let definition = connector(mock)
                .discover_schema("CUSTOMER", &DiscoveryOptions::default())
                .await
                .unwrap();
            assert_eq!(definition.table_name(), "CUSTOMER");
            assert_eq!(definition.schema.as_deref(), Some("APP"));
            assert_eq!(definition.id_property().map(|property| property.name.as_str()), Some("ID"));
            let name = definition.property("NAME").unwrap();
            assert_eq!(name.property_type, PropertyType::String);
            assert_eq!(name.length, Some(64));
            assert!(!name.required);
            let balance = definition.property("BALANCE").unwrap();
            assert_eq!((balance.precision, balance.scale), (Some(9), Some(2)));
        }

        #[tokio::test]
        async fn test_discover_foreign_keys_query() {
            let mut mock = MockExecutor::new();
            mock.expect_execute()
                .withf(|sql, params, _| {
                    sql.starts_with("SELECT FK.TABLE_SCHEMA AS \"fkOwner\"")
                        && sql.contains("WHERE FK.TABLE_NAME = ? ORDER BY FK.COLUMN_POSITION")
                        && params.to_vec() == vec![json!("ORDERS")]
                })
                .times(1)
                .returning(|_, _, _| Ok(ExecutionResult::default()));
            let keys = connector(mock)
                .discover_foreign_keys("ORDERS", &DiscoveryOptions::default())
                .await
                .unwrap();
            assert!(keys.is_empty());
        }

        #[tokio::test]
        async fn test_malformed_catalog_row() {
            let mut mock = MockExecutor::new();
            mock.expect_execute()
                .times(1)
                .returning(|_, _, _| Ok(rows(vec![json!({"name": 1})])));
            let result = connector(mock).discover_model_definitions(&DiscoveryOptions::default()).await;
            assert!(matches!(result, Err(ConnectorError::InvalidRow(_))));
        }
    }
}
