//! End-to-end tests through the facade crate
//!
//! A prepared statement returns rows as struct values, which are then read
//! back with accessors and casts.

use async_trait::async_trait;
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use yql::table::{Connection, NamedValue, QueryMode, Statement, TableResult};
use yql::types::PrimitiveType;
use yql::{ErrorKind, Type, Value, cast_to, list_items, struct_fields};

struct UsersConnection;

#[async_trait]
impl Connection for UsersConnection {
    type Rows = Value;
    type ExecResult = ();

    fn is_closed(&self) -> bool {
        false
    }

    fn default_query_mode(&self) -> QueryMode {
        QueryMode::Data
    }

    async fn query(&self, _query: &str, args: &[NamedValue]) -> TableResult<Self::Rows> {
        let id = args
            .iter()
            .find(|arg| arg.name == "$id")
            .map(|arg| arg.value.clone())
            .unwrap_or_else(|| Value::null(Type::primitive(PrimitiveType::Uint64)));
        Ok(Value::list([Value::structure([
            ("id", id),
            ("name", Value::utf8("alice")),
            ("tags", Value::list([Value::utf8("admin")])),
        ])]))
    }

    async fn exec(&self, _query: &str, _args: &[NamedValue]) -> TableResult<Self::ExecResult> {
        Ok(())
    }
}

#[tokio::test]
async fn test_rows_read_back() {
    let params = IndexMap::from([("$id".to_string(), Type::primitive(PrimitiveType::Uint64))]);
    let stmt = Statement::new(
        Arc::new(UsersConnection),
        "DECLARE $id AS Uint64; SELECT id, name, tags FROM users WHERE id = $id",
        params,
    );

    let rows = stmt
        .query(None, &[NamedValue::new("$id", Value::uint64(42))])
        .await
        .unwrap();
    assert_eq!(rows.yql(), "List<Struct<'id':Uint64,'name':Utf8,'tags':List<Utf8>>>");

    let rows = list_items(&rows).unwrap();
    let fields = struct_fields(&rows[0]).unwrap();

    let mut id = 0u64;
    cast_to(fields.get("id"), &mut id).unwrap();
    assert_eq!(id, 42);

    let mut name = String::new();
    cast_to(fields.get("name"), &mut name).unwrap();
    assert_eq!(name, "alice");

    let mut missing = String::from("untouched");
    let err = cast_to(fields.get("email"), &mut missing).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilValue);
    assert_eq!(missing, "untouched");

    let mut tags = 0i32;
    let err = cast_to(fields.get("tags"), &mut tags).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CastIncompatible);
    assert!(err.to_string().contains("List<Utf8>"));
}
