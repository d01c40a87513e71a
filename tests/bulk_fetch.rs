use common::schema::Animal;
use common::{Method, ScriptedBackend};
use rowbind::prelude::*;
use rowbind::PredicateKind;

mod common;

#[test]
fn bulk_fetch_renders_and_materializes_in_order() {
    let backend = ScriptedBackend::new();
    backend.many(vec![
        Animal::row(2, "mordecai", "Mordecai", 7),
        Animal::row(1, "rigby", "Rigby", 3),
    ]);
    let mut db = backend.db();

    let options = BulkFetchOptions::new()
        .limit(10)
        .offset(5)
        .predicate(Predicate::ge("age", 2))
        .predicate(Predicate::not_in("slug", ["benson", "pops"]))
        .order_by(OrderBy::desc("age"));
    let animals: Vec<Animal> = db.bulk_fetch(&options).unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0].method, Method::QueryMany);
    assert_eq!(
        calls[0].sql,
        "SELECT id, slug, name, age FROM animals WHERE age >= $1 AND slug NOT IN ($2, $3) \
         ORDER BY age DESC LIMIT 10 OFFSET 5"
    );
    assert_eq!(
        calls[0].args,
        vec![Value::Integer(2), Value::from("benson"), Value::from("pops")]
    );

    let names: Vec<&str> = animals.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Mordecai", "Rigby"]);
    assert_eq!(animals[1].id, 1);
}

#[test]
fn sort_shorthand_orders_the_query() {
    let backend = ScriptedBackend::new();
    backend.many(Vec::new());
    let mut db = backend.db();

    let options = BulkFetchOptions::new().limit(20).consume_sort_query("-name,id");
    let animals = Animal::bulk_fetch(&mut db, &options).unwrap();

    assert!(animals.is_empty());
    assert_eq!(
        backend.sql(),
        vec!["SELECT id, slug, name, age FROM animals ORDER BY name DESC, id ASC LIMIT 20 OFFSET 0"]
    );
}

#[test]
fn unknown_order_by_column_fails_before_the_backend() {
    let backend = ScriptedBackend::new();
    let mut db = backend.db();

    let options = BulkFetchOptions::new().limit(5).consume_sort_query("weight");
    let err = db.bulk_fetch::<Animal>(&options).unwrap_err();

    assert!(matches!(
        &err,
        RowbindError::InvalidOrderBy { table: "animals", column } if column == "weight"
    ));
    assert!(backend.calls().is_empty());
}

#[test]
fn null_predicates_bind_nothing() {
    let backend = ScriptedBackend::new();
    backend.many(Vec::new());
    let mut db = backend.db();

    let options = BulkFetchOptions::new()
        .limit(1)
        .predicate(Predicate::is_not_null("slug"))
        .predicate(Predicate::like("name", "R%"));
    let _: Vec<Animal> = db.bulk_fetch(&options).unwrap();

    let calls = backend.calls();
    assert_eq!(
        calls[0].sql,
        "SELECT id, slug, name, age FROM animals WHERE slug IS NOT NULL AND name LIKE $1 LIMIT 1 OFFSET 0"
    );
    assert_eq!(calls[0].args, vec![Value::from("R%")]);
}

#[test]
#[should_panic(expected = "`WHERE_IN` predicates require at least one value.")]
fn empty_in_list_panics() {
    let backend = ScriptedBackend::new();
    let mut db = backend.db();

    let options = BulkFetchOptions::new()
        .limit(1)
        .predicate(Predicate::in_list("id", Vec::<i64>::new()));
    let _ = db.bulk_fetch::<Animal>(&options);
}

#[test]
#[should_panic(expected = "require exactly one value, got 2")]
fn comparison_with_two_values_panics() {
    let backend = ScriptedBackend::new();
    let mut db = backend.db();

    let options = BulkFetchOptions::new().limit(1).predicate(Predicate::new(
        "age",
        PredicateKind::Gt,
        vec![Value::Integer(1), Value::Integer(2)],
    ));
    let _ = db.bulk_fetch::<Animal>(&options);
}

#[test]
fn malformed_rows_fail_the_batch() {
    let backend = ScriptedBackend::new();
    backend.many(vec![
        Animal::row(1, "rigby", "Rigby", 3),
        vec![Value::Bigint(2)],
    ]);
    let mut db = backend.db();

    let err = db
        .bulk_fetch::<Animal>(&BulkFetchOptions::new().limit(2))
        .unwrap_err();
    assert!(matches!(err, RowbindError::ColumnCount { .. }));
}
