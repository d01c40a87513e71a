use common::ScriptedBackend;
use common::schema::{Animal, Badge, Person, Pet};
use rowbind::prelude::*;

mod common;

#[test]
fn update_binds_the_identifier_last() {
    let backend = ScriptedBackend::new();
    backend.one(Animal::row(4, "rigby", "Rigby Jr.", 4));
    let mut db = backend.db();

    let mut animal = Animal {
        id: 4,
        slug: "rigby".into(),
        name: "Rigby Jr.".into(),
        age: 4,
    };
    animal.update(&mut db).unwrap();

    let calls = backend.calls();
    assert_eq!(
        calls[0].sql,
        "UPDATE animals SET name=$1, age=$2 WHERE id=$3 RETURNING id, slug, name, age"
    );
    assert_eq!(
        calls[0].args,
        vec![Value::from("Rigby Jr."), Value::Integer(4), Value::Bigint(4)]
    );
}

#[test]
fn update_materializes_the_returned_row() {
    let backend = ScriptedBackend::new();
    backend.one(Animal::row(4, "rigby", "Rigby", 5));
    let mut db = backend.db();

    let mut animal = Animal {
        slug: "rigby".into(),
        name: "Rigby".into(),
        ..Default::default()
    };
    animal.update(&mut db).unwrap();

    assert_eq!(
        backend.calls()[0].sql,
        "UPDATE animals SET name=$1, age=$2 WHERE slug=$3 RETURNING id, slug, name, age"
    );
    assert_eq!(animal.id, 4);
    assert_eq!(animal.age, 5);
}

#[test]
fn update_of_a_missing_row_is_not_found() {
    let backend = ScriptedBackend::new();
    backend.none();
    let mut db = backend.db();

    let mut animal = Animal {
        id: 12,
        ..Default::default()
    };
    let err = animal.update(&mut db).unwrap_err();

    assert!(matches!(err, RowbindError::NotFound { table: "animals" }));
}

#[test]
fn update_assumes_identifiers_without_is_set_are_set() {
    let backend = ScriptedBackend::new();
    backend.one(vec![
        Value::Bigint(3),
        Value::from("gold"),
        Value::from("Gold star"),
    ]);
    let mut db = backend.db();

    let mut badge = Badge {
        code: "gold".into(),
        label: "Gold star".into(),
        ..Default::default()
    };
    badge.update(&mut db).unwrap();

    assert_eq!(
        backend.sql(),
        vec!["UPDATE badges SET label=$1 WHERE code=$2 RETURNING id, code, label"]
    );
    assert_eq!(badge.id, 3);
}

#[test]
fn update_reloads_a_changed_reference() {
    let backend = ScriptedBackend::new();
    backend
        .one(Pet::row(2, "Rex", Some(8)))
        .one(Person::row(8, "Linus"));
    let mut db = backend.db();

    let mut pet = Pet {
        id: 2,
        name: "Rex".into(),
        owner_id: Some(8),
        owner: Some(Person {
            id: 7,
            name: "Ada".into(),
        }),
    };
    pet.update(&mut db).unwrap();

    assert_eq!(backend.calls()[1].args, vec![Value::Bigint(8)]);
    assert_eq!(pet.owner.map(|owner| owner.id), Some(8));
}
