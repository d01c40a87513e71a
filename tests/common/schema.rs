//! Sample records shared by the integration tests.

use rowbind::prelude::*;

/// Two unique identifiers, both with `is_set`: `id` wins when set, `slug`
/// otherwise.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Animal {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub age: i32,
}

impl Animal {
    pub fn new(slug: &str, name: &str, age: i32) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            age,
            ..Default::default()
        }
    }

    pub fn row(id: i64, slug: &str, name: &str, age: i32) -> Vec<Value> {
        vec![
            Value::Bigint(id),
            Value::from(slug),
            Value::from(name),
            Value::Integer(age),
        ]
    }
}

impl Model for Animal {
    fn configuration(&mut self) -> Configuration<'_> {
        Configuration::new("animals")
            .field(Field::new("id", &mut self.id).unique().is_set(is_set::non_zero))
            .field(
                Field::new("slug", &mut self.slug)
                    .insertable()
                    .unique()
                    .is_set(is_set::non_empty),
            )
            .field(Field::new("name", &mut self.name).insertable().updatable())
            .field(Field::new("age", &mut self.age).insertable().updatable())
    }
}

/// A sole unique identifier without `is_set`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Person {
    pub fn row(id: i64, name: &str) -> Vec<Value> {
        vec![Value::Bigint(id), Value::from(name)]
    }
}

impl Model for Person {
    fn configuration(&mut self) -> Configuration<'_> {
        Configuration::new("people")
            .field(Field::new("id", &mut self.id).unique())
            .field(Field::new("name", &mut self.name).insertable().updatable())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub owner_id: Option<i64>,
    pub owner: Option<Person>,
}

impl Pet {
    pub fn row(id: i64, name: &str, owner_id: Option<i64>) -> Vec<Value> {
        vec![Value::Bigint(id), Value::from(name), Value::from(owner_id)]
    }
}

impl Model for Pet {
    fn configuration(&mut self) -> Configuration<'_> {
        Configuration::new("pets")
            .field(Field::new("id", &mut self.id).unique().is_set(is_set::non_zero))
            .field(Field::new("name", &mut self.name).insertable().updatable())
            .field(
                Field::new("owner_id", &mut self.owner_id)
                    .insertable()
                    .updatable()
                    .references(Reference::to("id", &mut self.owner)),
            )
    }
}

/// Two levels of references: toy -> pet -> person.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Toy {
    pub id: i64,
    pub pet_id: i64,
    pub pet: Option<Pet>,
}

impl Toy {
    pub fn row(id: i64, pet_id: i64) -> Vec<Value> {
        vec![Value::Bigint(id), Value::Bigint(pet_id)]
    }
}

impl Model for Toy {
    fn configuration(&mut self) -> Configuration<'_> {
        Configuration::new("toys")
            .field(Field::new("id", &mut self.id).unique().is_set(is_set::non_zero))
            .field(
                Field::new("pet_id", &mut self.pet_id)
                    .insertable()
                    .is_set(is_set::non_zero)
                    .references(Reference::to("id", &mut self.pet)),
            )
    }
}

/// `code` is a second unique identifier without `is_set`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Badge {
    pub id: i64,
    pub code: String,
    pub label: String,
}

impl Model for Badge {
    fn configuration(&mut self) -> Configuration<'_> {
        Configuration::new("badges")
            .field(Field::new("id", &mut self.id).unique().is_set(is_set::non_zero))
            .field(Field::new("code", &mut self.code).insertable().unique())
            .field(Field::new("label", &mut self.label).insertable().updatable())
    }
}
