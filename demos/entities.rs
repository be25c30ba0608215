//! Builds a small forest of entities and walks through every forest operation, printing what happens.

use coppice::{Forest, InsertError, NotFound};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entity {
    id: i32,
}
impl Entity {
    fn new(id: i32) -> Self {
        Self { id }
    }
}

fn with_id(id: i32) -> impl Fn(&Entity) -> bool {
    move |entity| entity.id == id
}

fn print_all(forest: &Forest<Entity>) {
    let mut ids = Vec::new();
    forest.for_all(|entity| ids.push(entity.id));
    println!("forest ({} nodes, {} roots): {:?}", forest.len(), forest.num_roots(), ids);
}

fn main() -> Result<(), InsertError> {
    let mut forest = Forest::<Entity>::new();
    for id in [-1, 1, 2, 3, 4, 5].iter().copied() {
        forest.insert(Entity::new(id))?;
    }
    print_all(&forest);

    forest.insert_child(with_id(5), Entity::new(56))?;
    forest.insert_child_with(with_id(56), || Entity::new(560))?;
    print_all(&forest);

    match forest.insert_child(with_id(42), Entity::new(420)) {
        Err(InsertError::NoMatch) => println!("no entity with id 42 to attach 420 to"),
        other => other?,
    }

    print!("entities with even ids:");
    forest.for_all_filtered(|entity| print!(" {}", entity.id), |entity| entity.id % 2 == 0);
    println!();

    if let Ok(entity) = forest.get(with_id(3)) {
        println!("found {:?}", entity);
    }
    if let Err(NotFound) = forest.get(with_id(6)) {
        println!("no entity with id 6");
    }

    let mut descendants = Vec::new();
    match forest.erase_with(with_id(5), |entity| descendants.push(entity.id)) {
        Ok(entity) => println!("erased {:?} along with {:?}", entity, descendants),
        Err(error) => println!("{}", error),
    }
    println!("contains 56: {}", forest.contains(with_id(56)));
    println!("contains 3: {}", forest.contains(with_id(3)));
    print_all(&forest);

    forest.defragment();
    println!("holes after defragmenting: {}", forest.num_holes());
    Ok(())
}
