use crate::core::library::LibraryResult;

pub trait Repository<Entity>: Sync + Send {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, the stored version must match the entity version
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> Option<&Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<usize>;

    // find all entities matching predicate in insertion order
    fn query(&self, predicate: &dyn Fn(&Entity) -> bool) -> Vec<Entity>;
}
