mod repository;

pub use repository::InMemoryEventStore;
