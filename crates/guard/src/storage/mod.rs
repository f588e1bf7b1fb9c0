mod inmemory;

pub use inmemory::InMemoryEventStore;
