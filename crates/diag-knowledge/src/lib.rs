mod store;

pub use store::InMemoryKnowledgeBase;
