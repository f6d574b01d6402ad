pub mod fixtures;

use fieldpath::{DynamicMessage, FieldPathEngine};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Builds an engine over the address-book schema.
pub fn engine(create_missing: bool) -> FieldPathEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    FieldPathEngine::builder()
        .with_schema_source(&fixtures::address_book_schema().to_string())
        .expect("fixture schema is valid")
        .create_missing(create_missing)
        .build()
        .expect("engine builds")
}

pub fn new_person(engine: &FieldPathEngine) -> DynamicMessage {
    engine
        .new_message("example.Person")
        .expect("Person is registered")
}
