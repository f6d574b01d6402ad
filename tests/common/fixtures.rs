use serde_json::{Value, json};

/// An address-book schema exercising every field shape.
pub fn address_book_schema() -> Value {
    json!({
        "messages": [
            {
                "name": "example.Person",
                "fields": [
                    { "name": "name", "number": 1, "type": "string" },
                    { "name": "id", "number": 2, "type": "int32" },
                    { "name": "home", "number": 3, "type": "message", "type_name": "example.Address" },
                    { "name": "addresses", "number": 4, "type": "message",
                      "type_name": "example.Address", "label": "repeated" },
                    { "name": "emails", "number": 5, "type": "string", "label": "repeated" },
                    { "name": "attributes", "number": 6, "type": "map", "key": "string", "value": "string" },
                    { "name": "verified", "number": 7, "type": "bool" }
                ]
            },
            {
                "name": "example.Address",
                "fields": [
                    { "name": "street", "number": 1, "type": "string" },
                    { "name": "city", "number": 2, "type": "string" },
                    { "name": "location", "number": 3, "type": "message", "type_name": "example.Point" }
                ]
            },
            {
                "name": "example.Point",
                "fields": [
                    { "name": "lat", "number": 1, "type": "double" },
                    { "name": "lng", "number": 2, "type": "double" }
                ]
            }
        ]
    })
}
