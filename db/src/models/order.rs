use mongodb::bson::Document;

/// A customer-submitted purchase request, stored verbatim in the `orders`
/// collection. Orders carry no schema beyond "is a JSON object": the caller
/// decides the shape and the store assigns the identity on insertion.
pub type Order = Document;
