pub mod books;

pub use books::{app, book_routes, cors_layer};
