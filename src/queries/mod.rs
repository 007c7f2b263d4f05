pub mod contact_queries;
pub mod birthday_queries;
