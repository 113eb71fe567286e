pub mod gradebook_session;
pub mod ranking;
pub mod row_parser;
