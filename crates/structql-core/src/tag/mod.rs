mod tag_parse_error;
mod tag_parser;

pub use tag_parse_error::TagParseError;
pub use tag_parser::parse_tag;

#[cfg(test)]
mod tests;
