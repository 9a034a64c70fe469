
/// Assert that `document` parses as an executable GraphQL document.
fn assert_valid_graphql(document: &str) {
    if let Err(err) = graphql_parser::parse_query::<&str>(document) {
        panic!("Rendered document is not valid GraphQL ({err}):\n{document}");
    }
}
