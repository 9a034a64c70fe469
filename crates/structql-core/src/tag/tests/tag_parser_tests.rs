use crate::parse_tag;
use crate::DirectiveKind;
use crate::TagParseError;
use crate::Token;

// =============================================================================
// Names, keep, and empty clauses
// =============================================================================

#[test]
fn empty_tag_produces_default_field() {
    let field = parse_tag("").unwrap();

    assert_eq!(field.decl().name(), "");
    assert_eq!(field.decl().alias(), None);
    assert!(field.decl().tokens().is_empty());
    assert!(field.directives().is_empty());
    assert!(!field.keep());
}

#[test]
fn bare_identifier_overrides_name() {
    let field = parse_tag("FieldOneOverride").unwrap();

    assert_eq!(field.decl().name(), "FieldOneOverride");
    assert_eq!(field.decl().template(), None);
    assert!(!field.keep());
}

#[test]
fn keep_keyword_sets_keep_without_renaming() {
    let field = parse_tag("keep").unwrap();

    assert_eq!(field.decl().name(), "");
    assert!(field.keep());
}

#[test]
fn keep_keyword_combines_with_name() {
    let field = parse_tag("user, keep").unwrap();

    assert_eq!(field.decl().name(), "user");
    assert!(field.keep());
}

#[test]
fn empty_and_whitespace_clauses_are_ignored() {
    let field = parse_tag(" , user,,   ,").unwrap();

    assert_eq!(field.decl().name(), "user");
    assert!(!field.keep());
}

#[test]
fn later_name_clause_replaces_earlier_declaration() {
    let field = parse_tag("user(id:$id<ID!>),account").unwrap();

    assert_eq!(field.decl().name(), "account");
    assert!(field.decl().tokens().is_empty());
    // The argument list already forced the field to be kept.
    assert!(field.keep());
}

// =============================================================================
// Declarations with arguments
// =============================================================================

#[test]
fn declaration_with_single_argument() {
    let field = parse_tag("testQuery(id:$id<ID!>)").unwrap();

    assert_eq!(field.decl().name(), "testQuery");
    assert_eq!(field.decl().tokens(), &[Token::new("ID!", "id", "id")]);
    assert_eq!(field.decl().template(), Some("id: $id"));
    assert_eq!(field.decl().to_string(), "testQuery(id: $id)");
    assert!(field.keep());
}

#[test]
fn declaration_with_list_argument() {
    let field = parse_tag("testQuery(id:$id<ID!>,list:$list<[List!]>)").unwrap();

    assert_eq!(
        field.decl().tokens(),
        &[
            Token::new("ID!", "id", "id"),
            Token::new("[List!]", "list", "list"),
        ],
    );
    assert_eq!(field.decl().template(), Some("id: $id, list: $list"));
}

#[test]
fn declaration_argument_and_variable_names_may_differ() {
    let field = parse_tag("getUser(name:$userName<String!>,age:$age<Int>)").unwrap();

    let tokens = field.decl().tokens();
    assert_eq!(tokens[0].name(), "name");
    assert_eq!(tokens[0].arg(), "userName");
    assert_eq!(tokens[0].kind(), "String!");
    assert_eq!(tokens[1].kind(), "Int");
    assert_eq!(field.decl().to_string(), "getUser(name: $userName, age: $age)");
}

#[test]
fn declaration_accepts_non_null_and_nested_lists() {
    let field = parse_tag("search(ids:$ids<[ID!]!>,matrix:$matrix<[[Int]]>)").unwrap();

    let kinds: Vec<_> = field.decl().tokens().iter().map(Token::kind).collect();
    assert_eq!(kinds, vec!["[ID!]!", "[[Int]]"]);
}

#[test]
fn declaration_tolerates_whitespace_and_trailing_comma() {
    let field = parse_tag("user( id : $id<ID!> , name:$name<String>, )").unwrap();

    assert_eq!(field.decl().tokens().len(), 2);
    assert_eq!(field.decl().template(), Some("id: $id, name: $name"));
}

#[test]
fn declaration_with_empty_argument_list_is_kept_but_renders_bare() {
    let field = parse_tag("viewer()").unwrap();

    assert_eq!(field.decl().name(), "viewer");
    assert!(field.decl().tokens().is_empty());
    assert_eq!(field.decl().to_string(), "viewer");
    assert!(field.keep());
}

// =============================================================================
// Aliases and directives
// =============================================================================

#[test]
fn alias_is_stored_on_declaration() {
    let field = parse_tag("@alias(fieldOneAlias)").unwrap();

    assert_eq!(field.decl().alias(), Some("fieldOneAlias"));
    assert!(field.directives().is_empty());
}

#[test]
fn alias_applies_regardless_of_clause_order() {
    let field = parse_tag("@alias(me),getUser(id:$id<ID!>)").unwrap();

    assert_eq!(field.decl().to_string(), "me: getUser(id: $id)");
}

#[test]
fn last_alias_wins() {
    let field = parse_tag("@alias(first),@alias(second)").unwrap();

    assert_eq!(field.decl().alias(), Some("second"));
}

#[test]
fn skip_directive_with_variable_declares_boolean_token() {
    let field = parse_tag("@skip($ifCondition)").unwrap();

    let directive = &field.directives()[0];
    assert_eq!(directive.kind(), DirectiveKind::Skip);
    assert_eq!(directive.template(), "$ifCondition");
    assert_eq!(directive.token(), Some(&Token::new("Boolean!", "", "ifCondition")));
    assert_eq!(directive.to_string(), "@skip(if: $ifCondition)");
}

#[test]
fn include_directive_with_literal_has_no_token() {
    let field = parse_tag("@include(true)").unwrap();

    let directive = &field.directives()[0];
    assert_eq!(directive.kind(), DirectiveKind::Include);
    assert_eq!(directive.token(), None);
    assert_eq!(directive.to_string(), "@include(if: true)");
}

#[test]
fn skip_and_include_keep_declaration_order() {
    let field = parse_tag("@skip($a),@include($b)").unwrap();

    let kinds: Vec<_> = field.directives().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DirectiveKind::Skip, DirectiveKind::Include]);
}

#[test]
fn complex_tag_combines_every_clause_kind() {
    let field = parse_tag(
        "getUser(id:$id<ID!>), @alias(me), @include($withUser), keep",
    ).unwrap();

    assert_eq!(field.decl().to_string(), "me: getUser(id: $id)");
    assert_eq!(field.directives().len(), 1);
    assert_eq!(field.tokens().len(), 2);
    assert!(field.keep());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn duplicate_skip_is_rejected() {
    let result = parse_tag("@skip($a),@skip($b)");

    assert_eq!(
        result,
        Err(TagParseError::DuplicateDirective {
            directive: DirectiveKind::Skip,
            tag: "@skip($a),@skip($b)".to_string(),
        }),
    );
}

#[test]
fn duplicate_include_is_rejected() {
    let result = parse_tag("@include($a), @include(true)");

    assert!(matches!(
        result,
        Err(TagParseError::DuplicateDirective {
            directive: DirectiveKind::Include,
            ..
        }),
    ));
}

#[test]
fn unknown_directive_is_rejected() {
    let result = parse_tag("@deprecated(reason)");

    assert_eq!(
        result,
        Err(TagParseError::UnknownDirective {
            directive_name: "deprecated".to_string(),
            tag: "@deprecated(reason)".to_string(),
        }),
    );
}

#[test]
fn alias_with_variable_is_rejected() {
    let result = parse_tag("@alias($name)");

    assert!(matches!(result, Err(TagParseError::MalformedClause { .. })));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(
        parse_tag("user(id:$id<ID!>"),
        Err(TagParseError::UnbalancedParentheses { .. }),
    ));
    assert!(matches!(
        parse_tag("user)"),
        Err(TagParseError::UnbalancedParentheses { .. }),
    ));
}

#[test]
fn malformed_clauses_are_rejected() {
    let malformed = [
        "user name",
        "user(id<ID!>)",
        "user(id:id<ID!>)",
        "user(id:$id)",
        "user(id:$id<[ID!>)",
        "user(id:$id<ID!>)extra",
        "@skip",
        "@skip()",
        "@skip($a)b",
        "keep!",
        "naïve",
    ];

    for tag in malformed {
        let result = parse_tag(tag);
        assert!(
            matches!(result, Err(TagParseError::MalformedClause { .. })),
            "Expected MalformedClause for `{tag}`, got {result:?}",
        );
    }
}

#[test]
fn malformed_clause_error_names_tag_and_clause() {
    let err = parse_tag("user, bad clause").unwrap_err();

    match &err {
        TagParseError::MalformedClause { clause, tag, .. } => {
            assert_eq!(clause, "bad clause");
            assert_eq!(tag, "user, bad clause");
        },
        other => panic!("Expected MalformedClause, got {other:?}"),
    }
    assert!(err.to_string().contains("`user, bad clause`"));
}
