//! Parser for the annotation tags attached to fields.
//!
//! A tag is a comma-separated list of clauses. Commas nested inside
//! parentheses do not separate clauses:
//!
//! ```text
//! user(id:$id<ID!>,tags:$tags<[String!]>), @alias(me), @include($withUser)
//! ```
//!
//! Supported clauses:
//!
//! - `name`: overrides the rendered field name.
//! - `name(arg:$var<Type>, ...)`: overrides the name and declares arguments.
//!   Implies `keep`.
//! - `@alias(alias)`: renders the field as `alias: name`. When repeated, the
//!   last alias wins.
//! - `@skip(arg)` / `@include(arg)`: conditional inclusion. A `$var` argument
//!   declares a `Boolean!` variable. At most one of each per tag.
//! - `keep`: always render the field, regardless of any sparse fieldset.
//!
//! Empty clauses (e.g. from a trailing comma) are ignored.

use crate::Declaration;
use crate::Directive;
use crate::DirectiveKind;
use crate::Field;
use crate::TagParseError;
use crate::Token;

const KEEP_KEYWORD: &str = "keep";

type Result<T> = std::result::Result<T, TagParseError>;

/// Parse the raw text of a tag into a partially populated [`Field`] (its
/// [`Declaration`], [`Directive`]s and `keep` flag). Child fields are
/// assembled separately by the tree builder.
///
/// ```rust
/// use structql_core::parse_tag;
///
/// let field = parse_tag("getUser(id:$id<ID!>),@alias(me)").unwrap();
/// assert_eq!(field.decl().to_string(), "me: getUser(id: $id)");
/// assert!(field.keep());
/// ```
pub fn parse_tag(tag: &str) -> Result<Field> {
    let mut field = Field::default();
    let mut alias = None;

    for clause in split_clauses(tag)? {
        let clause = clause.trim();
        if clause.is_empty() {
            continue
        }

        if clause == KEEP_KEYWORD {
            field.keep = true;
            continue
        }

        match ClauseParser::new(clause, tag).parse_clause()? {
            TagClause::Alias(name) => alias = Some(name.to_string()),

            TagClause::Declaration { name, tokens } => {
                field.decl = Declaration::with_tokens(name, tokens);
                field.keep = true;
            },

            TagClause::Directive(kind, template) => {
                if field.directives.iter().any(|directive| directive.kind == kind) {
                    return Err(TagParseError::DuplicateDirective {
                        directive: kind,
                        tag: tag.to_string(),
                    });
                }
                field.directives.push(Directive::new(kind, template));
            },

            TagClause::Name(name) => field.decl = Declaration::new(name),
        }
    }

    field.decl.alias = alias;
    Ok(field)
}

/// Split a tag on every comma that is not nested inside parentheses.
fn split_clauses(tag: &str) -> Result<Vec<&str>> {
    let mut clauses = vec![];
    let mut depth: usize = 0;
    let mut clause_start = 0;

    for (idx, ch) in tag.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    TagParseError::UnbalancedParentheses {
                        tag: tag.to_string(),
                    }
                })?;
            },
            ',' if depth == 0 => {
                clauses.push(&tag[clause_start..idx]);
                clause_start = idx + 1;
            },
            _ => (),
        }
    }

    if depth != 0 {
        return Err(TagParseError::UnbalancedParentheses {
            tag: tag.to_string(),
        });
    }

    clauses.push(&tag[clause_start..]);
    Ok(clauses)
}

#[derive(Debug, PartialEq)]
enum TagClause<'src> {
    Alias(&'src str),
    Declaration {
        name: &'src str,
        tokens: Vec<Token>,
    },
    Directive(DirectiveKind, &'src str),
    Name(&'src str),
}

/// Single-pass byte cursor over one trimmed clause. The clause grammar is
/// pure ASCII, so any non-ASCII byte is reported as unexpected.
struct ClauseParser<'src> {
    clause: &'src str,
    offset: usize,
    tag: &'src str,
}
impl<'src> ClauseParser<'src> {
    fn new(clause: &'src str, tag: &'src str) -> Self {
        Self {
            clause,
            offset: 0,
            tag,
        }
    }

    fn parse_clause(mut self) -> Result<TagClause<'src>> {
        if self.consume_if(b'@') {
            return self.parse_directive();
        }

        let name = self.parse_word()?;
        if self.is_at_end() {
            return Ok(TagClause::Name(name));
        }

        self.expect(b'(', "`(` or end of clause")?;
        let tokens = self.parse_arguments()?;
        self.expect_end()?;

        Ok(TagClause::Declaration { name, tokens })
    }

    fn parse_directive(&mut self) -> Result<TagClause<'src>> {
        let directive_name = self.parse_word()?;
        self.expect(b'(', "`(`")?;
        self.skip_whitespace();

        let template_start = self.offset;
        let is_variable = self.consume_if(b'$');
        self.parse_word()?;
        let template = &self.clause[template_start..self.offset];

        self.skip_whitespace();
        self.expect(b')', "`)`")?;
        self.expect_end()?;

        match directive_name {
            "alias" if is_variable => Err(TagParseError::MalformedClause {
                clause: self.clause.to_string(),
                expected: "an alias name rather than a variable",
                offset: template_start,
                tag: self.tag.to_string(),
            }),
            "alias" => Ok(TagClause::Alias(template)),
            "include" => Ok(TagClause::Directive(DirectiveKind::Include, template)),
            "skip" => Ok(TagClause::Directive(DirectiveKind::Skip, template)),
            _ => Err(TagParseError::UnknownDirective {
                directive_name: directive_name.to_string(),
                tag: self.tag.to_string(),
            }),
        }
    }

    /// Parses `name:$var<Type>` triples up to and including the closing `)`.
    /// A trailing comma before the `)` is allowed.
    fn parse_arguments(&mut self) -> Result<Vec<Token>> {
        let mut tokens = vec![];
        loop {
            self.skip_whitespace();
            if self.consume_if(b')') {
                return Ok(tokens);
            }

            let name = self.parse_word()?;
            self.skip_whitespace();
            self.expect(b':', "`:`")?;
            self.skip_whitespace();
            self.expect(b'$', "`$`")?;
            let arg = self.parse_word()?;
            self.skip_whitespace();
            self.expect(b'<', "`<`")?;
            let kind = self.parse_type_annotation()?;
            self.expect(b'>', "`>`")?;
            tokens.push(Token::new(kind, name, arg));

            self.skip_whitespace();
            if !self.consume_if(b',') {
                self.expect(b')', "`,` or `)`")?;
                return Ok(tokens);
            }
        }
    }

    /// Parses a GraphQL type annotation such as `ID`, `ID!`, `[ID!]!` or
    /// `[[Int]]` and returns its source text.
    fn parse_type_annotation(&mut self) -> Result<&'src str> {
        let start = self.offset;
        self.parse_type_annotation_impl()?;
        Ok(&self.clause[start..self.offset])
    }

    fn parse_type_annotation_impl(&mut self) -> Result<()> {
        if self.consume_if(b'[') {
            self.parse_type_annotation_impl()?;
            self.expect(b']', "`]`")?;
        } else {
            self.parse_word()?;
        }
        self.consume_if(b'!');
        Ok(())
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    fn peek(&self) -> Option<u8> {
        self.clause.as_bytes().get(self.offset).copied()
    }

    fn is_at_end(&self) -> bool {
        self.offset >= self.clause.len()
    }

    fn consume_if(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8, description: &'static str) -> Result<()> {
        if self.consume_if(expected) {
            Ok(())
        } else {
            Err(self.malformed(description))
        }
    }

    fn expect_end(&self) -> Result<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.malformed("end of clause"))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.offset += 1;
        }
    }

    /// Consumes one or more word characters (`[A-Za-z0-9_]`).
    fn parse_word(&mut self) -> Result<&'src str> {
        let start = self.offset;
        while self.peek().is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
            self.offset += 1;
        }

        if self.offset == start {
            return Err(self.malformed("an identifier"));
        }
        Ok(&self.clause[start..self.offset])
    }

    fn malformed(&self, expected: &'static str) -> TagParseError {
        TagParseError::MalformedClause {
            clause: self.clause.to_string(),
            expected,
            offset: self.offset,
            tag: self.tag.to_string(),
        }
    }
}
