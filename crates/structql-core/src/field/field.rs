use crate::Declaration;
use crate::Directive;
use crate::Token;
use smallvec::SmallVec;

/// One selectable unit (a model or a leaf) of an operation's field tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Field {
    pub(crate) decl: Declaration,
    pub(crate) directives: SmallVec<[Directive; 2]>,
    pub(crate) fields: Vec<Field>,

    /// Forces the field to be rendered regardless of any sparse fieldset.
    /// Set by the `keep` tag and implied by an argument list.
    pub(crate) keep: bool,
}
impl Field {
    pub fn new(decl: Declaration) -> Self {
        Self {
            decl,
            ..Self::default()
        }
    }

    pub fn decl(&self) -> &Declaration {
        &self.decl
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    pub fn keep(&self) -> bool {
        self.keep
    }

    /// Every [`Token`] declared on this field and its descendants, in
    /// pre-order: declaration tokens first, then directive tokens, then each
    /// child's tokens.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = vec![];
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, tokens: &mut Vec<&'a Token>) {
        tokens.extend(self.decl.tokens.iter());
        tokens.extend(self.directives.iter().filter_map(Directive::token));
        for field in &self.fields {
            field.collect_tokens(tokens);
        }
    }
}
