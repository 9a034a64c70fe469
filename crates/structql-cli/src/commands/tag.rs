use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use std::fmt::Write;
use structql::collect_variables;
use structql::parse_tag;

#[derive(Debug, clap::Args)]
pub(crate) struct TagCmd {
    #[arg(
        help="The field tag, e.g. `user(id:$id<ID!>),@alias(me)`.",
        name="TAG",
    )]
    tag: String,
}
impl TagCmd {
    fn describe(&self) -> anyhow::Result<String> {
        let field = parse_tag(self.tag.as_str())
            .with_context(|| format!("Invalid tag `{}`", self.tag))?;
        let variables = collect_variables(&field)
            .with_context(|| format!("Conflicting variables in tag `{}`", self.tag))?;
        log::debug!("Parsed tag `{}` into {field:?}.", self.tag);

        let decl = field.decl();
        let mut out = format!("{} Valid tag:\n", output_utils::GREEN_CHECK);
        if decl.name().is_empty() {
            writeln!(out, "  * Name: (derived from the field name)")?;
        } else {
            writeln!(out, "  * Declaration: {decl}")?;
        }
        writeln!(out, "  * Alias: {}", decl.alias().unwrap_or("(none)"))?;
        for directive in field.directives() {
            writeln!(out, "  * Directive: {directive}")?;
        }
        write!(out, "  * Keep: {}", field.keep())?;
        for variable in &variables {
            write!(out, "\n  * Variable: {variable}")?;
        }
        Ok(out)
    }
}

#[inherent::inherent]
impl RunnableCommand for TagCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_anyhow(self.describe())
    }
}
