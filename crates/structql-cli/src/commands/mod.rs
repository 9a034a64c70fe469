mod fields;
mod tag;

use crate::Cli;
use crate::CommandResult;
use fields::FieldsCmd;
use tag::TagCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "structql")]
pub(crate) enum CommandEnum {
    /// Parse a delimited field list (as sent in a `fields` URL query
    /// parameter) and print the resulting fieldset as JSON.
    Fields(Box<FieldsCmd>),

    /// Parse a field tag and describe what it declares.
    Tag(Box<TagCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Fields(cmd) => cmd.run(cli).await,
            Self::Tag(cmd) => cmd.run(cli).await,
        }
    }
}
