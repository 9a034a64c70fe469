use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use structql::Fieldset;

#[derive(Debug, clap::Args)]
pub(crate) struct FieldsCmd {
    #[arg(
        default_value=",",
        help="Separates the entries of the list.",
        long,
    )]
    field_delimiter: String,

    #[arg(
        default_value=".",
        help="Separates the path segments of a single entry.",
        long,
    )]
    subfield_delimiter: String,

    #[arg(
        help="The delimited field list, e.g. `id,name,parent.id`.",
        name="LIST",
    )]
    list: String,
}
impl FieldsCmd {
    fn render(&self) -> anyhow::Result<String> {
        log::debug!(
            "Parsing field list with delimiters `{}` and `{}`.",
            self.field_delimiter,
            self.subfield_delimiter,
        );
        let fieldset = Fieldset::from_delimited_list(
            self.list.as_str(),
            self.field_delimiter.as_str(),
            self.subfield_delimiter.as_str(),
        );

        match fieldset {
            Some(fieldset) => serde_json::to_string_pretty(&fieldset)
                .context("Failed to serialize the fieldset as JSON"),
            None => anyhow::bail!("The field list is empty, so every field would be selected"),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for FieldsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_anyhow(self.render())
    }
}
