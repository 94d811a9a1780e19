use crate::core::{
    command_init::{PageCommandArgs, PageCommandInit},
    error::Result,
};

/// Build a pagination model and print it as pretty JSON.
///
/// An empty model still prints, so consumers always get valid JSON.
pub fn execute_model(args: PageCommandArgs) -> Result<()> {
    let context = PageCommandInit::initialize(args)?;
    let model = context.build_model();

    println!("{}", serde_json::to_string_pretty(&model)?);

    Ok(())
}
