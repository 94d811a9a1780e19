use crate::core::{
    command_init::{PageCommandArgs, PageCommandInit},
    error::Result,
    renderer::render,
};

/// Build a pagination model and print it as HTML markup.
///
/// Fewer than two total pages prints nothing; that is a valid empty result,
/// not a failure.
pub fn execute_render(args: PageCommandArgs) -> Result<()> {
    let context = PageCommandInit::initialize(args)?;
    let model = context.build_model();

    let html = render(&model, &context.labels);
    if !html.is_empty() {
        println!("{html}");
    }

    Ok(())
}
