use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::helpers::validate_output_format;
use crate::output::{numbered, print_record_list, to_json};
use crate::ui::{header, kv};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    validate_output_format(args.format.as_deref())?;
    if args.json && args.format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let (store, path) = ctx.open_store()?;
    let ui = ctx.ui(args.json, args.format.as_deref())?;

    if ui.mode.is_json() {
        println!("{}", to_json(&numbered(store.all()))?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        println!("{}", header(&ui, "list", None));
        println!("{}", kv(&ui, "Data", &path.display().to_string()));
    }
    print_record_list(
        &ui,
        store.all().iter().enumerate().map(|(i, r)| (i + 1, r)),
        "No cars in the database.",
    );
    Ok(())
}
