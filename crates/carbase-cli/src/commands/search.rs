use carbase_core::{search, Field};

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::errors::CliError;
use crate::helpers::{criterion_from_args, validate_output_format};
use crate::output::{print_record_list, to_json};
use crate::ui::header;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    validate_output_format(args.format.as_deref())?;
    if args.json && args.format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let field = args.field.parse::<Field>().map_err(CliError::from)?;
    let criterion = criterion_from_args(args)?;

    let (store, _path) = ctx.open_store()?;
    let hits = search(&store, field, &criterion).map_err(CliError::from)?;
    let ui = ctx.ui(args.json, args.format.as_deref())?;

    if ui.mode.is_json() {
        println!("{}", to_json(&hits)?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        println!("{}", header(&ui, "search", Some(field.name())));
    }
    print_record_list(
        &ui,
        hits.iter().map(|hit| (hit.ordinal, hit.record)),
        "No matching cars found.",
    );
    Ok(())
}
