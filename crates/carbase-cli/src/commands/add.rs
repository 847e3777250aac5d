use carbase_core::VehicleRecord;
use tracing::info;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::ui::receipt;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let record = VehicleRecord::new(
        single_word("--brand", &args.brand)?,
        single_word("--model", &args.model)?,
        args.year,
        args.capacity,
        single_word("--fuel", &args.fuel)?,
        single_word("--type", &args.vehicle_type)?,
        single_word("--registration", &args.registration)?,
    );

    let (mut store, path) = ctx.open_store_for_update(true)?;
    let ordinal = store.append(record);
    store.save(&path)?;
    info!(ordinal, path = %path.display(), "added car");

    if !ctx.quiet() {
        let ui = ctx.ui(false, None)?;
        println!(
            "{}",
            receipt(
                &ui,
                "Added car",
                &[
                    ("Car number", &ordinal.to_string()),
                    ("Data", &path.display().to_string()),
                ],
            )
        );
    }
    Ok(())
}

/// Data-file values are whitespace-delimited, so each text field must be
/// one non-empty word.
fn single_word(flag: &str, value: &str) -> anyhow::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.split_whitespace().count() != 1 {
        return Err(CliError::invalid_input(format!(
            "{} must be a single word without spaces (got {:?})",
            flag, value
        ))
        .into());
    }
    if trimmed.chars().count() > carbase_core::MAX_FIELD_LEN {
        return Err(CliError::invalid_input(format!(
            "{} is longer than {} characters",
            flag,
            carbase_core::MAX_FIELD_LEN
        ))
        .into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(single_word("--brand", " Skoda ").unwrap(), "Skoda");
        assert!(single_word("--brand", "Alfa Romeo").is_err());
        assert!(single_word("--brand", "  ").is_err());
        assert!(single_word("--brand", &"x".repeat(100)).is_err());
    }
}
