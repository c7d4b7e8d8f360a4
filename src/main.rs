use anyhow::Context;
use clap::Parser;

use ingredients_field::utils::{logger, validation::Validate};
use ingredients_field::{
    CliArgs, ConfigProvider, ControllerOptions, DialogGateway, DialogText, EditorCommand,
    EditorError, EntryAccessor, ErrorSeverity, FieldStore, Ingredient, IngredientListController,
    JsonFileStore, Locale, LocaleSource, NormalizeMode, ProfileConfig, PromptDialogGateway,
    StaticLocales,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting ingredients-field editor");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = args.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let (store_path, active_locale, default_locale, mode, text) = match &args.profile {
        Some(path) => {
            let profile = ProfileConfig::from_file(path)
                .with_context(|| format!("failed to load profile '{}'", path))?;
            if let Err(e) = profile.validate() {
                tracing::error!("❌ Profile validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
            (
                args.store
                    .clone()
                    .unwrap_or_else(|| profile.store_path().to_string()),
                args.locale
                    .clone()
                    .map(Locale::new)
                    .unwrap_or_else(|| profile.active_locale()),
                args.default_locale
                    .clone()
                    .map(Locale::new)
                    .unwrap_or_else(|| profile.default_locale()),
                if args.strict || profile.strict_enabled() {
                    NormalizeMode::Strict
                } else {
                    NormalizeMode::Permissive
                },
                profile.dialog_text(),
            )
        }
        None => (
            args.store_path().to_string(),
            args.active_locale(),
            args.default_locale(),
            if args.strict {
                NormalizeMode::Strict
            } else {
                NormalizeMode::Permissive
            },
            DialogText::default(),
        ),
    };

    tracing::info!("📁 Entry store: {} (locale {})", store_path, active_locale);

    let store = JsonFileStore::new(&store_path, active_locale);
    let entry = store.clone();
    let locales = StaticLocales::new(default_locale);
    let dialogs = PromptDialogGateway::new();
    let options = ControllerOptions {
        normalize: mode,
        text,
    };

    let mut controller =
        match IngredientListController::with_options(store, dialogs, locales, entry, options).await
        {
            Ok(controller) => controller,
            Err(e) => exit_with(e),
        };

    match run_command(&mut controller, &args.command).await {
        Ok(()) => {
            print_list(&controller);
            println!(
                "✅ {} ingredient(s) in locale {}",
                controller.len(),
                controller.locale()
            );
        }
        Err(e) => {
            let exit_code = report_failure(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_command<F, D, L, E>(
    controller: &mut IngredientListController<F, D, L, E>,
    command: &EditorCommand,
) -> ingredients_field::Result<()>
where
    F: FieldStore,
    D: DialogGateway,
    L: LocaleSource,
    E: EntryAccessor,
{
    match command {
        EditorCommand::Show => Ok(()),
        EditorCommand::Add { json } => {
            match json {
                Some(raw) => {
                    controller.add(Some(Ingredient::from_json(raw)?)).await?;
                }
                None => {
                    controller.open_add_dialog().await?;
                }
            }
            Ok(())
        }
        EditorCommand::Edit { index, json } => match json {
            Some(raw) => {
                controller
                    .edit(Some(Ingredient::from_json(raw)?), *index)
                    .await
            }
            None => controller.open_edit_dialog(*index).await,
        },
        EditorCommand::BulkEdit { json } => match json {
            Some(raw) => {
                let rows: Vec<Ingredient> = serde_json::from_str(raw)?;
                controller.bulk_replace(rows).await
            }
            None => controller.open_bulk_edit_dialog().await,
        },
        EditorCommand::Remove { index } => controller.remove(*index).await,
        EditorCommand::Clear => controller.clear_all().await,
        EditorCommand::Copy => {
            if !controller.can_copy_from_default_locale() {
                println!("ℹ️  Copy needs an empty list in a non-default locale");
                return Ok(());
            }
            controller.copy_from_default_locale().await
        }
    }
}

fn print_list<F, D, L, E>(controller: &IngredientListController<F, D, L, E>)
where
    F: FieldStore,
    D: DialogGateway,
    L: LocaleSource,
    E: EntryAccessor,
{
    if controller.is_empty() {
        println!("📋 No ingredients for locale {}", controller.locale());
        return;
    }
    println!("📋 Ingredients ({}):", controller.locale());
    for (index, row) in controller.ingredients().iter().enumerate() {
        println!("  [{}] {}", index, row.summary());
    }
}

fn report_failure(e: &EditorError) -> i32 {
    tracing::error!("❌ Operation failed: {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn exit_with(e: EditorError) -> ! {
    let exit_code = report_failure(&e);
    std::process::exit(exit_code.max(1));
}
