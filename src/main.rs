use std::io::IsTerminal;

use anyhow::Context;
use chrono::Local;
use lifeadmin::core::cli::CliOptions;
use lifeadmin::core::context::AppContext;
use lifeadmin::logging::LogTarget;
use lifeadmin::pipeline::Pipeline;
use lifeadmin::prompter::flows::dump::DumpFlow;
use lifeadmin::prompter::prompter::Prompter;
use lifeadmin::ui::display_manager::DisplayManager;

fn main() {
    let opts = match CliOptions::from_env() {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let ctx = match AppContext::from_options(&opts) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&opts, &ctx) {
        ctx.logger
            .error(format!("{err:#}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}

fn run(opts: &CliOptions, ctx: &AppContext) -> anyhow::Result<()> {
    let interactive = std::io::stdout().is_terminal() && !opts.json;
    let display = if interactive {
        DisplayManager::new()
    } else {
        DisplayManager::plain(usize::MAX)
    };

    if opts.show_config {
        display.display_config(&ctx.config);
        return Ok(());
    }

    let mut flow = if interactive {
        DumpFlow::new()
    } else {
        DumpFlow::quiet()
    };
    Prompter::new()
        .with_cursor(interactive)
        .run(&mut flow)
        .context("Failed to read the dump")?;

    if flow.is_empty() {
        println!("No input provided");
        return Ok(());
    }

    let start_date = ctx
        .settings
        .start_date
        .or_else(|| Some(Local::now().date_naive()));
    let pipeline = Pipeline::new(&ctx.settings)?
        .with_logger(ctx.logger.clone())
        .with_start_date(start_date);
    let output = pipeline.run(&flow.text())?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    display.display_tasks(&output.extraction);
    display.display_rationales(&output.extraction);
    display.display_plan(&output.plan);
    Ok(())
}
