use std::io::Write;
use std::path::PathBuf;

use escalas_core::models::result::parse_result_id;
use escalas_scales::engine::save_context;
use escalas_scales::instance::parse_selection;
use escalas_scales::{try_evaluate, Catalog, ScaleDefinition, ScaleInstance};
use escalas_storage::{JsonFileStore, ResultStore};

use crate::cli::{
    ClearCommand, Cli, Commands, ConfigCommand, DeleteCommand, HistoryCommand, ScalesCommand,
    ScoreCommand, ShowCommand,
};
use crate::config::{self, EscalasConfig};
use crate::render;

/// Resolved configuration for one invocation.
pub struct Session {
    pub config_path: PathBuf,
    pub config: EscalasConfig,
    pub data_file: PathBuf,
}

impl Session {
    pub fn load(cli: &Cli) -> eyre::Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => config::default_config_path()?,
        };
        let config = config::load_config(&config_path)?;
        let data_file = match &cli.data_file {
            Some(path) => path.clone(),
            None => config.resolved_data_file()?,
        };
        Ok(Self {
            config_path,
            config,
            data_file,
        })
    }

    pub fn catalog(&self) -> eyre::Result<Catalog> {
        let catalog = match &self.config.scales_dir {
            Some(dir) => Catalog::with_dir(dir)?,
            None => Catalog::builtin()?,
        };
        Ok(catalog)
    }

    pub fn store(&self) -> eyre::Result<JsonFileStore> {
        Ok(JsonFileStore::open(&self.data_file)?)
    }
}

pub fn run(cli: Cli, out: &mut dyn Write) -> eyre::Result<()> {
    let session = Session::load(&cli)?;
    match cli.command {
        Commands::Scales(cmd) => scales(&session.catalog()?, &cmd, out),
        Commands::Show(cmd) => show(&session.catalog()?, &cmd, out),
        Commands::Score(cmd) => score(&session.catalog()?, &session.store()?, &cmd, out),
        Commands::History(cmd) => history(&session.store()?, &cmd, out),
        Commands::Delete(cmd) => delete(&session.store()?, &cmd, out),
        Commands::Clear(cmd) => clear(&session.store()?, &cmd, out),
        Commands::Config(cmd) => show_config(&session, &cmd, out),
    }
}

/// Build an instance from `key=value` arguments.
pub fn instance_from_args(def: &ScaleDefinition, args: &[String]) -> eyre::Result<ScaleInstance> {
    let selections = args
        .iter()
        .map(|raw| parse_selection(raw))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ScaleInstance::from_selections(def, selections)?)
}

pub fn scales(catalog: &Catalog, cmd: &ScalesCommand, out: &mut dyn Write) -> eyre::Result<()> {
    if cmd.json {
        serde_json::to_writer_pretty(&mut *out, catalog.all())?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::scale_list(catalog))?;
    }
    Ok(())
}

pub fn show(catalog: &Catalog, cmd: &ShowCommand, out: &mut dyn Write) -> eyre::Result<()> {
    let def = catalog.get(&cmd.scale)?;
    let instance = instance_from_args(def, &cmd.selections)?;
    let result = try_evaluate(def, &instance)?;
    write!(out, "{}", render::form(def, &instance, &result))?;
    Ok(())
}

pub fn score(
    catalog: &Catalog,
    store: &dyn ResultStore,
    cmd: &ScoreCommand,
    out: &mut dyn Write,
) -> eyre::Result<()> {
    let def = catalog.get(&cmd.scale)?;
    let instance = instance_from_args(def, &cmd.selections)?;
    let result = try_evaluate(def, &instance)?;

    let saved = if cmd.save {
        Some(store.save(&result, save_context(def, &instance))?)
    } else {
        None
    };

    if cmd.json {
        let body = serde_json::json!({
            "scale_id": def.id,
            "values": instance.values(),
            "result": result,
            "saved": saved,
        });
        serde_json::to_writer_pretty(&mut *out, &body)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}: {}", def.name, render::score_line(def, &result))?;
    if let Some(saved) = saved {
        writeln!(out, "Saved as {}", saved.id)?;
    }
    Ok(())
}

pub fn history(store: &dyn ResultStore, cmd: &HistoryCommand, out: &mut dyn Write) -> eyre::Result<()> {
    let results = store.list_all();
    if cmd.json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "No saved results.")?;
    }
    for result in &results {
        writeln!(out, "{}", render::history_row(result))?;
    }
    Ok(())
}

pub fn delete(store: &dyn ResultStore, cmd: &DeleteCommand, out: &mut dyn Write) -> eyre::Result<()> {
    let id = parse_result_id(&cmd.id)?;
    if store.delete(id)? {
        writeln!(out, "Deleted {id}")?;
    } else {
        writeln!(out, "No saved result with id {id}")?;
    }
    Ok(())
}

pub fn clear(store: &dyn ResultStore, cmd: &ClearCommand, out: &mut dyn Write) -> eyre::Result<()> {
    if !cmd.yes {
        return Err(eyre::eyre!("refusing to delete the whole history without --yes"));
    }
    store.delete_all()?;
    writeln!(out, "History cleared.")?;
    Ok(())
}

pub fn show_config(session: &Session, cmd: &ConfigCommand, out: &mut dyn Write) -> eyre::Result<()> {
    if cmd.init {
        config::save_config(&session.config_path, &session.config)?;
    }
    writeln!(out, "config:     {}", session.config_path.display())?;
    writeln!(out, "data file:  {}", session.data_file.display())?;
    match &session.config.scales_dir {
        Some(dir) => writeln!(out, "scales dir: {}", dir.display())?,
        None => writeln!(out, "scales dir: (built-in scales only)")?,
    }
    Ok(())
}
