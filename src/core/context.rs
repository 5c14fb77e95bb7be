use std::{
    cell::OnceCell,
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        catalog::{Catalog, ObjectId},
        load::{
            map_data::{LoadWarning, LoadedMapData, load_map_data},
            script::{ScriptBlob, collect_script},
        },
        roots::collect_roots,
        sweep::{TrackedSets, sweep},
    },
};

/// Orchestrator for one analysis run.
///
/// Construction loads all inputs eagerly (config, map data, script text)
/// so that I/O and parse failures surface before any checking starts; the
/// root set and the sweep result are derived lazily because they are pure
/// in-memory computations over data the context already owns.
///
/// Configuration priority is CLI arguments, then `.mapcheckrc.json`, then
/// built-in defaults.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    map_data: LoadedMapData,
    script: ScriptBlob,

    /// Root set, computed on first call to `roots()`.
    roots: OnceCell<Vec<ObjectId>>,

    /// Sweep result, computed on first call to `unreached()`.
    unreached: OnceCell<TrackedSets>,
}

impl CheckContext {
    /// Create a context from command line arguments.
    ///
    /// Loads the config from the project root, applies CLI overrides,
    /// validates it, then loads the map data file and the script sources
    /// in parallel.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .mapcheckrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref data_file) = common_args.data_file {
            config.data_file = data_file.to_string_lossy().to_string();
        }
        if let Some(ref script_root) = common_args.script_root {
            config.script_root = script_root.to_string_lossy().to_string();
        }
        config.validate()?;

        let data_path = resolve(&root_dir, &config.data_file);
        let script_root = resolve(&root_dir, &config.script_root);

        let (map_result, script_result) = rayon::join(
            || load_map_data(&data_path),
            || collect_script(&script_root, &config.script_includes, &config.ignores),
        );
        let map_data = map_result?;
        let script = script_result?;

        if verbose {
            eprintln!(
                "Loaded {} objects from {:?}, scanned {} script file(s)",
                map_data.catalog.len(),
                data_path,
                script.file_count
            );
        }

        Ok(Self {
            config,
            root_dir,
            verbose,
            map_data,
            script,
            roots: OnceCell::new(),
            unreached: OnceCell::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.map_data.catalog
    }

    pub fn placed_unit_types(&self) -> &[ObjectId] {
        &self.map_data.placed_unit_types
    }

    pub fn script_file_count(&self) -> usize {
        self.script.file_count
    }

    /// Non-fatal warnings from loading map data and script files.
    pub fn load_warnings(&self) -> impl Iterator<Item = &LoadWarning> {
        self.map_data.warnings.iter().chain(self.script.warnings.iter())
    }

    /// The root set: pre-placed unit types plus script references.
    pub fn roots(&self) -> &[ObjectId] {
        self.roots.get_or_init(|| {
            collect_roots(
                self.catalog(),
                self.placed_unit_types(),
                &self.script.text,
            )
        })
    }

    /// The sweep result: objects with no path from any root.
    pub fn unreached(&self) -> &TrackedSets {
        self.unreached
            .get_or_init(|| sweep(self.catalog(), self.roots()))
    }

    /// Ids from the config allowlist. Entries were validated as fourccs
    /// when the config loaded.
    pub fn allowed_ids(&self) -> HashSet<ObjectId> {
        self.config
            .allowed
            .iter()
            .filter_map(|code| ObjectId::from_fourcc(code))
            .collect()
    }
}

fn resolve(root_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
