//! Generate command - writes one Postman collection per domain and category.
//!
//! The run is a straight pipeline; each stage takes the previous stage's output:
//! validate layout → load domains → enumerate bodies → load template → build → write.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::domain::{
    AppError, Category, CategoryBodies, CollectionTemplate, GeneratorConfig, HostCollections,
    RequestBody, TargetDomain, layout,
};
use crate::ports::{PropertyStore, TemplateSource};
use crate::services::CollectionBuilder;

/// Command-line overrides for a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Template file replacing the configured or bundled template.
    pub template: Option<PathBuf>,
    /// Pretty-print output regardless of configuration.
    pub pretty: bool,
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Number of domains read from `domains.yml`.
    pub domain_count: usize,
    /// Number of request bodies per category.
    pub sales_count: usize,
    pub lettings_count: usize,
    /// Distinct collection files, in the order they were first written.
    pub written: Vec<PathBuf>,
}

/// Paths of a validated property object location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub root: PathBuf,
    pub domain_list: PathBuf,
    pub sales_dir: PathBuf,
    pub lettings_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Location {
    pub fn category_dir(&self, category: Category) -> &Path {
        match category {
            Category::Sales => &self.sales_dir,
            Category::Lettings => &self.lettings_dir,
        }
    }
}

/// Execute the generate command for the property object location at `root`.
pub fn execute<S: PropertyStore, T: TemplateSource>(
    ctx: &AppContext<S, T>,
    root: &Path,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let store = ctx.store();
    let bundled = ctx.templates();

    let location = validate_layout(store, root)?;
    let config = load_config(store, &location.root)?;
    let domains = load_domains(store, &location)?;
    let bodies = enumerate_bodies(store, &location)?;
    let template = load_template(store, bundled, &location, &config, options)?;

    let built = CollectionBuilder::new(&template).build(&domains, &bodies)?;

    let pretty = options.pretty || config.output.pretty;
    let written = write_collections(store, &location, &built, pretty)?;

    Ok(GenerateOutcome {
        domain_count: domains.len(),
        sales_count: bodies.sales.len(),
        lettings_count: bodies.lettings.len(),
        written,
    })
}

/// Check the required inputs exist: `Lettings/`, `Sales/`, then `domains.yml`.
pub(crate) fn validate_layout(
    store: &impl PropertyStore,
    root: &Path,
) -> Result<Location, AppError> {
    let location = Location {
        root: root.to_path_buf(),
        domain_list: layout::domain_list(root),
        sales_dir: layout::category_dir(root, Category::Sales),
        lettings_dir: layout::category_dir(root, Category::Lettings),
        output_dir: layout::output_dir(root),
    };

    for dir in [&location.lettings_dir, &location.sales_dir] {
        if !store.is_dir(dir) {
            return Err(AppError::MissingDirectory(dir.display().to_string()));
        }
    }
    if !store.path_exists(&location.domain_list) {
        return Err(AppError::MissingFile(location.domain_list.display().to_string()));
    }

    Ok(location)
}

pub(crate) fn load_domains(
    store: &impl PropertyStore,
    location: &Location,
) -> Result<Vec<TargetDomain>, AppError> {
    let content = store.read_to_string(&location.domain_list)?;
    let domains = TargetDomain::parse_list(&content)?;
    info!(count = domains.len(), "loaded domains");
    Ok(domains)
}

/// Read every `*.json` body of both categories, sorted by file name.
pub(crate) fn enumerate_bodies(
    store: &impl PropertyStore,
    location: &Location,
) -> Result<CategoryBodies, AppError> {
    let mut bodies = CategoryBodies::default();

    for category in Category::ALL {
        let dir = location.category_dir(category);
        let mut paths: Vec<PathBuf> = store
            .list_files(dir)?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(layout::is_body_file_name)
            })
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let target = bodies.get_mut(category);
        for path in paths {
            debug!(%category, path = %path.display(), "reading request body");
            let raw = store.read_to_string(&path)?;
            target.push(RequestBody { source: path, raw });
        }
        info!(%category, count = target.len(), "enumerated request bodies");
    }

    Ok(bodies)
}

/// Load the template: `--template`, then `template.path` from config, then the bundled one.
pub(crate) fn load_template(
    store: &impl PropertyStore,
    bundled: &impl TemplateSource,
    location: &Location,
    config: &GeneratorConfig,
    options: &GenerateOptions,
) -> Result<CollectionTemplate, AppError> {
    let override_path = options
        .template
        .clone()
        .or_else(|| config.template.path.as_ref().map(|p| location.root.join(p)));

    let content = match override_path {
        Some(path) => {
            if !store.path_exists(&path) {
                return Err(AppError::MissingFile(path.display().to_string()));
            }
            info!(template = %path.display(), "using template file");
            store.read_to_string(&path)?
        }
        None => {
            info!(template = %bundled.describe(), "using template");
            bundled.load()?
        }
    };

    CollectionTemplate::parse(&content)
}

/// Serialize and write every collection. The output directory is never created.
pub(crate) fn write_collections(
    store: &impl PropertyStore,
    location: &Location,
    built: &[HostCollections],
    pretty: bool,
) -> Result<Vec<PathBuf>, AppError> {
    if !store.is_dir(&location.output_dir) {
        return Err(AppError::OutputDirectoryMissing(location.output_dir.display().to_string()));
    }

    let mut written = Vec::new();
    for host in built {
        for category in [Category::Lettings, Category::Sales] {
            let Some(collection) = host.get(category) else {
                continue;
            };
            let path = location.output_dir.join(host.file_name(category));
            let payload = if pretty {
                serde_json::to_string_pretty(&collection.document)
            } else {
                serde_json::to_string(&collection.document)
            }
            .map_err(|e| AppError::SerializeError {
                what: path.display().to_string(),
                details: e.to_string(),
            })?;

            store.write_file(&path, &payload)?;
            info!(path = %path.display(), "wrote collection");
            if !written.contains(&path) {
                written.push(path);
            }
        }
    }
    Ok(written)
}
