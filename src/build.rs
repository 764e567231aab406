//! Batch builds.
//!
//! Renders every project file under a source directory into its own page:
//!
//! ```text
//! projects/                     dist/
//! ├── moon-frog.json      →     ├── moon-frog/index.html
//! └── launches/                 └── pepe-classic/index.html
//!     └── pepe-classic.json
//! ```
//!
//! Each file holds one [`ProjectInput`]. The output slug is the file stem, so
//! stems must be unique across the whole tree. Projects render in parallel on
//! the global rayon pool. A failing project fails the whole batch: the pages
//! other projects already wrote in this run are removed again, so `output/`
//! never holds half a batch. The error reported is the first failure in
//! discovery order.
//!
//! With a fixed `selection.seed`, every project draws its jitter from a fresh
//! rng seeded with that value, so the result does not depend on thread
//! scheduling.

use crate::config::{ConfigError, SiteConfig};
use crate::page::{RenderedSite, render_website};
use crate::types::ProjectInput;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid project file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("No project files (*.json) found in {0}")]
    NoProjects(PathBuf),
    #[error("Duplicate project name {slug}: {} and {}", .first.display(), .second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Progress reported while a batch runs.
#[derive(Debug, Clone)]
pub enum BuildEvent {
    Started {
        projects: usize,
    },
    ProjectRendered {
        slug: String,
        project_name: String,
        template: &'static str,
        blocks: usize,
        bytes: usize,
    },
}

/// One page written by a batch.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub slug: String,
    pub project_name: String,
    pub template: &'static str,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct BuildSummary {
    /// In discovery order.
    pub pages: Vec<BuiltPage>,
}

/// All `*.json` files under `source`, sorted by path.
pub fn discover_projects(source: &Path) -> Result<Vec<PathBuf>, BuildError> {
    if !source.is_dir() {
        return Err(BuildError::SourceNotFound(source.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Output directory name for a project file.
pub fn slug_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn load_project(path: &Path) -> Result<ProjectInput, BuildError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| BuildError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Render one project file and write it to `output_dir/index.html`.
pub fn generate_project(
    project: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<(ProjectInput, RenderedSite, PathBuf), BuildError> {
    let input = load_project(project)?;
    let site = render_website(&input.data, &input.analysis, config);
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    fs::write(&path, &site.html)?;
    Ok((input, site, path))
}

fn check_unique_slugs(projects: &[PathBuf]) -> Result<(), BuildError> {
    let mut seen: BTreeMap<String, &PathBuf> = BTreeMap::new();
    for path in projects {
        let slug = slug_for(path);
        if let Some(first) = seen.insert(slug.clone(), path) {
            return Err(BuildError::DuplicateSlug {
                slug,
                first: first.clone(),
                second: path.clone(),
            });
        }
    }
    Ok(())
}

/// Render every project under `source` into `output/<slug>/index.html`.
pub fn build(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
    events: Option<Sender<BuildEvent>>,
) -> Result<BuildSummary, BuildError> {
    let projects = discover_projects(source)?;
    if projects.is_empty() {
        return Err(BuildError::NoProjects(source.to_path_buf()));
    }
    check_unique_slugs(&projects)?;
    log::info!("building {} projects from {}", projects.len(), source.display());

    if let Some(tx) = &events {
        tx.send(BuildEvent::Started {
            projects: projects.len(),
        })
        .ok();
    }
    fs::create_dir_all(output)?;

    let results: Vec<Result<BuiltPage, BuildError>> = projects
        .par_iter()
        .map(|path| {
            let slug = slug_for(path);
            let (input, site, output_path) = generate_project(path, &output.join(&slug), config)?;
            log::info!(
                "{} → {} ({})",
                path.display(),
                output_path.display(),
                site.template.name
            );

            if let Some(tx) = &events {
                tx.send(BuildEvent::ProjectRendered {
                    slug: slug.clone(),
                    project_name: input.data.project_name.clone(),
                    template: site.template.name,
                    blocks: site.blocks.len(),
                    bytes: site.html.len(),
                })
                .ok();
            }

            Ok(BuiltPage {
                slug,
                project_name: input.data.project_name,
                template: site.template.name,
                output: output_path,
            })
        })
        .collect();

    let mut pages = Vec::with_capacity(results.len());
    let mut first_error = None;
    for result in results {
        match result {
            Ok(page) => pages.push(page),
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }
    match first_error {
        Some(err) => {
            remove_pages(&pages);
            Err(err)
        }
        None => Ok(BuildSummary { pages }),
    }
}

/// Undo the pages of a failed batch. Slug directories are only removed when
/// nothing else is left in them.
fn remove_pages(pages: &[BuiltPage]) {
    for page in pages {
        if let Err(err) = fs::remove_file(&page.output) {
            log::warn!("could not remove {}: {}", page.output.display(), err);
            continue;
        }
        if let Some(dir) = page.output.parent() {
            fs::remove_dir(dir).ok();
        }
    }
}
