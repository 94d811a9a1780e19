//! Centralized initialization for commands that build pagination models.
//!
//! This module provides [`PageCommandInit`] which handles the common
//! initialization pattern for the render and model commands: loading the
//! persisted display configuration, layering command-line overrides on top,
//! and resolving the link and label collaborators.
//!
//! # Public API
//! - [`PageCommandArgs`]: Raw command-line overrides
//! - [`PageCommandInit`]: Main initializer with static methods
//! - [`PageCommandContext`]: Initialized context containing all required data
//!
//! # Initialization Steps
//! 1. **Config loading**: Load (or create) the persisted display defaults
//! 2. **Flag merging**: Command-line flags override config values
//! 3. **Collaborator resolution**: Build the link resolver and label set

use crate::core::builder::{build, BuildOptions};
use crate::core::config::DisplayConfig;
use crate::core::error::Result;
use crate::core::labels::LabelSet;
use crate::core::links::{LinkStyle, PageLinks};
use crate::core::model::PaginationModel;
use std::path::PathBuf;

/// Raw command-line overrides shared by the render and model commands
///
/// `None` means "not given on the command line, use the configured value".
#[derive(Debug, Clone, Default)]
pub struct PageCommandArgs {
    pub current: Option<usize>,
    pub total: usize,
    pub range: Option<usize>,
    pub no_count: bool,
    pub no_directional: bool,
    pub no_edges: bool,
    pub class_prefix: Option<String>,
    pub base: Option<String>,
    pub link_style: Option<LinkStyle>,
    pub labels_file: Option<PathBuf>,
}

/// Initialized context for commands that build pagination models
pub struct PageCommandContext {
    pub current_page: usize,
    pub total_pages: usize,
    pub options: BuildOptions,
    pub links: Box<dyn PageLinks>,
    pub labels: LabelSet,
}

/// Centralized initialization for model-building commands
pub struct PageCommandInit;

impl PageCommandInit {
    /// Initialize everything needed for a model-building command
    ///
    /// A missing or unreadable config file is not fatal; the command falls
    /// back to defaults and logs the problem. An explicitly requested label
    /// file that cannot be loaded IS fatal, since the user asked for it.
    pub fn initialize(args: PageCommandArgs) -> Result<PageCommandContext> {
        let config = match DisplayConfig::load_or_create() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load display config: {e}");
                DisplayConfig::default()
            }
        };
        Self::initialize_with_config(args, config)
    }

    /// Initialize against an explicit configuration
    pub fn initialize_with_config(
        args: PageCommandArgs,
        config: DisplayConfig,
    ) -> Result<PageCommandContext> {
        let mut options = config.options;
        if let Some(range) = args.range {
            options.range = range;
        }
        if args.no_count {
            options.show_count = false;
        }
        if args.no_directional {
            options.show_directional = false;
        }
        if args.no_edges {
            options.show_edges = false;
        }
        if let Some(prefix) = args.class_prefix {
            options.class_prefix = prefix;
        }

        let labels = match &args.labels_file {
            Some(path) => LabelSet::load(path)?,
            None => config.labels,
        };

        let style = args.link_style.unwrap_or(config.link_style);
        let base = args.base.unwrap_or(config.link_base);
        let links = style.resolver(base);

        let context = PageCommandContext {
            current_page: args.current.unwrap_or(1),
            total_pages: args.total,
            options,
            links,
            labels,
        };

        log::debug!(
            "initialized page command: current={} total={} range={}",
            context.current_page,
            context.total_pages,
            context.options.range
        );

        Ok(context)
    }
}

impl PageCommandContext {
    /// Build the pagination model for this context
    pub fn build_model(&self) -> PaginationModel {
        build(
            self.current_page,
            self.total_pages,
            &self.options,
            self.links.as_ref(),
            &self.labels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(total: usize) -> PageCommandArgs {
        PageCommandArgs {
            total,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_when_nothing_overridden() {
        let context =
            PageCommandInit::initialize_with_config(args(10), DisplayConfig::default()).unwrap();

        assert_eq!(context.current_page, 1);
        assert_eq!(context.total_pages, 10);
        assert_eq!(context.options, BuildOptions::default());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = DisplayConfig::default();
        config.options.range = 5;
        config.link_base = "/configured/".to_string();

        let overrides = PageCommandArgs {
            current: Some(4),
            total: 20,
            range: Some(2),
            no_count: true,
            no_edges: true,
            class_prefix: Some("pg-".to_string()),
            base: Some("/flagged/".to_string()),
            ..Default::default()
        };

        let context = PageCommandInit::initialize_with_config(overrides, config).unwrap();
        assert_eq!(context.current_page, 4);
        assert_eq!(context.options.range, 2);
        assert!(!context.options.show_count);
        assert!(context.options.show_directional);
        assert!(!context.options.show_edges);
        assert_eq!(context.options.class_prefix, "pg-");
        assert_eq!(context.links.resolve(2), "/flagged/?paged=2");
    }

    #[test]
    fn test_link_style_override() {
        let overrides = PageCommandArgs {
            total: 10,
            base: Some("/blog".to_string()),
            link_style: Some(LinkStyle::Path),
            ..Default::default()
        };

        let context =
            PageCommandInit::initialize_with_config(overrides, DisplayConfig::default()).unwrap();
        assert_eq!(context.links.resolve(3), "/blog/page/3/");
    }

    #[test]
    fn test_labels_file_loaded() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"next": "Suivant"}}"#)?;

        let overrides = PageCommandArgs {
            total: 10,
            labels_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let context =
            PageCommandInit::initialize_with_config(overrides, DisplayConfig::default())?;
        assert_eq!(context.labels.next, "Suivant");
        assert_eq!(context.labels.previous, "Previous");
        Ok(())
    }

    #[test]
    fn test_missing_labels_file_is_fatal() {
        let overrides = PageCommandArgs {
            total: 10,
            labels_file: Some("/nonexistent/labels.json".into()),
            ..Default::default()
        };

        let result = PageCommandInit::initialize_with_config(overrides, DisplayConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_build_model_from_context() {
        let context =
            PageCommandInit::initialize_with_config(args(10), DisplayConfig::default()).unwrap();
        let model = context.build_model();

        assert!(!model.is_empty());
        assert!(model.count_item().is_some());
    }
}
