//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Canvas course export CLI.
#[derive(Parser, Debug)]
#[command(
    name = "canvas-export",
    version,
    about = "Export a Canvas LMS course to a local directory",
    long_about = "A CLI tool that mirrors a Canvas course (modules, pages, assignments,\n\
                  front page, files) to a local directory tree as HTML and downloaded files."
)]
pub struct Args {
    /// Course identifier to export.
    #[arg(short = 'c', long = "course")]
    pub course_id: Option<String>,

    /// Canvas API base URL, e.g. https://your-school.instructure.com/api/v1/
    #[arg(short = 'b', long = "base-url", env = "CANVAS_BASE_URL")]
    pub base_url: Option<String>,

    /// Canvas access token.
    #[arg(short, long, env = "CANVAS_TOKEN")]
    pub token: Option<String>,

    /// Root directory for the exported tree.
    #[arg(short = 'o', long = "output")]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(course_id) = self.course_id {
            config.export.course_id = course_id;
        }

        if let Some(base_url) = self.base_url {
            config.api.base_url = base_url;
        }

        if let Some(token) = self.token {
            config.api.access_token = token;
        }

        if let Some(dir) = self.output_dir {
            config.export.output_dir = Some(dir);
        }
    }
}
