//! create-quickstack - interactive scaffolding for quickstack web projects

use anyhow::Result;
use clap::Parser;
use quickstack_core::scaffold::CreateArgs;
use quickstack_core::ProductConfig;
use std::path::PathBuf;

/// quickstack product configuration
#[derive(Clone)]
pub struct QuickstackConfig;

impl ProductConfig for QuickstackConfig {
    fn name(&self) -> &'static str {
        "quickstack"
    }

    fn display_name(&self) -> &'static str {
        "create-quickstack"
    }

    fn generator_program(&self) -> &'static str {
        "npx"
    }

    fn generator_args(&self) -> &'static [&'static str] {
        &["--yes", "@quickstack/generator"]
    }

    fn generator_template(&self) -> &'static str {
        "skeleton"
    }

    fn default_registry_url(&self) -> &'static str {
        "https://registry.npmjs.org"
    }

    fn registry_url_env(&self) -> &'static str {
        "QUICKSTACK_REGISTRY_URL"
    }

    fn template_dir_env(&self) -> &'static str {
        "QUICKSTACK_TEMPLATE_DIR"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-quickstack")]
#[command(about = "Interactive scaffolding for quickstack web projects")]
#[command(version)]
pub struct Args {
    /// Project directory to create (prompts if omitted)
    pub directory: Option<PathBuf>,

    /// Local directory to use for template bundles (development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C outside prompt scope
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = QuickstackConfig;

    let result = quickstack_core::run(
        &config,
        CreateArgs {
            directory: args.directory,
            template_dir: args.template_dir,
        },
    )
    .await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
