use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use designgen_core::config::{self, CONFIG_FILE_NAME, DesignGenConfig, FormatterKind};
use designgen_core::model::{ApiModel, EncodingModel};
use designgen_core::parse::{self, spec::SwaggerSpec};
use designgen_core::transform::{self, NormalizeOptions};
use designgen_core::DesignGenerator;
use designgen_goa::{GoaDesignGenerator, GoaOptions};

#[derive(Parser)]
#[command(
    name = "designgen",
    about = "Generate goa design programs from Swagger 2.0 documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a goa design program from a Swagger document
    Swagger {
        /// Path to the Swagger document (JSON, or YAML for .yaml/.yml)
        input: PathBuf,

        /// Write the design to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Formatter for the generated source
        #[arg(long)]
        formatter: Option<FormatterArg>,

        /// Also map paths and definitions into resources, actions and types
        #[arg(long)]
        operations: bool,

        /// Go package name of the generated design
        #[arg(long)]
        package: Option<String>,

        /// Config file to use instead of ./.designgen.yaml
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Inspect the normalized model of a Swagger document
    Inspect {
        /// Path to the Swagger document
        input: PathBuf,

        /// Include resources, actions and types
        #[arg(long)]
        operations: bool,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new designgen configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatterArg {
    Auto,
    Gofmt,
    Builtin,
    None,
}

impl From<FormatterArg> for FormatterKind {
    fn from(arg: FormatterArg) -> Self {
        match arg {
            FormatterArg::Auto => FormatterKind::Auto,
            FormatterArg::Gofmt => FormatterKind::Gofmt,
            FormatterArg::Builtin => FormatterKind::Builtin,
            FormatterArg::None => FormatterKind::None,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Swagger {
            input,
            output,
            formatter,
            operations,
            package,
            config,
        } => {
            let mut cfg = resolve_config(config.as_deref())?;
            if let Some(formatter) = formatter {
                cfg.formatter = formatter.into();
            }
            if let Some(package) = package {
                cfg.package = package;
            }
            cfg.operations |= operations;
            cmd_swagger(&input, output.as_deref(), cfg)
        }

        Commands::Inspect {
            input,
            operations,
            format,
        } => cmd_inspect(&input, operations, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "designgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the explicit config file, or `./.designgen.yaml` when present.
fn resolve_config(path: Option<&Path>) -> Result<DesignGenConfig> {
    match path {
        Some(path) => config::load_config(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => Ok(config::load_config(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default()),
    }
}

fn load_spec(path: &Path) -> Result<SwaggerSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let spec = match ext {
        "yaml" | "yml" => parse::from_yaml(&content),
        _ => parse::from_json(&content),
    }
    .with_context(|| format!("failed to decode {}", path.display()))?;
    Ok(spec)
}

fn load_model(path: &Path, operations: bool) -> Result<ApiModel> {
    let spec = load_spec(path)?;
    let options = NormalizeOptions { operations };
    Ok(transform::normalize_with_options(&spec, &options))
}

fn cmd_swagger(input: &Path, output: Option<&Path>, cfg: DesignGenConfig) -> Result<()> {
    let api = load_model(input, cfg.operations)?;
    log::info!(
        "generating package {} with the {} formatter",
        cfg.package,
        cfg.formatter.as_str()
    );

    let options = GoaOptions::from(cfg);
    let generator = GoaDesignGenerator::new()?;
    // On a formatting failure the raw program has already been written to stderr.
    let file = generator.generate(&api, &options)?;

    match output {
        Some(path) => {
            fs::write(path, &file.content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(file.content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn cmd_inspect(input: &Path, operations: bool, format: InspectFormat) -> Result<()> {
    let api = load_model(input, operations)?;
    let summary = build_inspect_summary(&api);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(api: &ApiModel) -> serde_json::Value {
    let resources: Vec<serde_json::Value> = api
        .resources
        .values()
        .map(|resource| {
            let actions: Vec<serde_json::Value> = resource
                .actions
                .values()
                .map(|action| {
                    let routes: Vec<String> = action
                        .routes
                        .iter()
                        .map(|route| match route.verb {
                            Some(verb) => format!("{verb} {}", route.path),
                            None => route.path.clone(),
                        })
                        .collect();
                    serde_json::json!({
                        "name": action.name,
                        "routes": routes,
                        "payload": action.payload.as_ref().map(|p| &p.type_name),
                        "responses": action.responses.keys().collect::<Vec<_>>(),
                    })
                })
                .collect();
            serde_json::json!({
                "name": resource.name,
                "actions": actions,
            })
        })
        .collect();

    serde_json::json!({
        "api": {
            "name": api.name,
            "title": api.title,
            "version": api.version,
            "host": api.host,
            "base_path": api.base_path,
            "schemes": api.schemes,
        },
        "consumes": mime_types(&api.consumes),
        "produces": mime_types(&api.produces),
        "resources": resources,
        "types": api.types.keys().collect::<Vec<_>>(),
    })
}

fn mime_types(encodings: &[EncodingModel]) -> Vec<&str> {
    encodings
        .iter()
        .flat_map(|e| e.mime_types.iter().map(String::as_str))
        .collect()
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
