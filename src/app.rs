use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use clap::Subcommand;
use thiserror::Error;
use tracing::{debug, info, warn};
use unicode_width::UnicodeWidthStr;

use crate::{
    build::{
        filter::Filter,
        header::parse_header,
        pipeline::Pipeline,
        read_blobs,
        shorten::AbbreviationTable,
        styles::{list_styles, sort_styles, StyleEntry},
        BuildError, DescriptorBlob,
    },
    config::{Config, ConfigError},
    languages::{self, LanguageDef},
    syntax::{Classifier, StandardPrimitives, SyntaxError},
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("invalid descriptor: {0}")]
    Syntax(#[from] SyntaxError),
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter, shorten and write language definitions to the output directory
    Build {
        /// Language names, or categories prefixed with ':'
        qualifiers: Vec<String>,
    },
    /// Print the header of a language definition as JSON
    Header {
        file: PathBuf,
        /// Print the header as a normalized comment instead
        #[arg(long)]
        comment: bool,
    },
    /// List the available styles
    Styles {
        #[arg(long)]
        json: bool,
    },
    /// Print a built-in rule-set descriptor as JSON
    Descriptor {
        name: String,
        /// Shorten field names the way bundled definitions are
        #[arg(long)]
        compact: bool,
    },
    /// Write a built-in rule-set descriptor to the languages directory
    Export { name: String },
    /// Print the category of every classified word in some text
    Classify { name: String, text: String },
}

pub struct App {
    config: Config,
    table: AbbreviationTable,
}

impl App {
    pub fn new(config_path: Option<&Path>) -> Result<Self, AppError> {
        let config = Config::load_or_default(config_path)?;
        let table = AbbreviationTable::standard().map_err(ConfigError::from)?;

        if table.is_empty() {
            warn!("Abbreviation table is empty, nothing will be shortened");
        } else {
            debug!("Loaded {} abbreviations", table.len());
        }

        Ok(Self { config, table })
    }

    pub fn run(&self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Build { qualifiers } => self.build(&qualifiers),
            Command::Header { file, comment } => self.header(&file, comment),
            Command::Styles { json } => self.styles(json),
            Command::Descriptor { name, compact } => self.descriptor(&name, compact),
            Command::Export { name } => self.export(&name),
            Command::Classify { name, text } => self.classify(&name, &text),
        }
    }

    fn build(&self, qualifiers: &[String]) -> Result<(), AppError> {
        let config = &self.config;
        let mut blobs = read_blobs(&config.languages_dir, &config.descriptor_suffix)?;

        let entry_point = config.entry_point_dir.join(&config.entry_point);

        if entry_point.is_file() {
            blobs.insert(0, DescriptorBlob::read(&entry_point)?);
        } else {
            warn!("Entry point \"{}\" not found", entry_point.display());
        }

        let total = blobs.len();
        let accepts = Filter::new(qualifiers, &config.filter_options()).predicate();
        let pipeline = Pipeline::new(
            &self.table,
            &config.replacements,
            config.strip_headers,
            config.shortening,
        );

        create_dir_all(&config.output_dir).map_err(|source| BuildError::WriteFile {
            path: config.output_dir.clone(),
            source,
        })?;

        let mut written = 0;

        for blob in blobs.iter().filter(|blob| accepts(*blob)) {
            let Some(file_name) = Path::new(&blob.name).file_name() else {
                continue;
            };

            let path = config.output_dir.join(file_name);

            write(&path, pipeline.apply(&blob.result)).map_err(|source| {
                BuildError::WriteFile {
                    path: path.clone(),
                    source,
                }
            })?;

            debug!("Wrote \"{}\"", path.display());
            written += 1;
        }

        info!(
            "Wrote {} of {} definitions to \"{}\"",
            written,
            total,
            config.output_dir.display()
        );

        Ok(())
    }

    fn header(&self, file: &Path, comment: bool) -> Result<(), AppError> {
        let blob = DescriptorBlob::read(file)?;
        let header = parse_header(&blob.result);

        match &header {
            None => warn!("No header found in \"{}\"", file.display()),
            Some(header) if header.is_empty() => {
                warn!("Header in \"{}\" has no entries", file.display())
            }
            Some(header) => debug!(
                "\"{}\" has {} header entries, language \"{}\", description \"{}\"",
                file.display(),
                header.len(),
                header.language().unwrap_or_default(),
                header.description().unwrap_or_default()
            ),
        }

        match header {
            Some(header) if comment => println!("{}", header.to_comment()),
            header => println!(
                "{}",
                serde_json::to_string_pretty(&header).map_err(BuildError::from)?
            ),
        }

        Ok(())
    }

    fn styles(&self, json: bool) -> Result<(), AppError> {
        let mut styles = list_styles(&self.config.styles_dir, &self.config.style_options())?;

        if self.config.sort_styles {
            sort_styles(&mut styles);
        }

        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&styles).map_err(BuildError::from)?
            );
        } else {
            print!("{}", format_style_table(&styles));
        }

        Ok(())
    }

    fn descriptor(&self, name: &str, compact: bool) -> Result<(), AppError> {
        let descriptor = find_language(name)?.descriptor(&StandardPrimitives);

        descriptor.validate()?;

        for (category, words) in &descriptor.categories {
            if words.is_empty() {
                warn!("Category \"{}\" has no words", category);
            } else {
                debug!("Category \"{}\" has {} words", category, words.len());
            }
        }

        debug!(
            "{} token rules, {} of them ranges",
            descriptor.token_rules.len(),
            descriptor
                .token_rules
                .iter()
                .filter(|rule| rule.is_range())
                .count()
        );

        if compact {
            let json = serde_json::to_string(&descriptor).map_err(BuildError::from)?;
            println!("{}", self.table.shorten_identifiers(&json));
        } else {
            let json = serde_json::to_string_pretty(&descriptor).map_err(BuildError::from)?;
            println!("{}", json);
        }

        Ok(())
    }

    fn export(&self, name: &str) -> Result<(), AppError> {
        let language = find_language(name)?;

        language.descriptor(&StandardPrimitives).validate()?;

        let contents = language
            .render_source(&StandardPrimitives)
            .map_err(BuildError::from)?;

        let dir = &self.config.languages_dir;
        let path = dir.join(format!("{}{}", language.name, self.config.descriptor_suffix));

        create_dir_all(dir)
            .and_then(|_| write(&path, contents))
            .map_err(|source| BuildError::WriteFile {
                path: path.clone(),
                source,
            })?;

        info!("Exported \"{}\" to \"{}\"", name, path.display());

        Ok(())
    }

    fn classify(&self, name: &str, text: &str) -> Result<(), AppError> {
        let descriptor = find_language(name)?.descriptor(&StandardPrimitives);
        let classifier = Classifier::new(&descriptor)?;

        for (word, category) in classifier.classify_text(text) {
            println!("{}\t{}", word, category);
        }

        Ok(())
    }
}

fn find_language(name: &str) -> Result<&'static LanguageDef, BuildError> {
    languages::find(name).ok_or_else(|| BuildError::UnknownLanguage(name.into()))
}

/// One style per line, names padded to a common display width.
fn format_style_table(styles: &[StyleEntry]) -> String {
    let name_width = styles
        .iter()
        .map(|style| style.name.width())
        .max()
        .unwrap_or_default();

    let mut table = String::new();

    for style in styles {
        let padding = name_width - style.name.width();

        table.push_str(&style.name);
        table.extend(std::iter::repeat(' ').take(padding + 2));
        table.push_str(&style.path.to_string_lossy());
        table.push('\n');
    }

    table
}
