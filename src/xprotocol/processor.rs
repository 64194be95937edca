//! File processing API for the XProtocol format
//!
//! A processing spec names a stage (`token` or `ast`) and an output format,
//! written together as e.g. `token-simple` or `ast-treeviz`.
//!
//! # Sample Sources
//!
//! The `xprotocol_sources` module gives tests access to the sample documents
//! under `docs/samples/`. Tests should load these instead of pasting protocol
//! text inline when they exercise whole documents.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::xprotocol::config::ParserConfig;
use crate::xprotocol::error::XProtocolError;
use crate::xprotocol::formats::to_treeviz_str;
use crate::xprotocol::lexer::{tokenize, SpannedToken};
use crate::xprotocol::reader::parse_with_config;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// How to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Treeviz,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "treeviz" => OutputFormat::Treeviz,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "'{}' is not supported (available: {})",
                format_str,
                available_formats().join(", ")
            )));
        }
        Ok(spec)
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
        ]
    }

    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error(transparent)]
    Parse(#[from] XProtocolError),
}

/// Process protocol text into the stage and format `spec` names
pub fn process_str(
    content: &str,
    spec: &ProcessingSpec,
    config: &ParserConfig,
) -> Result<String, ProcessingError> {
    debug!(format = %spec.name(), bytes = content.len(), "processing protocol text");

    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize(content)
                .collect::<Result<Vec<_>, _>>()
                .map_err(XProtocolError::from)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Ast => {
            let protocols = parse_with_config(content, config)?;
            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&protocols)
                    .map_err(|e| ProcessingError::IoError(e.to_string())),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&protocols)),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "simple format only works with token stage".to_string(),
                )),
            }
        }
    }
}

/// Process a protocol file into the stage and format `spec` names
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    process_file_with_config(file_path, spec, &ParserConfig::default())
}

pub fn process_file_with_config<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &ParserConfig,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_str(&content, spec, config)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[SpannedToken], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for spanned in tokens {
                result.push_str(&format!(
                    "{}:{} {}\n",
                    spanned.position.line, spanned.position.column, spanned.token
                ));
            }
            Ok(result)
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(tokens).map_err(|e| ProcessingError::IoError(e.to_string()))
        }
        OutputFormat::Treeviz => Err(ProcessingError::InvalidFormatType(
            "treeviz format only works with ast stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

/// Sample sources module for accessing the bundled protocol documents
pub mod xprotocol_sources {
    use super::*;
    use crate::xprotocol::ast::Protocol;
    use crate::xprotocol::reader::parse;

    /// Available sample files
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "010-phoenix-meta.xprot",
        "020-functor-pipe-service.xprot",
        "030-cards-dependencies.xprot",
        "040-embedded-protocol.xprot",
    ];

    /// Main interface for accessing sample files
    pub struct XProtocolSources;

    impl XProtocolSources {
        fn samples_dir() -> &'static str {
            concat!(env!("CARGO_MANIFEST_DIR"), "/docs/samples")
        }

        fn sample_path(filename: &str) -> String {
            format!("{}/{}", Self::samples_dir(), filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let path = Self::sample_path(filename);
            fs::read_to_string(&path)
                .map_err(|e| ProcessingError::IoError(format!("Failed to read {}: {}", path, e)))
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let spec = ProcessingSpec::from_string(format)?;
            process_file(Self::sample_path(filename), &spec)
        }

        /// Get the parsed protocols of a sample
        pub fn get_protocols(filename: &str) -> Result<Vec<Protocol>, ProcessingError> {
            let content = Self::get_string(filename)?;
            Ok(parse(&content)?)
        }

        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_get_string_sample() {
            let content = XProtocolSources::get_string("010-phoenix-meta.xprot").unwrap();
            assert!(content.contains("PhoenixMetaProtocol"));
        }

        #[test]
        fn test_get_processed_sample() {
            let processed =
                XProtocolSources::get_processed("010-phoenix-meta.xprot", "token-simple").unwrap();
            assert!(processed.starts_with("1:1 <tag:XProtocol>\n"));
            assert!(processed.contains("<typed:ParamLong.\"Count\">"));
        }

        #[test]
        fn test_validate_sample() {
            assert!(XProtocolSources::validate_sample("010-phoenix-meta.xprot").is_ok());
            assert!(matches!(
                XProtocolSources::validate_sample("invalid.xprot"),
                Err(ProcessingError::FileNotFound(_))
            ));
        }

        #[test]
        fn test_all_samples_parse() {
            for sample in XProtocolSources::list_samples() {
                let protocols = XProtocolSources::get_protocols(sample)
                    .unwrap_or_else(|e| panic!("Sample {} should parse: {}", sample, e));
                assert!(!protocols.is_empty(), "Sample {} has no protocol", sample);
            }
        }
    }
}
