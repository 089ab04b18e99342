use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use llkit_compiler::{CompileOptions, Compiled, Compiler, GrammarError};
use llkit_core::Grammar;

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: llkit_core::LoadError,
    },

    #[error("grammar has no rules")]
    Empty,

    #[error(transparent)]
    Analysis(#[from] GrammarError),
}

/// Load a grammar from a JSON file, or stdin when the path is `-`.
pub fn load_grammar(path: &Path) -> Result<Grammar, LoaderError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoaderError::Stdin)?;
        return parse_grammar(&buf, "<stdin>");
    }

    let text = fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grammar(&text, &path.display().to_string())
}

pub fn parse_grammar(text: &str, origin: &str) -> Result<Grammar, LoaderError> {
    let grammar = Grammar::from_json(text).map_err(|source| LoaderError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    if grammar.is_empty() {
        return Err(LoaderError::Empty);
    }
    Ok(grammar)
}

/// Load and run the full pipeline.
pub fn load_and_compile(path: &Path, factor: bool) -> Result<Compiled, LoaderError> {
    let grammar = load_grammar(path)?;
    let options = CompileOptions::new().factor(factor);
    Ok(Compiler::new(grammar).options(options).compile()?)
}
