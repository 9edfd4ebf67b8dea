//! One frequency run: stream -> tokens -> counts -> ranked entries -> output

use std::io::{Read, Write};

use tracing::debug;

use crate::core::error::{FreqError, Result};
use crate::core::model::FrequencyMap;
use crate::core::mode::Mode;
use crate::core::ranking::{aggregate, rank};
use crate::core::render::{OutputFormat, Renderer};
use crate::core::tokenizer::{Tokens, MAX_TOKEN_SIZE};
use crate::core::unicode::NameTable;

/// Settings for a single run
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub mode: Mode,
    pub format: OutputFormat,
    pub max_token_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            format: OutputFormat::default(),
            max_token_size: MAX_TOKEN_SIZE,
        }
    }
}

impl RunConfig {
    #[allow(dead_code)]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Count every token of `reader` under `mode`
pub fn distribution<R: Read>(reader: R, mode: Mode, max_token_size: usize) -> Result<FrequencyMap> {
    aggregate(Tokens::new(reader, mode.spec().split, max_token_size))
}

/// Read the whole input, then write the ranked distribution.
///
/// Nothing is written unless the input was consumed without error.
pub fn run<R, W>(config: RunConfig, reader: R, mut writer: W, names: &dyn NameTable) -> Result<()>
where
    R: Read,
    W: Write,
{
    debug!(
        mode = %config.mode,
        max_token_size = config.max_token_size,
        "counting tokens"
    );

    let map = distribution(reader, config.mode, config.max_token_size)?;
    let ranked = rank(map);

    Renderer::new(config.mode, config.format, names)
        .render_to(&ranked, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(FreqError::Write)
}
