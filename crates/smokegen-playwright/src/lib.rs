pub mod emitters;
mod generator;

pub use generator::PlaywrightGenerator;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}
