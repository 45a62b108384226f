//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the cart demo
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// Number of catalogue products to add to the cart
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Product catalogue to load
    #[clap(short, long, default_value = "fixtures/products/storefront.yml")]
    pub fixture: PathBuf,

    /// Storefront config with shipping, tax and the starting price range
    #[clap(short, long, default_value = "fixtures/storefront.yml")]
    pub config: PathBuf,

    /// Only add products whose title or description contains this text
    #[clap(short, long)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_short_flags() -> TestResult {
        let args = ExampleCartArgs::try_parse_from([
            "cart",
            "-n",
            "2",
            "-c",
            "fixtures/gbp.yml",
            "-s",
            "ankara",
        ])?;

        assert_eq!(args.n, Some(2));
        assert_eq!(args.config, PathBuf::from("fixtures/gbp.yml"));
        assert_eq!(args.search.as_deref(), Some("ankara"));
        assert_eq!(args.fixture, PathBuf::from("fixtures/products/storefront.yml"));

        Ok(())
    }
}
