use clap::Subcommand;

mod build;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Assemble an EPUB from XHTML fragments and assets.
    Build(build::BuildCommand),
}
